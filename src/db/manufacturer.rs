//! Manufacturer repository

use crate::models::Manufacturer;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};

#[derive(Clone)]
pub struct ManufacturerRepository {
    pool: PgPool,
}

pub(crate) fn row_to_manufacturer(row: &PgRow) -> Manufacturer {
    Manufacturer {
        id: row.get("id"),
        name: row.get("name"),
        phone: row.get("phone"),
        siret: row.get("siret"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl ManufacturerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Manufacturer>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, name, phone, siret, created_at, updated_at
             FROM manufacturers
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_manufacturer).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Manufacturer>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT id, name, phone, siret, created_at, updated_at
             FROM manufacturers
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_manufacturer))
    }

    pub async fn insert(
        &self,
        name: &str,
        phone: &str,
        siret: i64,
    ) -> Result<Manufacturer, sqlx::Error> {
        let row = sqlx::query(
            "INSERT INTO manufacturers (name, phone, siret)
             VALUES ($1, $2, $3)
             RETURNING id, name, phone, siret, created_at, updated_at",
        )
        .bind(name)
        .bind(phone)
        .bind(siret)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_manufacturer(&row))
    }

    pub async fn update(
        &self,
        manufacturer: &Manufacturer,
        updated_at: DateTime<Utc>,
    ) -> Result<Manufacturer, sqlx::Error> {
        let row = sqlx::query(
            "UPDATE manufacturers
             SET name = $2, phone = $3, siret = $4, updated_at = $5
             WHERE id = $1
             RETURNING id, name, phone, siret, created_at, updated_at",
        )
        .bind(manufacturer.id)
        .bind(&manufacturer.name)
        .bind(&manufacturer.phone)
        .bind(manufacturer.siret)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_manufacturer(&row))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM manufacturers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
