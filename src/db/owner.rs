//! Owner repository

use crate::models::Owner;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};

#[derive(Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

fn row_to_owner(row: &PgRow) -> Owner {
    Owner {
        id: row.get("id"),
        name: row.get("name"),
        purchase_date: row.get("purchase_date"),
        car_id: row.get("car_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl OwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Owner>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, name, purchase_date, car_id, created_at, updated_at
             FROM owners
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_owner).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT id, name, purchase_date, car_id, created_at, updated_at
             FROM owners
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_owner))
    }

    pub async fn insert(&self, name: &str, car_id: i32) -> Result<Owner, sqlx::Error> {
        let row = sqlx::query(
            "INSERT INTO owners (name, car_id)
             VALUES ($1, $2)
             RETURNING id, name, purchase_date, car_id, created_at, updated_at",
        )
        .bind(name)
        .bind(car_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_owner(&row))
    }

    pub async fn update(
        &self,
        owner: &Owner,
        updated_at: DateTime<Utc>,
    ) -> Result<Owner, sqlx::Error> {
        let row = sqlx::query(
            "UPDATE owners
             SET name = $2, car_id = $3, updated_at = $4
             WHERE id = $1
             RETURNING id, name, purchase_date, car_id, created_at, updated_at",
        )
        .bind(owner.id)
        .bind(&owner.name)
        .bind(owner.car_id)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_owner(&row))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
