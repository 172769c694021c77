//! Car repository

use crate::db::manufacturer::row_to_manufacturer;
use crate::models::{Car, Manufacturer};
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};

#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

fn row_to_car(row: &PgRow) -> Car {
    Car {
        id: row.get("id"),
        manufacturer_id: row.get("manufacturer_id"),
        price: row.get("price"),
        discount_percent: row.get("discount_percent"),
        first_registration_date: row.get("first_registration_date"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Car>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, manufacturer_id, price, discount_percent, first_registration_date,
                    created_at, updated_at
             FROM cars
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_car).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT id, manufacturer_id, price, discount_percent, first_registration_date,
                    created_at, updated_at
             FROM cars
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_car))
    }

    pub async fn insert(
        &self,
        manufacturer_id: i32,
        price: i64,
        first_registration_date: DateTime<Utc>,
    ) -> Result<Car, sqlx::Error> {
        let row = sqlx::query(
            "INSERT INTO cars (manufacturer_id, price, first_registration_date)
             VALUES ($1, $2, $3)
             RETURNING id, manufacturer_id, price, discount_percent, first_registration_date,
                       created_at, updated_at",
        )
        .bind(manufacturer_id)
        .bind(price)
        .bind(first_registration_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_car(&row))
    }

    pub async fn update(&self, car: &Car, updated_at: DateTime<Utc>) -> Result<Car, sqlx::Error> {
        let row = sqlx::query(
            "UPDATE cars
             SET manufacturer_id = $2, price = $3, discount_percent = $4,
                 first_registration_date = $5, updated_at = $6
             WHERE id = $1
             RETURNING id, manufacturer_id, price, discount_percent, first_registration_date,
                       created_at, updated_at",
        )
        .bind(car.id)
        .bind(car.manufacturer_id)
        .bind(car.price)
        .bind(car.discount_percent)
        .bind(car.first_registration_date)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_car(&row))
    }

    /// Direct column update used by the discount sweep (not a merge-and-save).
    pub async fn set_discount(
        &self,
        id: i32,
        discount_percent: i32,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars SET discount_percent = $2, updated_at = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(discount_percent)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// The manufacturer a car belongs to, joined through the foreign key.
    /// `None` means the car itself is absent.
    pub async fn find_manufacturer(&self, car_id: i32) -> Result<Option<Manufacturer>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT m.id, m.name, m.phone, m.siret, m.created_at, m.updated_at
             FROM manufacturers m
             JOIN cars c ON c.manufacturer_id = m.id
             WHERE c.id = $1",
        )
        .bind(car_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_manufacturer))
    }
}
