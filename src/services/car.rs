//! Car service: CRUD, manufacturer resolution and the discount sweep

use crate::{
    dates::month_diff,
    db::CarRepository,
    models::{Car, CreateCar, Manufacturer, UpdateCar},
    services::ManufacturerService,
    Error, Result,
};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::sync::Arc;

pub const CAR_NOT_FOUND: &str = "Car not found";
pub const MISSING_MANUFACTURER: &str = "Car manufacturer not found";

/// Promotional discount applied by the sweep.
const DISCOUNT_PERCENT: i32 = 20;

/// A car qualifies for the promotional discount when it has none yet and its
/// first registration lies strictly between 12 and 18 calendar months ago.
fn discount_eligible(car: &Car, now: DateTime<Utc>) -> bool {
    let months = month_diff(car.first_registration_date, now);
    car.discount_percent == 0 && months > 12 && months < 18
}

pub struct CarService {
    repo: CarRepository,
    manufacturers: Arc<ManufacturerService>,
}

impl CarService {
    pub fn new(repo: CarRepository, manufacturers: Arc<ManufacturerService>) -> Self {
        Self {
            repo,
            manufacturers,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Car>> {
        self.repo.list().await.map_err(Error::internal)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>> {
        self.repo.find_by_id(id).await.map_err(Error::internal)
    }

    pub async fn create(&self, payload: CreateCar) -> Result<Car> {
        self.manufacturers
            .find_by_id(payload.manufacturer_id)
            .await?
            .ok_or(Error::NotFound(MISSING_MANUFACTURER))?;

        let first_registration_date = parse_timestamp(&payload.first_registration_date)?;

        self.repo
            .insert(payload.manufacturer_id, payload.price, first_registration_date)
            .await
            .map_err(Error::internal)
    }

    pub async fn update(&self, id: i32, patch: UpdateCar) -> Result<Car> {
        let mut car = self
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound(CAR_NOT_FOUND))?;

        if let Some(price) = patch.price {
            car.price = price;
        }
        if let Some(raw) = patch.first_registration_date {
            car.first_registration_date = parse_timestamp(&raw)?;
        }

        // Only an explicitly present manufacturerId (including a no-op resend)
        // triggers re-resolution.
        if let Some(manufacturer_id) = patch.manufacturer_id {
            self.manufacturers
                .find_by_id(manufacturer_id)
                .await?
                .ok_or(Error::NotFound(MISSING_MANUFACTURER))?;
            car.manufacturer_id = manufacturer_id;
        }

        self.repo
            .update(&car, Utc::now())
            .await
            .map_err(Error::internal)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.find_by_id(id)
            .await?
            .ok_or(Error::NotFound(CAR_NOT_FOUND))?;

        self.repo.delete(id).await.map_err(Error::internal)?;

        Ok(())
    }

    pub async fn manufacturer_of(&self, car_id: i32) -> Result<Manufacturer> {
        self.repo
            .find_manufacturer(car_id)
            .await
            .map_err(Error::internal)?
            .ok_or(Error::NotFound(CAR_NOT_FOUND))
    }

    /// Discount sweep: set the promotional discount on every eligible car.
    ///
    /// Per-row updates are issued concurrently with no ordering guarantee and no
    /// transaction. Per-row failures are logged and do not abort sibling updates;
    /// the returned count covers successfully applied rows only.
    pub async fn apply_discount(&self) -> Result<u64> {
        let cars = self.find_all().await?;
        let now = Utc::now();

        let eligible: Vec<Car> = cars
            .into_iter()
            .filter(|car| discount_eligible(car, now))
            .collect();

        let outcomes = join_all(eligible.iter().map(|car| async move {
            self.repo
                .set_discount(car.id, DISCOUNT_PERCENT, now)
                .await
                .map_err(|e| (car.id, e))
        }))
        .await;

        let mut applied = 0u64;
        for outcome in outcomes {
            match outcome {
                Ok(rows) => applied += rows,
                Err((car_id, e)) => {
                    tracing::error!(car_id, error = %e, "Discount update failed");
                }
            }
        }

        tracing::info!(
            eligible = eligible.len(),
            applied,
            "Discount sweep completed"
        );

        Ok(applied)
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            Error::Validation(format!(
                "firstRegistrationDate must be an ISO-8601 timestamp, got '{raw}'"
            ))
        })
}
