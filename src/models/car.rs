//! Car entity, DTO and payloads

use crate::dates::to_iso_string;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A car row as persisted in the `cars` table.
#[derive(Debug, Clone)]
pub struct Car {
    pub id: i32,
    pub manufacturer_id: i32,
    pub price: i64,
    pub discount_percent: i32,
    pub first_registration_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public representation of a car.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub id: i32,
    pub price: i64,
    pub first_registration_date: String,
    pub discount_percent: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Projects a car row to its public representation.
pub fn car_dto(car: &Car) -> CarDto {
    CarDto {
        id: car.id,
        price: car.price,
        first_registration_date: to_iso_string(car.first_registration_date),
        discount_percent: car.discount_percent,
        created_at: to_iso_string(car.created_at),
        updated_at: to_iso_string(car.updated_at),
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCar {
    pub manufacturer_id: i32,
    /// ISO-8601 timestamp string, parsed by the service.
    pub first_registration_date: String,
    pub price: i64,
}

/// Partial patch. A `Some` field was present in the request body, `None` was omitted.
///
/// A present `manufacturer_id` (even a resend of the current value) triggers
/// re-resolution against the manufacturers table.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCar {
    pub manufacturer_id: Option<i32>,
    pub first_registration_date: Option<String>,
    pub price: Option<i64>,
}
