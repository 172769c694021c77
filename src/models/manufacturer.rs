//! Manufacturer entity, DTO and payloads

use crate::dates::to_iso_string;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A manufacturer row as persisted in the `manufacturers` table.
#[derive(Debug, Clone)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub siret: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public representation of a manufacturer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerDto {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub siret: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Projects a manufacturer row to its public representation.
pub fn manufacturer_dto(manufacturer: &Manufacturer) -> ManufacturerDto {
    ManufacturerDto {
        id: manufacturer.id,
        name: manufacturer.name.clone(),
        phone: manufacturer.phone.clone(),
        siret: manufacturer.siret,
        created_at: to_iso_string(manufacturer.created_at),
        updated_at: to_iso_string(manufacturer.updated_at),
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateManufacturer {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    pub siret: i64,
}

/// Partial patch. A `Some` field was present in the request body, `None` was omitted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateManufacturer {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: Option<String>,
    pub siret: Option<i64>,
}
