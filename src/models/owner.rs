//! Owner entity, DTO and payloads

use crate::dates::to_iso_string;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An owner row as persisted in the `owners` table.
#[derive(Debug, Clone)]
pub struct Owner {
    pub id: i32,
    pub name: String,
    pub purchase_date: DateTime<Utc>,
    pub car_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public representation of an owner.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: i32,
    pub name: String,
    pub purchase_date: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Projects an owner row to its public representation.
pub fn owner_dto(owner: &Owner) -> OwnerDto {
    OwnerDto {
        id: owner.id,
        name: owner.name.clone(),
        purchase_date: to_iso_string(owner.purchase_date),
        created_at: to_iso_string(owner.created_at),
        updated_at: to_iso_string(owner.updated_at),
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOwner {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub car_id: i32,
}

/// Partial patch. A `Some` field was present in the request body, `None` was omitted.
///
/// A present `car_id` (even a resend of the current value) triggers re-resolution
/// against the cars table.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateOwner {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub car_id: Option<i32>,
}
