//! Owner service: CRUD, car resolution and the stale-record purge

use crate::{
    dates::month_diff,
    db::OwnerRepository,
    models::{CreateOwner, Owner, UpdateOwner},
    services::CarService,
    Error, Result,
};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::sync::Arc;

pub const OWNER_NOT_FOUND: &str = "Owner not found";
pub const MISSING_CAR: &str = "Owner car not found";

/// Owners whose purchase lies more than this many calendar months in the past
/// are purged by the sweep.
const PURGE_MONTH_THRESHOLD: i32 = 18;

fn purge_due(owner: &Owner, now: DateTime<Utc>) -> bool {
    month_diff(owner.purchase_date, now) > PURGE_MONTH_THRESHOLD
}

pub struct OwnerService {
    repo: OwnerRepository,
    cars: Arc<CarService>,
}

impl OwnerService {
    pub fn new(repo: OwnerRepository, cars: Arc<CarService>) -> Self {
        Self { repo, cars }
    }

    pub async fn find_all(&self) -> Result<Vec<Owner>> {
        self.repo.list().await.map_err(Error::internal)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Owner>> {
        self.repo.find_by_id(id).await.map_err(Error::internal)
    }

    pub async fn create(&self, payload: CreateOwner) -> Result<Owner> {
        self.cars
            .find_by_id(payload.car_id)
            .await?
            .ok_or(Error::NotFound(MISSING_CAR))?;

        self.repo
            .insert(&payload.name, payload.car_id)
            .await
            .map_err(Error::internal)
    }

    pub async fn update(&self, id: i32, patch: UpdateOwner) -> Result<Owner> {
        let mut owner = self
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound(OWNER_NOT_FOUND))?;

        if let Some(name) = patch.name {
            owner.name = name;
        }

        // Only an explicitly present carId (including a no-op resend) triggers
        // re-resolution.
        if let Some(car_id) = patch.car_id {
            self.cars
                .find_by_id(car_id)
                .await?
                .ok_or(Error::NotFound(MISSING_CAR))?;
            owner.car_id = car_id;
        }

        self.repo
            .update(&owner, Utc::now())
            .await
            .map_err(Error::internal)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.find_by_id(id)
            .await?
            .ok_or(Error::NotFound(OWNER_NOT_FOUND))?;

        self.repo.delete(id).await.map_err(Error::internal)?;

        Ok(())
    }

    /// Purge sweep: delete every owner whose purchase is older than the threshold.
    ///
    /// Deletions go through the single-record `delete` (which re-checks existence)
    /// and are issued concurrently with no ordering guarantee and no transaction.
    /// Per-row failures are logged and do not abort sibling deletions; the returned
    /// count covers successfully purged rows only.
    pub async fn remove_old_records(&self) -> Result<u64> {
        let owners = self.find_all().await?;
        let now = Utc::now();

        let stale: Vec<Owner> = owners
            .into_iter()
            .filter(|owner| purge_due(owner, now))
            .collect();

        let outcomes = join_all(
            stale
                .iter()
                .map(|owner| async move { self.delete(owner.id).await.map_err(|e| (owner.id, e)) }),
        )
        .await;

        let mut purged = 0u64;
        for outcome in outcomes {
            match outcome {
                Ok(()) => purged += 1,
                Err((owner_id, e)) => {
                    tracing::error!(owner_id, error = %e, "Owner purge failed");
                }
            }
        }

        tracing::info!(stale = stale.len(), purged, "Purge sweep completed");

        Ok(purged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn owner_purchased(purchase_date: DateTime<Utc>) -> Owner {
        Owner {
            id: 1,
            name: "John".to_string(),
            purchase_date,
            car_id: 1,
            created_at: purchase_date,
            updated_at: purchase_date,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn nineteen_months_old_is_purged() {
        let now = date(2020, 8, 13);
        assert!(purge_due(&owner_purchased(date(2019, 1, 13)), now));
    }

    #[test]
    fn exactly_eighteen_months_is_retained() {
        let now = date(2020, 7, 13);
        assert!(!purge_due(&owner_purchased(date(2019, 1, 13)), now));
    }

    #[test]
    fn recent_purchase_is_retained() {
        let now = date(2019, 3, 1);
        assert!(!purge_due(&owner_purchased(date(2019, 1, 13)), now));
    }
}
