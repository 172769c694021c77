//! Manufacturer service

use crate::{
    db::ManufacturerRepository,
    models::{CreateManufacturer, Manufacturer, UpdateManufacturer},
    Error, Result,
};
use chrono::Utc;

pub const MANUFACTURER_NOT_FOUND: &str = "Manufacturer not found";

pub struct ManufacturerService {
    repo: ManufacturerRepository,
}

impl ManufacturerService {
    pub fn new(repo: ManufacturerRepository) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Manufacturer>> {
        self.repo.list().await.map_err(Error::internal)
    }

    /// Absence is a `None`, not an error; callers decide whether that is a 404.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Manufacturer>> {
        self.repo.find_by_id(id).await.map_err(Error::internal)
    }

    pub async fn create(&self, payload: CreateManufacturer) -> Result<Manufacturer> {
        self.repo
            .insert(&payload.name, &payload.phone, payload.siret)
            .await
            .map_err(Error::internal)
    }

    pub async fn update(&self, id: i32, patch: UpdateManufacturer) -> Result<Manufacturer> {
        let mut manufacturer = self
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound(MANUFACTURER_NOT_FOUND))?;

        if let Some(name) = patch.name {
            manufacturer.name = name;
        }
        if let Some(phone) = patch.phone {
            manufacturer.phone = phone;
        }
        if let Some(siret) = patch.siret {
            manufacturer.siret = siret;
        }

        self.repo
            .update(&manufacturer, Utc::now())
            .await
            .map_err(Error::internal)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.find_by_id(id)
            .await?
            .ok_or(Error::NotFound(MANUFACTURER_NOT_FOUND))?;

        self.repo.delete(id).await.map_err(Error::internal)?;

        Ok(())
    }
}
