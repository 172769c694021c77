//! Business logic: CRUD operations, referential resolution and batch sweeps

mod car;
mod manufacturer;
mod owner;

pub use car::{CarService, CAR_NOT_FOUND, MISSING_MANUFACTURER};
pub use manufacturer::{ManufacturerService, MANUFACTURER_NOT_FOUND};
pub use owner::{OwnerService, MISSING_CAR, OWNER_NOT_FOUND};
