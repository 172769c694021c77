//! PostgreSQL repositories
//!
//! Repositories return raw `sqlx::Error` values; the service layer is responsible
//! for translating storage failures at each operation boundary.

mod car;
mod manufacturer;
mod owner;

pub use car::CarRepository;
pub use manufacturer::ManufacturerRepository;
pub use owner::OwnerRepository;
