//! Entity rows, public DTOs and request payloads

mod car;
mod manufacturer;
mod owner;

pub use car::{car_dto, Car, CarDto, CreateCar, UpdateCar};
pub use manufacturer::{
    manufacturer_dto, CreateManufacturer, Manufacturer, ManufacturerDto, UpdateManufacturer,
};
pub use owner::{owner_dto, CreateOwner, Owner, OwnerDto, UpdateOwner};
