pub mod cars;
pub mod manufacturers;
pub mod owners;
