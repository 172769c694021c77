//! fleet-api — CRUD REST service for manufacturer, car and owner records.
//!
//! Thin layered design: axum handlers validate input and delegate to services;
//! services perform lookups, referential-integrity checks and persistence through
//! sqlx repositories; a background scheduler runs the daily batch sweeps.

pub mod api;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod services;
pub mod state;

pub use error::{Error, Result};
