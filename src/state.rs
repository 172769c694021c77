//! Shared application state

use crate::{
    config::Config,
    db::{CarRepository, ManufacturerRepository, OwnerRepository},
    services::{CarService, ManufacturerService, OwnerService},
    Result,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppStateOptions {
    /// Run migrations at startup (also gated by `database.synchronize`).
    pub run_migrations: bool,
    /// Create the pool without connecting eagerly (useful for tests that never
    /// touch the database).
    pub lazy_connect: bool,
}

impl Default for AppStateOptions {
    fn default() -> Self {
        Self {
            run_migrations: true,
            lazy_connect: false,
        }
    }
}

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: PgPool,
    pub manufacturer_service: Arc<ManufacturerService>,
    pub car_service: Arc<CarService>,
    pub owner_service: Arc<OwnerService>,
}

impl AppState {
    /// Initialize the application state
    pub async fn new(config: Config) -> Result<Self> {
        Self::new_with_options(config, AppStateOptions::default()).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        tracing::info!("Initializing application state...");

        let config_arc = Arc::new(config);

        let db_pool = create_db_pool(config_arc.as_ref(), options.lazy_connect).await?;

        if options.run_migrations && config_arc.database.synchronize {
            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&db_pool)
                .await
                .map_err(|e| match e {
                    sqlx::migrate::MigrateError::Execute(db_err) => crate::Error::Database(db_err),
                    other => crate::Error::Internal(format!("Migration failed: {other}")),
                })?;
        }

        // Services are layered: cars resolve manufacturers, owners resolve cars.
        let manufacturer_service = Arc::new(ManufacturerService::new(ManufacturerRepository::new(
            db_pool.clone(),
        )));
        let car_service = Arc::new(CarService::new(
            CarRepository::new(db_pool.clone()),
            manufacturer_service.clone(),
        ));
        let owner_service = Arc::new(OwnerService::new(
            OwnerRepository::new(db_pool.clone()),
            car_service.clone(),
        ));

        tracing::info!("Application state initialized successfully");

        Ok(Self {
            config: config_arc,
            db_pool,
            manufacturer_service,
            car_service,
            owner_service,
        })
    }
}

async fn create_db_pool(config: &Config, lazy: bool) -> Result<PgPool> {
    tracing::info!("Creating database connection pool...");

    let options = sqlx::postgres::PgPoolOptions::new()
        .min_connections(config.database.pool_min_size)
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.pool_timeout_seconds,
        ));

    let pool = if lazy {
        options
            .connect_lazy(&config.database.url)
            .map_err(crate::Error::Database)?
    } else {
        options
            .connect(&config.database.url)
            .await
            .map_err(crate::Error::Database)?
    };

    tracing::info!(
        "Database pool created (min: {}, max: {})",
        config.database.pool_min_size,
        config.database.pool_max_size
    );

    Ok(pool)
}
