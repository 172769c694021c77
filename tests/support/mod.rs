//! Shared harness for database-backed integration tests
//!
//! Tests run against a real Postgres instance named by
//! `FLEET__DATABASE__TEST_DATABASE_URL` (or `TEST_DATABASE_URL`). When neither
//! is set the tests are skipped, so the hermetic suite stays runnable without a
//! database. Tests are serialized through a lock and each one starts from
//! truncated tables.

use anyhow::Context as _;
use axum::{
    body::{to_bytes, Body, Bytes},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Months, Utc};
use fleet_api::{
    api::create_router,
    config::{Config, DatabaseConfig, LoggingConfig, SchedulerConfig, ServerConfig},
    state::{AppState, AppStateOptions},
};
use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;

static DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn test_database_url() -> Option<String> {
    std::env::var("FLEET__DATABASE__TEST_DATABASE_URL")
        .or_else(|_| std::env::var("TEST_DATABASE_URL"))
        .ok()
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
    _guard: MutexGuard<'static, ()>,
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Body>,
    ) -> anyhow::Result<(StatusCode, Bytes)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(body)?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await?;

        Ok((status, body))
    }
}

/// Run `test` against an application wired to the test database, or skip when
/// no test database is configured.
pub async fn with_test_app<F>(test: F) -> anyhow::Result<()>
where
    F: FnOnce(TestApp) -> Pin<Box<dyn Future<Output = anyhow::Result<()>>>>,
{
    let Some(url) = test_database_url() else {
        eprintln!(
            "skipping database-backed test: set FLEET__DATABASE__TEST_DATABASE_URL to enable"
        );
        return Ok(());
    };

    let guard = DB_LOCK.get_or_init(|| Mutex::new(())).lock().await;

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["http://localhost:3000".to_string()],
        },
        database: DatabaseConfig {
            url,
            test_database_url: None,
            pool_min_size: 1,
            pool_max_size: 5,
            pool_timeout_seconds: 5,
            synchronize: true,
        },
        scheduler: SchedulerConfig { enabled: false },
        logging: LoggingConfig::default(),
    };

    let state = AppState::new_with_options(
        config,
        AppStateOptions {
            run_migrations: true,
            lazy_connect: false,
        },
    )
    .await
    .context("connecting to the test database")?;

    // Each test starts from empty tables with fresh serial ids.
    sqlx::query("TRUNCATE owners, cars, manufacturers RESTART IDENTITY CASCADE")
        .execute(&state.db_pool)
        .await
        .context("resetting test tables")?;

    let router = create_router(state.clone());

    test(TestApp {
        state,
        router,
        _guard: guard,
    })
    .await
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, label: &str) {
    assert_eq!(actual, expected, "{label}");
}

pub fn to_json_body(value: &serde_json::Value) -> anyhow::Result<Body> {
    Ok(Body::from(serde_json::to_vec(value)?))
}

pub fn parse_json(body: &Bytes) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::from_slice(body)?)
}

pub fn months_ago(months: u32) -> DateTime<Utc> {
    Utc::now()
        .checked_sub_months(Months::new(months))
        .expect("valid past date")
}

pub async fn create_manufacturer(
    app: &TestApp,
    name: &str,
) -> anyhow::Result<serde_json::Value> {
    let (status, body) = app
        .request(
            Method::POST,
            "/manufacturers",
            Some(to_json_body(&serde_json::json!({
                "name": name,
                "phone": "000-00-00",
                "siret": 12345012345012i64
            }))?),
        )
        .await?;
    assert_status(status, StatusCode::CREATED, "create manufacturer");
    parse_json(&body)
}

pub async fn create_car(
    app: &TestApp,
    manufacturer_id: i64,
    first_registration_date: &str,
) -> anyhow::Result<serde_json::Value> {
    let (status, body) = app
        .request(
            Method::POST,
            "/cars",
            Some(to_json_body(&serde_json::json!({
                "manufacturerId": manufacturer_id,
                "firstRegistrationDate": first_registration_date,
                "price": 10000
            }))?),
        )
        .await?;
    assert_status(status, StatusCode::CREATED, "create car");
    parse_json(&body)
}

pub async fn create_owner(
    app: &TestApp,
    name: &str,
    car_id: i64,
) -> anyhow::Result<serde_json::Value> {
    let (status, body) = app
        .request(
            Method::POST,
            "/owners",
            Some(to_json_body(&serde_json::json!({
                "name": name,
                "carId": car_id
            }))?),
        )
        .await?;
    assert_status(status, StatusCode::CREATED, "create owner");
    parse_json(&body)
}
