//! HTTP surface: router construction and request handlers

pub mod extract;
pub mod handlers;

use crate::state::AppState;
use axum::{
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Parse configured CORS origins, warning on entries that are not valid
/// header values so a typo'd origin shows up in the logs.
fn parse_cors_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let origins = parse_cors_origins(&state.config.server.cors_origins);

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(
            "/manufacturers",
            get(handlers::manufacturers::list).post(handlers::manufacturers::create),
        )
        .route(
            "/manufacturers/:id",
            get(handlers::manufacturers::get_by_id)
                .patch(handlers::manufacturers::update)
                .delete(handlers::manufacturers::delete),
        )
        .route(
            "/cars",
            get(handlers::cars::list).post(handlers::cars::create),
        )
        .route(
            "/cars/:id",
            get(handlers::cars::get_by_id)
                .patch(handlers::cars::update)
                .delete(handlers::cars::delete),
        )
        .route("/cars/:id/manufacturer", get(handlers::cars::get_manufacturer))
        .route(
            "/owners",
            get(handlers::owners::list).post(handlers::owners::create),
        )
        .route(
            "/owners/:id",
            get(handlers::owners::get_by_id)
                .patch(handlers::owners::update)
                .delete(handlers::owners::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}
