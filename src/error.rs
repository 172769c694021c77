//! Error types shared across the service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested row, or a referenced row, does not exist.
    /// Carries the fixed per-resource message surfaced to the client.
    #[error("{0}")]
    NotFound(&'static str),

    /// Request payload failed a schema or type check.
    #[error("{0}")]
    Validation(String),

    /// Unexpected storage failure during a service operation, wrapped with the
    /// underlying failure's message.
    #[error("{0}")]
    Internal(String),

    /// Pool- or migration-level database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Re-signal a storage failure as an internal failure, preserving its message.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Error::Internal(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Internal(_) | Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
