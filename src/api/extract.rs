//! Request extractors

use crate::Error;
use axum::{async_trait, extract::FromRequest, extract::Request, Json};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that surfaces both deserialization failures and
/// validator failures as 400 responses with a JSON message body.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Error::Validation(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|e| Error::Validation(e.to_string()))?;

        Ok(ValidatedJson(payload))
    }
}

/// Parse a path id segment, rejecting non-integers before any service logic runs.
pub fn parse_id(raw: &str) -> crate::Result<i32> {
    raw.parse()
        .map_err(|_| Error::Validation(format!("id must be an integer, got '{raw}'")))
}
