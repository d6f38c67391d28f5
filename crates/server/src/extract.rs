use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use models::Validate;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// JSON body that has been deserialized and passed [`Validate`].
///
/// Malformed JSON, missing fields and failed checks all reject with 400.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text())))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Parse a numeric path id; `kind` names the entity in the error ("Invalid booking ID").
pub fn parse_id(raw: &str, kind: &str) -> Result<u64, ApiError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ApiError::bad_request(format!("Invalid {kind} ID")))
}
