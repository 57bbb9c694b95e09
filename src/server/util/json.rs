//! JSON bodies that reach validation even when fields are missing.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::AppError;

/// Deserializes a JSON body and runs its `Validate` rules.
///
/// DTOs used with this extractor default their missing fields, so an absent
/// field is reported by the validator with its field message instead of
/// failing deserialization.
///
/// # Rejections
/// - `AppError::Validation` - Body parsed but failed validation
/// - `AppError::BadRequest` - Body is not JSON, has the wrong shape, or is too large
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        value.validate()?;

        Ok(Self(value))
    }
}

fn reject_body(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::BadRequest("Request body too large".to_string());
    }

    tracing::debug!("Rejected JSON body: {}", rejection.body_text());
    AppError::BadRequest("Invalid request body".to_string())
}
