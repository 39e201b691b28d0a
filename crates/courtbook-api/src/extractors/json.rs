//! JSON body extractor that answers malformed input with a 400.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// A JSON body that parsed and passed its `validator` rules.
///
/// Both parse failures and rule violations become a `VALIDATION_ERROR`
/// response instead of axum's plain-text rejections.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::validation(errors.to_string()))?;

        Ok(Self(value))
    }
}
