//! Request extractors shared by the API handlers.

use crate::errors::Error;
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor that reports schema failures as 400 validation
/// errors instead of axum's default 422 rejection.
///
/// Covers malformed JSON, missing required fields, and out-of-set enum
/// values; the rejection text carries the offending path.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| Error::Validation {
            field: "body".to_string(),
            message: rejection.body_text(),
        })?;
        Ok(AppJson(value))
    }
}
