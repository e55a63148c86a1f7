//! JSON body extractor that reports malformed bodies in the API error format.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crewboard_core::error::AppError;

use crate::error::ApiError;

/// Like `axum::Json`, but rejections become `VALIDATION_ERROR` responses.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError(AppError::validation(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )))),
        }
    }
}
