//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::shared::error::AppError;

/// Message for any body that is not a valid JSON book payload
pub const INVALID_BODY: &str = "Gagal memproses permintaan. Body harus berupa JSON yang valid";

/// JSON body extractor that rejects with the standard `fail` envelope
/// instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                AppError::BadRequest(INVALID_BODY.into())
            })?;

        Ok(Self(value))
    }
}
