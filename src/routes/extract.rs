// src/routes/extract.rs
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// `Json` extractor whose failures render as `{"error": ...}` with a 500.
///
/// The body must be a JSON object; arrays and scalars are refused even when
/// serde could map them onto `T`.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Internal(rejection.body_text()))?;

        if !body.is_object() {
            return Err(AppError::Internal(
                "request body must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(body)
            .map(ApiJson)
            .map_err(|e| AppError::Internal(e.to_string()))
    }
}
