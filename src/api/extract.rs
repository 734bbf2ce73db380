use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// Request body accepted either as JSON or as a URL-encoded form, chosen by
/// the `Content-Type` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            Some(ct) if ct.starts_with("application/json") => {
                let Json(payload) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
                Ok(Self(payload))
            }
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(payload) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
                Ok(Self(payload))
            }
            // No body type given: every field is treated as missing.
            None => Ok(Self(T::default())),
            Some(other) => Err(ApiError::MalformedBody(format!(
                "Unsupported content type '{}'",
                other
            ))),
        }
    }
}
