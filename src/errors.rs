use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Request-level failures. Every variant renders as a plain-text body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid from date")]
    InvalidFromDate,
    #[error("Invalid to date")]
    InvalidToDate,
    #[error("Invalid date")]
    InvalidDate,
    #[error("Invalid duration")]
    InvalidDuration,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Server error")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidFromDate
            | ApiError::InvalidToDate
            | ApiError::InvalidDate
            | ApiError::InvalidDuration
            | ApiError::MissingField(_)
            | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(ref err) = self {
            tracing::error!(error = %err, "Store operation failed");
        }

        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidFromDate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingField("username").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Store(StoreError::Database(sqlx::Error::PoolClosed)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_failures_hide_details() {
        let err = ApiError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.to_string(), "Server error");
        assert_eq!(ApiError::MissingField("description").to_string(), "description is required");
    }
}
