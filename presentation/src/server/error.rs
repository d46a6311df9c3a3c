//! Error responses of the debate API

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crossfire_domain::DomainError;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    InvalidRequest(#[from] DomainError),

    #[error("Debate exceeded the {}s time limit", .0.as_secs())]
    Timeout(Duration),

    #[error("Debate was cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(DomainError::InvalidPrompt).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(600)).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(600)).to_string(),
            "Debate exceeded the 600s time limit"
        );
    }
}
