//! Error types for signing requests and start-up configuration.

use crate::models::ErrorResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// Errors raised while producing an auth header for a request
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("Missing {0} in request")]
    MissingField(&'static str),

    #[error("SHA256 calculation failed: {0}")]
    HashComputation(String),
}

impl SignatureError {
    /// Machine-readable kind reported in the error body
    pub fn kind(&self) -> &'static str {
        match self {
            SignatureError::MissingField(_) => "missing_field",
            SignatureError::HashComputation(_) => "hash_computation_failure",
        }
    }
}

impl ResponseError for SignatureError {
    fn status_code(&self) -> StatusCode {
        match self {
            SignatureError::MissingField(_) => StatusCode::BAD_REQUEST,
            SignatureError::HashComputation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.to_string(), self.kind()))
    }
}

/// Errors raised while loading process configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_a_client_error() {
        let err = SignatureError::MissingField("timestamp");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "missing_field");
        assert_eq!(err.to_string(), "Missing timestamp in request");
    }

    #[test]
    fn hash_failure_surfaces_underlying_message() {
        let err = SignatureError::HashComputation("digest unavailable".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("digest unavailable"));
    }

    #[test]
    fn error_response_is_json() {
        let resp = SignatureError::MissingField("payloadString").error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.contains("application/json"));
    }
}
