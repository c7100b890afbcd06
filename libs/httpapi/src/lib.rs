//! Shared REST error envelope for all Filmorate modules.
//!
//! Every error leaving a REST handler is rendered as
//! `{ "error": string, "details"?: { field: message } }` with the status
//! code decided by the module's own error mapper.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Wire shape of an error body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "ErrorResponse")]
pub struct ErrorResponse {
    /// Human-readable summary of what went wrong.
    pub error: String,
    /// Per-field validation messages, present only for field-level failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: BTreeMap<String, String>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Axum response wrapper pairing a status code with the error envelope.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut resp = axum::Json(self.body).into_response();
        *resp.status_mut() = self.status;
        resp
    }
}

// Convenience constructors for the statuses the API actually uses.

pub fn bad_request(message: impl Into<String>) -> ApiError {
    ApiError::new(StatusCode::BAD_REQUEST, ErrorResponse::new(message))
}

pub fn validation_failed(details: BTreeMap<String, String>) -> ApiError {
    ApiError::new(
        StatusCode::BAD_REQUEST,
        ErrorResponse::new("Validation failed").with_details(details),
    )
}

pub fn not_found(message: impl Into<String>) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, ErrorResponse::new(message))
}

pub fn conflict(message: impl Into<String>) -> ApiError {
    ApiError::new(StatusCode::CONFLICT, ErrorResponse::new(message))
}

pub fn internal_error(message: impl Into<String>) -> ApiError {
    ApiError::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_absent_details() {
        let body = ErrorResponse::new("Film with id = 7 not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Film with id = 7 not found" })
        );
    }

    #[test]
    fn envelope_renders_field_details() {
        let mut details = BTreeMap::new();
        details.insert("email".to_string(), "must be a valid email".to_string());
        let body = ErrorResponse::new("Validation failed").with_details(details);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["details"]["email"], "must be a valid email");
    }

    #[tokio::test]
    async fn api_error_sets_status_and_json_body() {
        let resp = conflict("This email is already in use").into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "This email is already in use");
    }
}
