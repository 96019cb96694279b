//! Service errors for the journal metrics API.
//!
//! Calculations never fail; errors only come from request validation and
//! report rendering. Each error carries a stable code that maps to an HTTP
//! status and is returned to clients as a JSON body.
//!
//! # HTTP Status Codes
//!
//! | Code | HTTP | Usage |
//! |------|------|-------|
//! | `INVALID_REQUEST` | 400 | Malformed or inconsistent request |
//! | `INVALID_PARAMETER` | 400 | Parameter outside its allowed range |
//! | `REPORT_FAILED` | 500 | Report could not be rendered |

use std::collections::BTreeMap;

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::ReportError;

/// Error codes for the metrics service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body is not valid JSON or lacks required fields.
    InvalidRequest,
    /// Request parameter outside its allowed range.
    InvalidParameter,
    /// Report rendering failed.
    ReportFailed,
}

impl ErrorCode {
    /// HTTP status returned for this code.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidParameter => StatusCode::BAD_REQUEST,
            Self::ReportFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::ReportFailed => "REPORT_FAILED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A service error with a code and key-value context.
#[derive(Debug, Error)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl ApiError {
    /// Create a new API error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Convert to the JSON body sent to clients.
    #[must_use]
    pub fn to_response_body(&self) -> ApiErrorResponse {
        let details = if self.context.is_empty() {
            None
        } else {
            Some(self.context.iter().cloned().collect())
        };

        ApiErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            details,
        }
    }
}

/// Convenience constructors for common errors.
impl ApiError {
    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Parameter outside its allowed range.
    #[must_use]
    pub fn invalid_parameter(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameter, message).with_context("field", field)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_request(rejection.body_text())
            .with_context("rejection", rejection.status().as_u16().to_string())
    }
}

impl From<ReportError> for ApiError {
    fn from(error: ReportError) -> Self {
        Self::new(ErrorCode::ReportFailed, error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.code.http_status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, message = %self.message, "Request failed");
        } else {
            tracing::warn!(code = %self.code, message = %self.message, "Request rejected");
        }

        (status, Json(self.to_response_body())).into_response()
    }
}

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Additional details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_mapping() {
        assert_eq!(ErrorCode::InvalidRequest.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidParameter.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::ReportFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_code_serializes_as_reason() {
        let json = serde_json::to_string(&ErrorCode::InvalidParameter).unwrap();
        assert_eq!(json, "\"INVALID_PARAMETER\"");
        assert_eq!(ErrorCode::InvalidParameter.to_string(), "INVALID_PARAMETER");
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::invalid_request("trades must be a list");
        assert_eq!(error.to_string(), "[INVALID_REQUEST] trades must be a list");
    }

    #[test]
    fn test_response_body_includes_context() {
        let error = ApiError::invalid_parameter("risk_free_rate", "must be between 0 and 1")
            .with_context("value", "1.5");
        let body = error.to_response_body();

        assert_eq!(body.code, "INVALID_PARAMETER");
        assert_eq!(body.message, "must be between 0 and 1");
        let details = body.details.unwrap();
        assert_eq!(details.get("field").map(String::as_str), Some("risk_free_rate"));
        assert_eq!(details.get("value").map(String::as_str), Some("1.5"));
    }

    #[test]
    fn test_response_body_omits_empty_details() {
        let body = ApiError::invalid_request("boom").to_response_body();
        assert!(body.details.is_none());

        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_report_error_maps_to_report_failed() {
        let error: ApiError = ReportError::Format(std::fmt::Error).into();
        assert_eq!(error.code(), ErrorCode::ReportFailed);
        assert_eq!(error.code().http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::invalid_request("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
