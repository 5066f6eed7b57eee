// src/api/error.rs
// API error type shared by all HTTP handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::coach::NoPreferredSubjects;

#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16(),
        }));
        (self.status_code, body).into_response()
    }
}

impl From<NoPreferredSubjects> for ApiError {
    fn from(e: NoPreferredSubjects) -> Self {
        ApiError::bad_request(e.to_string())
    }
}

/// Convenience alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_constructor() {
        let error = ApiError::bad_request("missing field");
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "missing field");
    }

    #[test]
    fn test_from_no_preferred_subjects() {
        let error: ApiError = NoPreferredSubjects.into();
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "no preferred subjects selected");
    }
}
