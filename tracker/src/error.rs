//! Tracker error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use shared::{ServiceId, SharedError, service_error};
use thiserror::Error;

/// Result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Unsupported page type: {page_type}")]
    UnsupportedPageType { page_type: String },

    #[error("Course progress not found: {course_id}")]
    CourseNotFound { course_id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("HTTP server startup failed on {address}: {message}")]
    ServerStartup { address: String, message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TrackerError {
    pub fn config(message: impl Into<String>) -> Self {
        TrackerError::ConfigError { message: message.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::UnsupportedPageType { .. } => StatusCode::BAD_REQUEST,
            TrackerError::CourseNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = if status.is_client_error() {
            self.to_string()
        } else {
            service_error!(ServiceId::current(), error = %self, "Unexpected error");
            "Internal server error".to_string()
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
