//! HTTP plumbing common to both servers

use std::any::Any;

use axum::{
    Json,
    body::Body,
    extract::{FromRequest, rejection::JsonRejection},
    http::{HeaderValue, Response, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::logging;
use crate::types::ServiceId;

/// Panic handler for `CatchPanicLayer`: logs the panic and answers with a
/// generic 500 body
pub fn internal_error_response(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    logging::log_error(ServiceId::current(), "Request handler", &detail);

    let body = json!({ "detail": "Internal server error" }).to_string();
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// JSON body extractor whose rejections use the `{"detail": ...}` error shape
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(JsonBodyError))]
pub struct ApiJson<T>(pub T);

/// Malformed, mistyped or non-JSON request body
#[derive(Debug)]
pub struct JsonBodyError(pub JsonRejection);

impl From<JsonRejection> for JsonBodyError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for JsonBodyError {
    fn into_response(self) -> Response<Body> {
        let status = self.0.status();
        (status, Json(json!({ "detail": self.0.body_text() }))).into_response()
    }
}

/// Resolves on Ctrl+C; used for graceful shutdown
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ServiceId::current(), "Received Ctrl+C signal"),
        Err(err) => logging::log_error(ServiceId::current(), "Signal handling", &err),
    }
}
