//! Gateway error types

use shared::SharedError;
use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Reasons an upstream provider call could not produce an answer.
/// Every variant routes to the demo fallback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderFailure {
    #[error("{provider} API key not configured")]
    MissingApiKey { provider: String },

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("HTTP server startup failed on {address}: {message}")]
    ServerStartup { address: String, message: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GatewayError {
    pub fn config(message: impl Into<String>) -> Self {
        GatewayError::ConfigError { message: message.into() }
    }
}
