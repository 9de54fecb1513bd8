//! Shared logging utilities for consistent tracing across both services

use crate::errors::{SharedError, SharedResult};
use crate::types::ServiceId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Normalize a `--log-level` argument, rejecting unknown levels
pub fn parse_log_level(level: &str) -> SharedResult<String> {
    let normalized = level.trim().to_lowercase();
    if LOG_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(SharedError::InvalidConfig {
            field: "log_level".to_string(),
            value: level.to_string(),
        })
    }
}

/// Build the default filter directives for a service at the given level
pub fn default_filter(service_id: ServiceId, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");

    match service_id {
        ServiceId::Gateway => {
            format!("gateway={base_level},shared={base_level},tower_http={base_level},reqwest=warn,hyper=warn")
        }
        ServiceId::Tracker => {
            format!("tracker={base_level},shared={base_level},tower_http=debug,axum={base_level}")
        }
        ServiceId::Standalone => base_level.to_string(),
    }
}

/// Initialize tracing subscriber for the current service with a log level.
/// `RUST_LOG` takes precedence over the computed directives when set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let service_id = ServiceId::current();
    let level_filter = default_filter(service_id, log_level);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level_filter));

    // try_init so a second call (tests) does not panic
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for service-aware info logging
#[macro_export]
macro_rules! service_info {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::info!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware warning logging
#[macro_export]
macro_rules! service_warn {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware error logging
#[macro_export]
macro_rules! service_error {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::error!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for service-aware debug logging
#[macro_export]
macro_rules! service_debug {
    ($service_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            service = %$service_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(service_id: ServiceId, details: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(service_id: ServiceId, reason: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(service_id: ServiceId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        service = %service_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(service_id: ServiceId, message: &str) {
    info!(
        service = %service_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
