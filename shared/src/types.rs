//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global service ID singleton - set once at startup
static SERVICE_ID: OnceLock<ServiceId> = OnceLock::new();

/// Caller-supplied JSON object with arbitrary shape (page context,
/// automation settings, event metadata)
pub type FreeFormMap = serde_json::Map<String, serde_json::Value>;

/// Identifier for each backend service binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceId {
    /// Question answering gateway in front of the LLM providers
    Gateway,
    /// Course progress and analytics tracker
    Tracker,
    /// Library code running without an initialised service (tests, tools)
    Standalone,
}

impl ServiceId {
    /// Initialize the global service ID for the gateway
    pub fn init_gateway() -> ServiceId {
        *SERVICE_ID.get_or_init(|| ServiceId::Gateway)
    }

    /// Initialize the global service ID for the tracker
    pub fn init_tracker() -> ServiceId {
        *SERVICE_ID.get_or_init(|| ServiceId::Tracker)
    }

    /// Get the global service ID, `Standalone` if none was initialised
    pub fn current() -> ServiceId {
        SERVICE_ID.get().copied().unwrap_or(ServiceId::Standalone)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::Gateway => "gateway",
            ServiceId::Tracker => "tracker",
            ServiceId::Standalone => "standalone",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read a string entry from a free-form map, ignoring non-string values
pub fn map_str<'a>(map: &'a FreeFormMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(|value| value.as_str())
}
