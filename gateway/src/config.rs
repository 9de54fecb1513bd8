//! Gateway configuration: provider endpoints, models and credentials

use std::env;
use std::time::Duration;

pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const ANTHROPIC_MODEL: &str = "claude-3-sonnet-20240229";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const OPENAI_TEMPERATURE: f32 = 0.7;

/// Output token cap shared by both providers
pub const MAX_OUTPUT_TOKENS: u32 = 300;

pub const ANTHROPIC_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Runtime configuration for the provider router
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_url: String,
    pub openai_url: String,
    /// `None` keeps the transport default
    pub request_timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            openai_api_key: None,
            anthropic_url: ANTHROPIC_API_URL.to_string(),
            openai_url: OPENAI_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl GatewayConfig {
    /// Read credentials from the process environment (after `.env` loading)
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: read_key(ANTHROPIC_KEY_VAR),
            openai_api_key: read_key(OPENAI_KEY_VAR),
            ..Self::default()
        }
    }

    pub fn with_anthropic_url(mut self, url: impl Into<String>) -> Self {
        self.anthropic_url = url.into();
        self
    }

    pub fn with_openai_url(mut self, url: impl Into<String>) -> Self {
        self.openai_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn has_anthropic_key(&self) -> bool {
        self.anthropic_api_key.is_some()
    }

    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

fn read_key(var: &str) -> Option<String> {
    env::var(var).ok().and_then(|value| normalize_key(&value))
}

/// Trim whitespace; blank keys count as missing
pub fn normalize_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
