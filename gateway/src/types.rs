//! Request/response types for the gateway HTTP surface

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::FreeFormMap;
use std::fmt;

/// Placeholder confidence reported with every answer
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// Server name reported by `/stats`
pub const SERVER_NAME: &str = "NeuralBrain AI Backend";

/// Upstream chat-completion API selected by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Anthropic-style messages API
    #[default]
    Claude,
    /// OpenAI-style chat completions API
    Gpt,
}

impl ProviderKind {
    /// Only the exact selector `gpt` picks OpenAI; anything else is Claude
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("gpt") => ProviderKind::Gpt,
            _ => ProviderKind::Claude,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Claude => "claude",
            ProviderKind::Gpt => "gpt",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question posted by the browser extension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    #[serde(default)]
    pub context: FreeFormMap,
    #[serde(default)]
    pub url: String,
    /// Free-form selector; see [`ProviderKind::from_selector`]
    #[serde(default, alias = "ai_provider")]
    pub provider: Option<String>,
}

impl QuestionRequest {
    pub fn provider(&self) -> ProviderKind {
        ProviderKind::from_selector(self.provider.as_deref())
    }

    /// Selector echoed back in the answer: the caller's value, or `claude`
    /// when it is absent or empty
    pub fn provider_label(&self) -> String {
        match self.provider.as_deref() {
            Some(selector) if !selector.is_empty() => selector.to_string(),
            _ => ProviderKind::Claude.to_string(),
        }
    }
}

/// Answer returned to the extension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub confidence: f64,
    /// Wall-clock seconds from request receipt to response construction
    pub processing_time: f64,
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Which providers have credentials configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderAvailability {
    pub claude: bool,
    pub openai: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub server: String,
    pub version: String,
    pub uptime: String,
    pub uptime_seconds: u64,
    pub ai_providers: ProviderAvailability,
}
