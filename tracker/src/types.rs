//! Request/response types for the tracker HTTP surface

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::FreeFormMap;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Page types the automation stub knows how to "process"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Quiz,
    Video,
    Reading,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Quiz => "quiz",
            PageType::Video => "video",
            PageType::Reading => "reading",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(PageType::Quiz),
            "video" => Ok(PageType::Video),
            "reading" => Ok(PageType::Reading),
            other => Err(TrackerError::UnsupportedPageType {
                page_type: other.to_string(),
            }),
        }
    }
}

/// Body of `POST /api/automation/process`. `page_type` stays a string so an
/// unsupported value is a 400 from the handler rather than a JSON rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationRequest {
    pub page_url: String,
    pub page_type: String,
    #[serde(default)]
    pub automation_settings: FreeFormMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Progress record for one course, replaced wholesale on every write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Overwritten with the id from the request path
    #[serde(default)]
    pub course_id: String,
    pub title: String,
    pub progress: f64,
    /// Server-assigned on write; any client value is ignored unparsed
    #[serde(skip_deserializing, default = "Utc::now")]
    pub last_accessed: DateTime<Utc>,
    #[serde(default)]
    pub completed_modules: Vec<String>,
    #[serde(default)]
    pub quiz_scores: Vec<Value>,
}

/// Single tracked analytics event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub user_id: String,
    pub course_id: String,
    pub action_type: String,
    /// Server-assigned on write; any client value is ignored unparsed
    #[serde(skip_deserializing, default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: FreeFormMap,
}

/// Aggregates over all of one user's events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsStats {
    pub action_counts: BTreeMap<String, usize>,
    pub first_activity: Option<DateTime<Utc>>,
    pub last_activity: Option<DateTime<Utc>>,
    /// Distinct UTC calendar dates with at least one event
    pub active_days: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnalytics {
    pub user_id: String,
    pub total_events: usize,
    /// Most recent events, oldest first
    pub recent_events: Vec<AnalyticsData>,
    pub stats: AnalyticsStats,
}

/// Sizes of the in-memory collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub courses_tracked: usize,
    pub analytics_events: usize,
}
