//! Tracker configuration

use std::time::Duration;

use crate::types::PageType;

/// Artificial processing delay per page type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomationDelays {
    pub quiz: Duration,
    pub video: Duration,
    pub reading: Duration,
}

impl Default for AutomationDelays {
    fn default() -> Self {
        Self {
            quiz: Duration::from_secs(2),
            video: Duration::from_secs(3),
            reading: Duration::from_secs(1),
        }
    }
}

impl AutomationDelays {
    /// Same delay for every page type
    pub fn uniform(delay: Duration) -> Self {
        Self {
            quiz: delay,
            video: delay,
            reading: delay,
        }
    }

    /// No delay at all (tests)
    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    pub fn for_page(&self, page_type: PageType) -> Duration {
        match page_type {
            PageType::Quiz => self.quiz,
            PageType::Video => self.video,
            PageType::Reading => self.reading,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    pub automation_delays: AutomationDelays,
}

impl TrackerConfig {
    pub fn with_automation_delays(mut self, delays: AutomationDelays) -> Self {
        self.automation_delays = delays;
        self
    }
}
