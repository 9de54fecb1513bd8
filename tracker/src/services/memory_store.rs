//! In-memory progress store; all state is lost on restart

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::traits::ProgressStore;
use crate::types::{AnalyticsData, CourseProgress, StoreCounts};

/// Source of server-assigned timestamps
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Process-lifetime store for course progress and analytics events
pub struct MemoryStore {
    course_progress: RwLock<HashMap<String, CourseProgress>>,
    analytics_events: RwLock<Vec<AnalyticsData>>,
    clock: Clock,
}

impl MemoryStore {
    /// Create an empty store stamped with the wall clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    /// Create an empty store with a custom timestamp source
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            course_progress: RwLock::new(HashMap::new()),
            analytics_events: RwLock::new(Vec::new()),
            clock,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn save_progress(&self, course_id: &str, mut progress: CourseProgress) -> CourseProgress {
        let mut courses = self.course_progress.write().await;
        progress.course_id = course_id.to_string();
        progress.last_accessed = (self.clock)();
        courses.insert(course_id.to_string(), progress.clone());
        progress
    }

    async fn get_progress(&self, course_id: &str) -> Option<CourseProgress> {
        let courses = self.course_progress.read().await;
        courses.get(course_id).cloned()
    }

    async fn track_event(&self, mut event: AnalyticsData) -> AnalyticsData {
        let mut events = self.analytics_events.write().await;
        event.timestamp = (self.clock)();
        events.push(event.clone());
        event
    }

    async fn events_for_user(&self, user_id: &str) -> Vec<AnalyticsData> {
        let events = self.analytics_events.read().await;
        events.iter().filter(|event| event.user_id == user_id).cloned().collect()
    }

    async fn counts(&self) -> StoreCounts {
        let courses_tracked = self.course_progress.read().await.len();
        let analytics_events = self.analytics_events.read().await.len();
        StoreCounts {
            courses_tracked,
            analytics_events,
        }
    }
}
