//! Tracker trait definitions for dependency injection

use async_trait::async_trait;

use crate::types::{AnalyticsData, CourseProgress, StoreCounts};

/// Volatile store for course progress and analytics events
#[mockall::automock]
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Stamp `last_accessed` and replace any existing record for the course
    async fn save_progress(&self, course_id: &str, progress: CourseProgress) -> CourseProgress;

    /// Stored record for the course, if any
    async fn get_progress(&self, course_id: &str) -> Option<CourseProgress>;

    /// Stamp the event and append it to the event log
    async fn track_event(&self, event: AnalyticsData) -> AnalyticsData;

    /// All events for a user in insertion order
    async fn events_for_user(&self, user_id: &str) -> Vec<AnalyticsData>;

    /// Current collection sizes
    async fn counts(&self) -> StoreCounts;
}
