//! Per-user analytics aggregation over tracked events

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

use crate::types::{AnalyticsData, AnalyticsStats, UserAnalytics};

/// Number of most recent events returned with a user summary
pub const RECENT_EVENT_LIMIT: usize = 10;

/// Summarize one user's events. `events` must already be filtered to the
/// user and in insertion order.
pub fn summarize_user(user_id: &str, events: Vec<AnalyticsData>) -> UserAnalytics {
    let stats = compute_stats(&events);
    let total_events = events.len();
    let recent_events = recent_events(events, RECENT_EVENT_LIMIT);

    UserAnalytics {
        user_id: user_id.to_string(),
        total_events,
        recent_events,
        stats,
    }
}

/// Action counts, activity bounds and distinct active dates
pub fn compute_stats(events: &[AnalyticsData]) -> AnalyticsStats {
    let mut action_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut active_dates: HashSet<NaiveDate> = HashSet::new();

    for event in events {
        *action_counts.entry(event.action_type.clone()).or_insert(0) += 1;
        active_dates.insert(event.timestamp.date_naive());
    }

    AnalyticsStats {
        action_counts,
        first_activity: events.iter().map(|e| e.timestamp).min(),
        last_activity: events.iter().map(|e| e.timestamp).max(),
        active_days: active_dates.len(),
    }
}

/// Last `limit` events, keeping chronological order
fn recent_events(mut events: Vec<AnalyticsData>, limit: usize) -> Vec<AnalyticsData> {
    let skip = events.len().saturating_sub(limit);
    events.drain(..skip);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use shared::FreeFormMap;

    fn event(action: &str, timestamp: DateTime<Utc>) -> AnalyticsData {
        AnalyticsData {
            user_id: "u1".to_string(),
            course_id: "c1".to_string(),
            action_type: action.to_string(),
            timestamp,
            metadata: FreeFormMap::new(),
        }
    }

    #[test]
    fn test_action_counts_and_days() {
        let day1 = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let day1_late = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 0).unwrap();
        let day2 = Utc.with_ymd_and_hms(2024, 3, 2, 0, 1, 0).unwrap();

        let events = vec![event("click", day1), event("click", day1_late), event("scroll", day2)];
        let stats = compute_stats(&events);

        assert_eq!(stats.action_counts.get("click"), Some(&2));
        assert_eq!(stats.action_counts.get("scroll"), Some(&1));
        assert_eq!(stats.active_days, 2);
        assert_eq!(stats.first_activity, Some(day1));
        assert_eq!(stats.last_activity, Some(day2));
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize_user("nobody", Vec::new());

        assert_eq!(summary.total_events, 0);
        assert!(summary.recent_events.is_empty());
        assert_eq!(summary.stats, AnalyticsStats::default());
    }

    #[test]
    fn test_recent_events_are_last_ten_in_order() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let events: Vec<_> = (0..15)
            .map(|i| event(&format!("action{i}"), base + chrono::Duration::minutes(i)))
            .collect();

        let summary = summarize_user("u1", events);

        assert_eq!(summary.total_events, 15);
        assert_eq!(summary.recent_events.len(), RECENT_EVENT_LIMIT);
        assert_eq!(summary.recent_events.first().unwrap().action_type, "action5");
        assert_eq!(summary.recent_events.last().unwrap().action_type, "action14");
        assert_eq!(summary.stats.action_counts.len(), 15);
        assert_eq!(summary.stats.active_days, 1);
    }
}
