//! REST API handlers
//!
//! Automation stub, course progress and analytics endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use serde_json::{Value, json};
use shared::http::ApiJson;
use shared::{ServiceId, service_debug, service_info};

use crate::core::{process_automation, summarize_user};
use crate::error::{TrackerError, TrackerResult};
use crate::state::TrackerState;
use crate::traits::ProgressStore;
use crate::types::{AnalyticsData, AutomationRequest, AutomationResult, CourseProgress, UserAnalytics};

/// Service banner - /
pub async fn root<S>(State(state): State<Arc<TrackerState<S>>>) -> Json<Value>
where
    S: ProgressStore + 'static,
{
    let counts = state.store.counts().await;

    Json(json!({
        "message": "NeuralBrain Progress Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "uptime_seconds": state.get_uptime_seconds(),
        "courses_tracked": counts.courses_tracked,
        "analytics_events": counts.analytics_events
    }))
}

/// Health check - /api/health
pub async fn health_check<S>(State(state): State<Arc<TrackerState<S>>>) -> Json<Value>
where
    S: ProgressStore + 'static,
{
    let counts = state.store.counts().await;

    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "courses_tracked": counts.courses_tracked,
        "analytics_events": counts.analytics_events
    }))
}

/// Automation stub - /api/automation/process
pub async fn process_page<S>(
    State(state): State<Arc<TrackerState<S>>>,
    ApiJson(request): ApiJson<AutomationRequest>,
) -> TrackerResult<Json<AutomationResult>>
where
    S: ProgressStore + 'static,
{
    service_info!(
        ServiceId::current(),
        page_type = %request.page_type,
        "Processing automation request for {}",
        request.page_url
    );

    let result = process_automation(&request, &state.config.automation_delays).await?;
    Ok(Json(result))
}

/// Read course progress - GET /api/courses/:course_id/progress
pub async fn get_course_progress<S>(
    State(state): State<Arc<TrackerState<S>>>,
    Path(course_id): Path<String>,
) -> TrackerResult<Json<CourseProgress>>
where
    S: ProgressStore + 'static,
{
    state
        .store
        .get_progress(&course_id)
        .await
        .map(Json)
        .ok_or(TrackerError::CourseNotFound { course_id })
}

/// Replace course progress - POST /api/courses/:course_id/progress
pub async fn update_course_progress<S>(
    State(state): State<Arc<TrackerState<S>>>,
    Path(course_id): Path<String>,
    ApiJson(progress): ApiJson<CourseProgress>,
) -> Json<Value>
where
    S: ProgressStore + 'static,
{
    let saved = state.store.save_progress(&course_id, progress).await;
    service_debug!(ServiceId::current(), "Stored progress {:.2} for course {}", saved.progress, course_id);

    Json(json!({
        "message": format!("Progress updated for course {}", course_id),
        "course_id": course_id,
        "last_accessed": saved.last_accessed
    }))
}

/// Aggregated analytics for a user - /api/analytics/user/:user_id
pub async fn get_user_analytics<S>(
    State(state): State<Arc<TrackerState<S>>>,
    Path(user_id): Path<String>,
) -> Json<UserAnalytics>
where
    S: ProgressStore + 'static,
{
    let events = state.store.events_for_user(&user_id).await;
    Json(summarize_user(&user_id, events))
}

/// Append an analytics event - /api/analytics/track
pub async fn track_analytics<S>(
    State(state): State<Arc<TrackerState<S>>>,
    ApiJson(event): ApiJson<AnalyticsData>,
) -> Json<Value>
where
    S: ProgressStore + 'static,
{
    let tracked = state.store.track_event(event).await;
    service_debug!(
        ServiceId::current(),
        "Tracked {} event for user {}",
        tracked.action_type,
        tracked.user_id
    );

    Json(json!({
        "message": "Analytics event tracked",
        "timestamp": tracked.timestamp
    }))
}
