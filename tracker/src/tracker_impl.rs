//! Main tracker implementation
//!
//! Holds the injected store, builds the router and runs the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use shared::http::{internal_error_response, shutdown_signal};
use shared::{ServiceId, service_info};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::state::TrackerState;
use crate::traits::ProgressStore;
use crate::web::handlers::{
    get_course_progress, get_user_analytics, health_check, process_page, root, track_analytics,
    update_course_progress,
};

/// Progress tracker server with dependency injection
pub struct Tracker<S>
where
    S: ProgressStore,
{
    state: Arc<TrackerState<S>>,
    bind_address: SocketAddr,
}

impl<S> Tracker<S>
where
    S: ProgressStore + 'static,
{
    pub fn new(bind_address: SocketAddr, store: S, config: TrackerConfig) -> Self {
        Self {
            state: Arc::new(TrackerState::new(store, config)),
            bind_address,
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Start the HTTP server and block until Ctrl+C
    pub async fn run(&self) -> TrackerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| TrackerError::ServerStartup {
                address: self.bind_address.to_string(),
                message: e.to_string(),
            })?;

        service_info!(ServiceId::current(), "🌐 Tracker listening on http://{}", self.bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Build the router over existing state
pub fn build_router<S>(state: Arc<TrackerState<S>>) -> Router
where
    S: ProgressStore + 'static,
{
    Router::new()
        .route("/", get(root::<S>))
        .route("/api/health", get(health_check::<S>))
        .route("/api/automation/process", post(process_page::<S>))
        .route(
            "/api/courses/:course_id/progress",
            get(get_course_progress::<S>).post(update_course_progress::<S>),
        )
        .route("/api/analytics/user/:user_id", get(get_user_analytics::<S>))
        .route("/api/analytics/track", post(track_analytics::<S>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(internal_error_response)),
        )
        .with_state(state)
}
