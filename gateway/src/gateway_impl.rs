//! Main gateway implementation
//!
//! Owns the shared state, builds the axum router and runs the HTTP server
//! with the provider router injected.

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

use crate::error::{GatewayError, GatewayResult};
use crate::state::GatewayState;
use crate::traits::ProviderRouter;
use crate::web::handlers::{answer_question, get_stats, health_check};

/// Question answering gateway with dependency injection
pub struct Gateway<P>
where
    P: ProviderRouter,
{
    state: Arc<GatewayState<P>>,
    bind_address: SocketAddr,
}

impl<P> Gateway<P>
where
    P: ProviderRouter + 'static,
{
    /// Create a new gateway around a provider router
    pub fn new(bind_address: SocketAddr, provider_router: P) -> Self {
        Self {
            state: Arc::new(GatewayState::new(provider_router)),
            bind_address,
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Start the HTTP server and block until Ctrl+C
    pub async fn run(&self) -> GatewayResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| GatewayError::ServerStartup {
                address: self.bind_address.to_string(),
                message: e.to_string(),
            })?;

        service_info!(ServiceId::current(), "📡 Gateway listening on http://{}", self.bind_address);
        service_info!(ServiceId::current(), "🔍 Health check: http://{}/health", self.bind_address);
        service_info!(ServiceId::current(), "📊 Stats: http://{}/stats", self.bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Build the router over existing state
pub fn build_router<P>(state: Arc<GatewayState<P>>) -> Router
where
    P: ProviderRouter + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/answer", post(answer_question::<P>))
        .route("/stats", get(get_stats::<P>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(internal_error_response)),
        )
        .with_state(state)
}
