//! REST API handlers
//!
//! Health, stats and the question answering endpoint used by the extension

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, response::Json};
use chrono::Utc;
use shared::http::ApiJson;
use shared::{ServiceId, service_info, service_warn};

use crate::core::{fallback_answer, truncate_chars};
use crate::state::GatewayState;
use crate::traits::ProviderRouter;
use crate::types::{AnswerResponse, DEFAULT_CONFIDENCE, HealthResponse, QuestionRequest, SERVER_NAME, StatsResponse};

/// Characters of the question echoed into the log
const LOGGED_QUESTION_CHARS: usize = 100;

/// Health check endpoint - /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Server statistics endpoint - /stats
pub async fn get_stats<P>(State(state): State<Arc<GatewayState<P>>>) -> Json<StatsResponse>
where
    P: ProviderRouter + 'static,
{
    Json(StatsResponse {
        server: SERVER_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: "Running".to_string(),
        uptime_seconds: state.get_uptime_seconds(),
        ai_providers: state.provider_router.availability(),
    })
}

/// Answer endpoint - /answer
///
/// Upstream failures never reach the caller: the demo answer is substituted
/// and the response still echoes the requested provider.
pub async fn answer_question<P>(
    State(state): State<Arc<GatewayState<P>>>,
    ApiJson(request): ApiJson<QuestionRequest>,
) -> Json<AnswerResponse>
where
    P: ProviderRouter + 'static,
{
    let start_time = Instant::now();
    let provider = request.provider();

    service_info!(
        ServiceId::current(),
        provider = %provider,
        "Received question: {}...",
        truncate_chars(&request.question, LOGGED_QUESTION_CHARS)
    );

    let answer = match state
        .provider_router
        .request_answer(provider, &request.question, &request.context)
        .await
    {
        Ok(answer) => answer,
        Err(failure) => {
            service_warn!(
                ServiceId::current(),
                provider = %provider,
                "AI provider failed, using demo response: {}",
                failure
            );
            fallback_answer(&request.question)
        }
    };

    let processing_time = start_time.elapsed().as_secs_f64();
    service_info!(ServiceId::current(), "Generated answer in {:.2}s", processing_time);

    Json(AnswerResponse {
        answer,
        confidence: DEFAULT_CONFIDENCE,
        processing_time,
        provider: request.provider_label(),
    })
}
