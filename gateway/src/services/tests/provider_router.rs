//! Tests for ProviderRouter service

use serde_json::json;
use shared::FreeFormMap;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::GatewayConfig;
use crate::error::ProviderFailure;
use crate::services::provider_router::RealProviderRouter;
use crate::traits::ProviderRouter;
use crate::types::ProviderKind;

fn router_for(server: &MockServer, anthropic_key: Option<&str>, openai_key: Option<&str>) -> RealProviderRouter {
    let config = GatewayConfig {
        anthropic_api_key: anthropic_key.map(str::to_string),
        openai_api_key: openai_key.map(str::to_string),
        ..GatewayConfig::default()
    }
    .with_anthropic_url(format!("{}/v1/messages", server.uri()))
    .with_openai_url(format!("{}/v1/chat/completions", server.uri()));

    RealProviderRouter::new(config).unwrap()
}

fn page_context() -> FreeFormMap {
    json!({ "url": "https://example.com", "title": "Example" })
        .as_object()
        .cloned()
        .unwrap()
}

#[tokio::test]
async fn test_anthropic_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "anthropic-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-sonnet-20240229",
            "max_tokens": 300
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": "Claude says hi" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server, Some("anthropic-test"), None);
    let answer = router
        .request_answer(ProviderKind::Claude, "Hello?", &page_context())
        .await
        .unwrap();

    assert_eq!(answer, "Claude says hi");
}

#[tokio::test]
async fn test_openai_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer openai-test"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 300,
            "temperature": 0.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "GPT says hi" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server, None, Some("openai-test"));
    let answer = router
        .request_answer(ProviderKind::Gpt, "Hello?", &page_context())
        .await
        .unwrap();

    assert_eq!(answer, "GPT says hi");
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let router = router_for(&server, None, None);

    let claude = router
        .request_answer(ProviderKind::Claude, "q", &FreeFormMap::new())
        .await;
    assert_eq!(
        claude,
        Err(ProviderFailure::MissingApiKey { provider: "claude".to_string() })
    );

    let gpt = router.request_answer(ProviderKind::Gpt, "q", &FreeFormMap::new()).await;
    assert_eq!(gpt, Err(ProviderFailure::MissingApiKey { provider: "gpt".to_string() }));
}

#[tokio::test]
async fn test_non_200_reported_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid x-api-key"))
        .mount(&server)
        .await;

    let router = router_for(&server, Some("bad-key"), None);
    let result = router
        .request_answer(ProviderKind::Claude, "q", &FreeFormMap::new())
        .await;

    assert_eq!(
        result,
        Err(ProviderFailure::UpstreamStatus {
            status: 401,
            body: "invalid x-api-key".to_string()
        })
    );
}

#[tokio::test]
async fn test_non_200_success_class_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let router = router_for(&server, None, Some("key"));
    let result = router.request_answer(ProviderKind::Gpt, "q", &FreeFormMap::new()).await;

    assert!(matches!(result, Err(ProviderFailure::UpstreamStatus { status: 202, .. })));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let router = router_for(&server, None, Some("key"));
    let result = router.request_answer(ProviderKind::Gpt, "q", &FreeFormMap::new()).await;

    assert!(matches!(result, Err(ProviderFailure::MalformedResponse(_))));
}

#[tokio::test]
async fn test_network_error() {
    // Port 9 (discard) on localhost is not expected to accept HTTP
    let config = GatewayConfig {
        anthropic_api_key: Some("key".to_string()),
        ..GatewayConfig::default()
    }
    .with_anthropic_url("http://127.0.0.1:9/v1/messages");
    let router = RealProviderRouter::new(config).unwrap();

    let result = router
        .request_answer(ProviderKind::Claude, "q", &FreeFormMap::new())
        .await;

    assert!(matches!(result, Err(ProviderFailure::NetworkError(_))));
}

#[test]
fn test_availability_reflects_keys() {
    let config = GatewayConfig {
        anthropic_api_key: Some("a".to_string()),
        ..GatewayConfig::default()
    };
    let router = RealProviderRouter::new(config).unwrap();

    let availability = router.availability();
    assert!(availability.claude);
    assert!(!availability.openai);
}
