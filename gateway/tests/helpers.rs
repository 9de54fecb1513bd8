//! Test helper utilities for gateway integration tests

#![allow(dead_code)] // Not every test binary uses every helper

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use gateway::{GatewayState, ProviderRouter, build_router};

/// Build a router around any provider router implementation
pub fn test_router<P>(provider_router: P) -> Router
where
    P: ProviderRouter + 'static,
{
    build_router(Arc::new(GatewayState::new(provider_router)))
}

/// Send a request through the router and decode the JSON body
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
