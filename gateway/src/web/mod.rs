//! HTTP layer for the gateway

pub mod handlers;
