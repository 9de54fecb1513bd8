//! Tests for gateway services
//!
//! Upstream providers are replaced by wiremock servers.

pub mod provider_router;
