//! Gateway trait definitions for dependency injection

use async_trait::async_trait;
use shared::FreeFormMap;

use crate::error::ProviderFailure;
use crate::types::{ProviderAvailability, ProviderKind};

/// Dispatches a question to the selected upstream provider
#[mockall::automock]
#[async_trait]
pub trait ProviderRouter: Send + Sync {
    /// Ask the provider for an answer. Any failure is reported, never retried.
    async fn request_answer(
        &self,
        provider: ProviderKind,
        question: &str,
        context: &FreeFormMap,
    ) -> Result<String, ProviderFailure>;

    /// Which providers have credentials configured
    fn availability(&self) -> ProviderAvailability;
}
