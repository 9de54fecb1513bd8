//! Gateway state shared across request handlers

use std::time::Instant;

use crate::traits::ProviderRouter;

/// Core gateway state
pub struct GatewayState<P>
where
    P: ProviderRouter,
{
    pub provider_router: P,
    pub server_start_time: Instant,
}

impl<P> GatewayState<P>
where
    P: ProviderRouter,
{
    pub fn new(provider_router: P) -> Self {
        Self {
            provider_router,
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
