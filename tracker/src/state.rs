//! Tracker state shared across request handlers

use std::time::Instant;

use crate::config::TrackerConfig;
use crate::traits::ProgressStore;

/// Core tracker state: the injected store plus static configuration
pub struct TrackerState<S>
where
    S: ProgressStore,
{
    pub store: S,
    pub config: TrackerConfig,
    pub server_start_time: Instant,
}

impl<S> TrackerState<S>
where
    S: ProgressStore,
{
    pub fn new(store: S, config: TrackerConfig) -> Self {
        Self {
            store,
            config,
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}
