//! Progress tracker library for the NeuralBrain backend
//!
//! Mock automation backend: canned automation results per page type plus
//! volatile course progress and analytics storage.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod tracker_impl;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::{AutomationDelays, TrackerConfig};
pub use error::{TrackerError, TrackerResult};
pub use services::MemoryStore;
pub use state::TrackerState;
pub use tracker_impl::{Tracker, build_router};
pub use traits::ProgressStore;
pub use types::*;
