//! Provider gateway library for the NeuralBrain backend
//!
//! Forwards a browser user's question plus page context to an LLM provider
//! (Anthropic or OpenAI) and falls back to canned demo answers whenever the
//! upstream call cannot complete.

pub mod config;
pub mod core;
pub mod error;
pub mod gateway_impl;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult, ProviderFailure};
pub use gateway_impl::{Gateway, build_router};
pub use services::RealProviderRouter;
pub use state::GatewayState;
pub use traits::ProviderRouter;
pub use types::*;
