//! Shared types for the NeuralBrain backend services
//!
//! Contains only what both the provider gateway and the progress tracker
//! need: service identity, free-form JSON payloads, errors, HTTP plumbing
//! and logging.

pub mod errors;
pub mod http;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
