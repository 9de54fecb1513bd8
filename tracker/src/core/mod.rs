//! Core business logic for the tracker
//!
//! Pure functions: event aggregation and canned automation results

pub mod analytics;
pub mod automation;

pub use analytics::*;
pub use automation::*;
