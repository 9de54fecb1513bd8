//! Gateway service implementations

pub mod provider_router;

#[cfg(test)]
pub mod tests;

pub use provider_router::*;
