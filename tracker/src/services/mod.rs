//! Tracker service implementations

pub mod memory_store;

#[cfg(test)]
pub mod tests;

pub use memory_store::*;
