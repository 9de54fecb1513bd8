//! HTTP layer for the tracker

pub mod handlers;
