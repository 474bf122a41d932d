//! Foundational data structures, error types, and emitter configuration.

pub mod config;
pub mod error;
pub mod models;
