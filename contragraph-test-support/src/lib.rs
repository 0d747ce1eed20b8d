//! Shared test utilities used across contragraph crates.

pub mod ci;
pub mod tracing;
