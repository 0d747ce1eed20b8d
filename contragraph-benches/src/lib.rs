//! Benchmark support crate for contragraph.
//!
//! Provides seeded graph generators and parameter types used by the
//! Criterion benchmarks for contraction and the minimum-cut driver.

pub mod error;
pub mod params;
pub mod source;
