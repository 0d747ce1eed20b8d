//! Benchmark setup error type.
//!
//! Setup functions propagate generator and engine failures with `?` so
//! benchmark bodies never need `.expect()`.

use contragraph_core::{GraphError, MinCutError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated arcs were rejected by the graph builder.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A warm-up minimum cut failed.
    #[error("minimum cut failed: {0}")]
    MinCut(#[from] MinCutError),
}
