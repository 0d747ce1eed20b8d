//! Benchmark parameter types used as Criterion benchmark ids.

use std::fmt;

/// Parameters for a benchmark over a random graph.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Probability, in percent, that a pair of nodes is joined.
    pub density_percent: u8,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}%", self.node_count, self.density_percent)
    }
}

/// Parameters for a benchmark over a book graph.
#[derive(Clone, Debug)]
pub struct BookBenchParams {
    /// Number of pages sharing the spine.
    pub pages: usize,
}

impl fmt::Display for BookBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pages={}", self.pages)
    }
}
