//! Seeded graph generators for benchmarking.
//!
//! [`SyntheticGraph`] holds an undirected edge list expanded into both arcs,
//! ready for [`ContractibleGraph::from_edges`]. Generation is deterministic
//! for a given seed so runs stay comparable.

use contragraph_core::{ContractibleGraph, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was below two.
    #[error("node count must be at least 2 (got {0})")]
    TooFewNodes(usize),
    /// The density was outside `1..=100`.
    #[error("density must be between 1 and 100 percent (got {0})")]
    InvalidDensity(u8),
    /// The weight bound was not positive.
    #[error("maximum weight must be positive (got {0})")]
    InvalidWeight(i64),
    /// The book graph had no pages.
    #[error("a book graph needs at least one page")]
    NoPages,
}

/// Configuration for random graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Probability, in percent, that a pair of nodes is joined.
    pub density_percent: u8,
    /// Edge weights are drawn from `1..=max_weight`.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// An undirected graph stored as both arcs of every edge.
///
/// # Examples
///
/// ```
/// use contragraph_benches::source::{SyntheticConfig, SyntheticGraph};
///
/// let config = SyntheticConfig { node_count: 10, density_percent: 100, max_weight: 5, seed: 42 };
/// let graph = SyntheticGraph::random(&config).expect("valid config");
/// assert_eq!(graph.node_count(), 10);
/// assert_eq!(graph.arcs().len(), 10 * 9);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    arcs: Vec<(usize, usize, i64)>,
}

impl SyntheticGraph {
    /// Generates an Erdős–Rényi style graph. A Hamiltonian path through
    /// every node is always added so the graph is connected.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError`] when the configuration is out of range.
    pub fn random(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.node_count < 2 {
            return Err(SyntheticError::TooFewNodes(config.node_count));
        }
        if !(1..=100).contains(&config.density_percent) {
            return Err(SyntheticError::InvalidDensity(config.density_percent));
        }
        if config.max_weight < 1 {
            return Err(SyntheticError::InvalidWeight(config.max_weight));
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut arcs = Vec::new();
        for a in 0..config.node_count {
            for b in (a + 1)..config.node_count {
                let on_path = b == a + 1;
                if on_path || rng.gen_range(0..100_u8) < config.density_percent {
                    let weight = rng.gen_range(1..=config.max_weight);
                    arcs.push((a, b, weight));
                    arcs.push((b, a, weight));
                }
            }
        }
        Ok(Self {
            node_count: config.node_count,
            arcs,
        })
    }

    /// Generates a book graph: two spine nodes `0` and `1`, each joined to
    /// every page node. Contracting the spine rebuilds every page.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::NoPages`] when `pages` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use contragraph_benches::source::SyntheticGraph;
    ///
    /// let book = SyntheticGraph::book(3).expect("three pages");
    /// assert_eq!(book.node_count(), 5);
    /// assert_eq!(book.arcs().len(), 12);
    /// ```
    pub fn book(pages: usize) -> Result<Self, SyntheticError> {
        if pages == 0 {
            return Err(SyntheticError::NoPages);
        }
        let node_count = pages.saturating_add(2);
        let mut arcs = Vec::with_capacity(pages.saturating_mul(4));
        for page in 2..node_count {
            for spine in [0, 1] {
                arcs.push((spine, page, 1));
                arcs.push((page, spine, 1));
            }
        }
        Ok(Self { node_count, arcs })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns every arc as `(from, to, weight)`.
    #[must_use]
    pub fn arcs(&self) -> &[(usize, usize, i64)] {
        &self.arcs
    }

    /// Builds a fresh contractible graph with summed parallel arcs.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the builder.
    pub fn build(&self) -> Result<ContractibleGraph<i64>, GraphError> {
        ContractibleGraph::from_edges(self.node_count, self.arcs.iter().copied())
    }
}
