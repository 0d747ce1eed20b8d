//! Construction of [`ContractibleGraph`] instances.

use std::collections::{HashMap, hash_map::Entry};

use crate::{
    error::GraphError,
    fold::{Fold, Sum},
};

use super::{ActiveNodes, ContractibleGraph, ParentForest, RowStore};

/// What happens to arcs whose endpoints resolve to the same live node.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SelfLoops {
    /// Discard them, both from the input and when contraction creates them.
    #[default]
    Drop,
    /// Keep them as ordinary row entries.
    Keep,
}

/// Configures and constructs [`ContractibleGraph`] instances.
///
/// The fold and the self-loop policy are fixed for the lifetime of the graph.
///
/// # Examples
/// ```
/// use contragraph_core::{GraphBuilder, Max, SelfLoops};
///
/// let graph = GraphBuilder::new(2)
///     .with_fold(Max)
///     .with_self_loops(SelfLoops::Keep)
///     .build([(0, 1, 2), (0, 1, 9), (1, 1, 4)])
///     .expect("node ids are in range");
/// assert_eq!(graph.degree(0), 1);
/// assert_eq!(graph.edge_weight(0, 0), &9);
/// assert_eq!(graph.neighbor(1, 0), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder<F = Sum> {
    node_count: usize,
    fold: F,
    self_loops: SelfLoops,
}

impl GraphBuilder<Sum> {
    /// Creates a builder for `node_count` original nodes that sums parallel
    /// arcs and drops self-loops.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            fold: Sum,
            self_loops: SelfLoops::Drop,
        }
    }
}

impl<F> GraphBuilder<F> {
    /// Replaces the fold applied to parallel arcs.
    #[must_use]
    pub fn with_fold<G>(self, fold: G) -> GraphBuilder<G> {
        GraphBuilder {
            node_count: self.node_count,
            fold,
            self_loops: self.self_loops,
        }
    }

    /// Sets the self-loop policy.
    #[must_use]
    pub fn with_self_loops(mut self, self_loops: SelfLoops) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Returns the configured number of original nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Builds the graph from `(source, destination, weight)` arcs.
    ///
    /// Repeated arcs between the same ordered pair are folded into one entry
    /// that keeps the position of the first occurrence. Self-loops in the
    /// input follow the configured [`SelfLoops`] policy.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] when an endpoint is
    /// `>= node_count`.
    pub fn build<W, I>(self, edges: I) -> Result<ContractibleGraph<W, F>, GraphError>
    where
        F: Fold<W>,
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let node_count = self.node_count;
        let mut arcs: Vec<(usize, usize)> = Vec::new();
        let mut arc_weights: Vec<W> = Vec::new();
        let mut seen: HashMap<(usize, usize), usize> = HashMap::new();

        for (from, to, weight) in edges {
            for node in [from, to] {
                if node >= node_count {
                    return Err(GraphError::InvalidNodeId {
                        node,
                        from,
                        to,
                        node_count,
                    });
                }
            }
            if from == to && self.self_loops == SelfLoops::Drop {
                continue;
            }
            match seen.entry((from, to)) {
                Entry::Occupied(entry) => {
                    let kept = &mut arc_weights[*entry.get()];
                    *kept = self.fold.fold(kept, &weight);
                }
                Entry::Vacant(entry) => {
                    entry.insert(arcs.len());
                    arcs.push((from, to));
                    arc_weights.push(weight);
                }
            }
        }

        let (targets, positions) = RowStore::scatter(node_count, &arcs);
        let reversed: Vec<(usize, usize)> = arcs.iter().map(|&(from, to)| (to, from)).collect();
        let (sources, _) = RowStore::scatter(node_count, &reversed);

        let mut order: Vec<usize> = vec![0; arcs.len()];
        for (arc, &position) in positions.iter().enumerate() {
            order[position] = arc;
        }
        let mut pending: Vec<Option<W>> = arc_weights.into_iter().map(Some).collect();
        let weights: Vec<W> = order
            .iter()
            .filter_map(|&arc| pending[arc].take())
            .collect();
        let slot_count = weights.len();

        Ok(ContractibleGraph {
            nodes: ParentForest::with_roots(node_count),
            slots: ParentForest::with_roots(slot_count),
            targets,
            sources,
            weights,
            marked: vec![false; slot_count],
            active: ActiveNodes::new(node_count),
            original_nodes: node_count,
            original_slots: slot_count,
            fold: self.fold,
            self_loops: self.self_loops,
        })
    }
}
