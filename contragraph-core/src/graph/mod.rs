//! The contractible graph engine.
//!
//! Storage is a set of append-only arenas indexed by plain integer ids:
//!
//! - a node union-find mapping every node ever created to its live
//!   representative;
//! - an edge-slot union-find mapping every arc record to the slot that holds
//!   its folded weight;
//! - forward CSR rows of edge slots and transposed CSR rows of incoming
//!   neighbours, one row of each per node;
//! - the active-node index.
//!
//! Nothing is ever freed. Contraction appends a row for the merged node (and
//! for any third party it has to rebuild) and relinks parents, so its cost is
//! bounded by the degrees of the nodes it touches.

mod active;
mod adjacency;
mod builder;
mod contract;
mod expand;
mod union_find;

use crate::fold::Sum;

pub use self::builder::{GraphBuilder, SelfLoops};

use self::{active::ActiveNodes, adjacency::RowStore, union_find::ParentForest};

/// A weighted directed graph supporting repeated node contraction.
///
/// Node ids below the construction-time node count are *original*; ids
/// allocated by [`ContractibleGraph::contract`] are *virtual*. Only live nodes
/// (see [`ContractibleGraph::live_nodes`]) should be queried; every query
/// resolves stale ids through the node union-find, so neighbours are always
/// reported as live nodes.
///
/// Row queries count entries of the row as it was built. A row never holds
/// two entries that resolve to the same live neighbour.
///
/// Queries compress union-find paths through interior mutability, so the
/// graph is `Send` but not `Sync`. All access must be serialised by the
/// caller.
#[derive(Clone, Debug)]
pub struct ContractibleGraph<W, F = Sum> {
    nodes: ParentForest,
    slots: ParentForest,
    targets: RowStore,
    sources: RowStore,
    weights: Vec<W>,
    marked: Vec<bool>,
    active: ActiveNodes,
    original_nodes: usize,
    original_slots: usize,
    fold: F,
    self_loops: SelfLoops,
}

impl<W> ContractibleGraph<W, Sum>
where
    W: Clone + std::ops::Add<Output = W>,
{
    /// Builds a graph that sums parallel arcs and drops self-loops.
    ///
    /// Supply both `(a, b, w)` and `(b, a, w)` to describe an undirected edge.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidNodeId`] when an arc references a
    /// node id `>= node_count`.
    ///
    /// # Examples
    /// ```
    /// use contragraph_core::ContractibleGraph;
    ///
    /// let graph = ContractibleGraph::from_edges(2, [(0, 1, 4), (1, 0, 4)])?;
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.neighbor(0, 0), 1);
    /// # Ok::<(), contragraph_core::GraphError>(())
    /// ```
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, crate::GraphError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        GraphBuilder::new(node_count).build(edges)
    }
}

impl<W, F> ContractibleGraph<W, F> {
    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the `index`-th live node.
    ///
    /// The order is stable between mutations but otherwise unspecified.
    ///
    /// # Panics
    /// Panics when `index >= self.node_count()`.
    #[must_use]
    pub fn node_at(&self, index: usize) -> usize {
        self.active.get(index)
    }

    /// Iterates over the live nodes in [`ContractibleGraph::node_at`] order.
    pub fn live_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.as_slice().iter().copied()
    }

    /// Returns `true` when `node` is currently live.
    #[must_use]
    pub fn is_live(&self, node: usize) -> bool {
        self.active.contains(node)
    }

    /// Returns the number of nodes ever created, original and virtual.
    #[must_use]
    pub fn total_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edge slots ever created.
    #[must_use]
    pub fn total_edge_slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of nodes the graph was built with.
    #[must_use]
    pub fn original_node_count(&self) -> usize {
        self.original_nodes
    }

    /// Returns the self-loop policy fixed at construction.
    #[must_use]
    pub fn self_loops(&self) -> SelfLoops {
        self.self_loops
    }

    /// Resolves `node` to the live node that currently represents it.
    ///
    /// # Panics
    /// Panics when `node >= self.total_nodes()`.
    #[must_use]
    pub fn find_node(&self, node: usize) -> usize {
        self.nodes.find(node)
    }

    /// Resolves an edge slot to the slot that currently holds its folded
    /// weight.
    ///
    /// # Panics
    /// Panics when `slot >= self.total_edge_slots()`.
    #[must_use]
    pub fn find_edge(&self, slot: usize) -> usize {
        self.slots.find(slot)
    }

    /// Returns the number of entries in the row of `node`.
    ///
    /// The count is fixed when the row is built and does not shrink when
    /// neighbours are contracted later.
    ///
    /// # Panics
    /// Panics when `node >= self.total_nodes()`.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.targets.row(node).len()
    }

    /// Returns the live neighbour behind the `index`-th entry of `node`'s row.
    ///
    /// # Panics
    /// Panics when `node` is unknown or `index >= self.degree(node)`.
    #[must_use]
    pub fn neighbor(&self, node: usize, index: usize) -> usize {
        self.nodes.find(self.targets.item(self.slot(node, index)))
    }

    /// Returns the folded weight of the `index`-th entry of `node`'s row.
    ///
    /// # Panics
    /// Panics when `node` is unknown or `index >= self.degree(node)`.
    #[must_use]
    pub fn edge_weight(&self, node: usize, index: usize) -> &W {
        &self.weights[self.slots.find(self.slot(node, index))]
    }

    /// Iterates over `(neighbor, weight)` for every entry of `node`'s row.
    ///
    /// # Panics
    /// Panics when `node >= self.total_nodes()`.
    pub fn edges(&self, node: usize) -> impl Iterator<Item = (usize, &W)> + '_ {
        (0..self.degree(node)).map(move |index| (self.neighbor(node, index), self.edge_weight(node, index)))
    }

    /// Tags the edge slot behind the `index`-th entry of `node`'s row.
    ///
    /// Marks have no meaning to the engine; they let callers annotate arcs
    /// across contractions (see [`ContractibleGraph::expand`]).
    ///
    /// # Panics
    /// Panics when `node` is unknown or `index >= self.degree(node)`.
    pub fn mark(&mut self, node: usize, index: usize) {
        let slot = self.slot(node, index);
        self.marked[slot] = true;
    }

    /// Returns whether the `index`-th entry of `node`'s row carries a mark.
    ///
    /// # Panics
    /// Panics when `node` is unknown or `index >= self.degree(node)`.
    #[must_use]
    pub fn is_marked(&self, node: usize, index: usize) -> bool {
        self.marked[self.slot(node, index)]
    }

    /// Removes every mark.
    pub fn clear_marks(&mut self) {
        self.marked.fill(false);
    }

    fn slot(&self, node: usize, index: usize) -> usize {
        let row = self.targets.row(node);
        assert!(
            index < row.len(),
            "row index {index} out of range for node {node} with degree {}",
            row.len()
        );
        row.start + index
    }
}


#[cfg(test)]
mod property;
