//! Leaf expansion queries over the merge history.
//!
//! Expansion reads only the absorption history (the parent each node or
//! slot received when it stopped being a root), never the compressed
//! union-find links. Because a parent always has a larger id than its
//! children, every derived property can be computed in one descending sweep.

use crate::expand::{LeafEdge, LeafExpansion};

use super::ContractibleGraph;

impl<W, F> ContractibleGraph<W, F>
where
    W: Clone,
{
    /// Restores the original nodes and arcs together with the current
    /// contraction state and mark annotations.
    ///
    /// # Examples
    /// ```
    /// use contragraph_core::ContractibleGraph;
    ///
    /// let mut graph = ContractibleGraph::from_edges(3, [(0, 1, 3), (1, 0, 3), (1, 2, 1), (2, 1, 1)])?;
    /// let merged = graph.contract(0, 1);
    /// graph.mark(merged, 0);
    ///
    /// let expansion = graph.expand();
    /// assert_eq!(expansion.representatives(), &[merged, merged, 2]);
    /// let cut: Vec<_> = expansion
    ///     .marked_edges()
    ///     .map(|edge| (edge.source(), edge.destination()))
    ///     .collect();
    /// assert_eq!(cut, vec![(1, 2)]);
    /// # Ok::<(), contragraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn expand(&self) -> LeafExpansion<W> {
        let mut representatives: Vec<usize> = (0..self.nodes.len()).collect();
        for node in (0..self.nodes.len()).rev() {
            if let Some(parent) = self.nodes.absorbed_by(node) {
                representatives[node] = representatives[parent];
            }
        }
        representatives.truncate(self.original_nodes);

        let mut marked = self.marked.clone();
        for slot in (0..self.slots.len()).rev() {
            if let Some(parent) = self.slots.absorbed_by(slot) {
                marked[slot] |= marked[parent];
            }
        }

        let mut edges = Vec::with_capacity(self.original_slots);
        for source in 0..self.original_nodes {
            for slot in self.targets.row(source) {
                edges.push(LeafEdge::new(
                    source,
                    self.targets.item(slot),
                    self.weights[slot].clone(),
                    marked[slot],
                ));
            }
        }

        LeafExpansion::new(representatives, edges)
    }
}

impl<W, F> ContractibleGraph<W, F> {
    /// Returns the original nodes merged into `node`, in ascending order.
    ///
    /// `node` need not be live: the leaves of any node ever created are
    /// available.
    ///
    /// # Panics
    /// Panics when `node >= self.total_nodes()`.
    #[must_use]
    pub fn leaves_of(&self, node: usize) -> Vec<usize> {
        let mut covered = vec![false; node + 1];
        covered[node] = true;
        for candidate in (0..node).rev() {
            covered[candidate] = self
                .nodes
                .absorbed_by(candidate)
                .is_some_and(|parent| parent <= node && covered[parent]);
        }
        covered.truncate(self.original_nodes.min(node + 1));
        covered
            .iter()
            .enumerate()
            .filter_map(|(leaf, &inside)| inside.then_some(leaf))
            .collect()
    }
}
