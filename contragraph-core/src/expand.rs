//! Expansion of a contracted graph back onto its original nodes and arcs.
//!
//! The values here are produced by [`crate::ContractibleGraph::expand`];
//! they own their data and stay valid across later contractions.

use std::collections::{HashMap, hash_map::Entry};

/// An original input arc, annotated with the marks of the slots it was folded
/// into.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeafEdge<W> {
    source: usize,
    destination: usize,
    weight: W,
    marked: bool,
}

impl<W> LeafEdge<W> {
    pub(crate) const fn new(source: usize, destination: usize, weight: W, marked: bool) -> Self {
        Self {
            source,
            destination,
            weight,
            marked,
        }
    }

    /// Returns the original source node.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the original destination node.
    #[must_use]
    #[rustfmt::skip]
    pub fn destination(&self) -> usize { self.destination }

    /// Returns the weight the arc was built with.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> &W { &self.weight }

    /// Returns `true` when the arc, or any slot it was later folded into,
    /// carries a mark.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_marked(&self) -> bool { self.marked }
}

/// The contracted state expressed over the original graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeafExpansion<W> {
    representatives: Vec<usize>,
    edges: Vec<LeafEdge<W>>,
}

impl<W> LeafExpansion<W> {
    pub(crate) const fn new(representatives: Vec<usize>, edges: Vec<LeafEdge<W>>) -> Self {
        Self {
            representatives,
            edges,
        }
    }

    /// Returns the live node currently representing each original node.
    #[must_use]
    #[rustfmt::skip]
    pub fn representatives(&self) -> &[usize] { &self.representatives }

    /// Returns the live node representing the original node `node`.
    ///
    /// # Panics
    /// Panics when `node` is not an original node.
    #[must_use]
    pub fn representative(&self, node: usize) -> usize {
        self.representatives[node]
    }

    /// Returns every original arc in row order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[LeafEdge<W>] { &self.edges }

    /// Iterates over the original arcs that carry a mark.
    pub fn marked_edges(&self) -> impl Iterator<Item = &LeafEdge<W>> + '_ {
        self.edges.iter().filter(|edge| edge.marked)
    }

    /// Groups the original nodes by their live representative, ordered by
    /// smallest member.
    #[must_use]
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut group_of: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (node, &representative) in self.representatives.iter().enumerate() {
            match group_of.entry(representative) {
                Entry::Occupied(entry) => groups[*entry.get()].push(node),
                Entry::Vacant(entry) => {
                    entry.insert(groups.len());
                    groups.push(vec![node]);
                }
            }
        }
        groups
    }
}
