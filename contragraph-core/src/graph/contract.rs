//! Node contraction and the third-party cascade.
//!
//! Merging `a` and `b` into `m` builds one new row for `m` from the rows of
//! `a` and `b`, folding entries that resolve to the same neighbour. A third
//! node `e` that pointed into both `a` and `b` now owns two row entries that
//! resolve to `m`; its row cannot be edited in place, so `e` is re-created as
//! a fresh virtual node whose row is rebuilt with the same folding pass.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::fold::Fold;

use super::{ContractibleGraph, SelfLoops};

/// A node that points into one or both sides of a contraction.
#[derive(Clone, Copy, Debug)]
struct ThirdParty {
    node: usize,
    sides: u8,
}

impl ThirdParty {
    const fn points_into_both(self) -> bool {
        self.sides == 0b11
    }
}

impl<W, F> ContractibleGraph<W, F>
where
    W: Clone,
    F: Fold<W>,
{
    /// Merges the nodes represented by `a` and `b` into a new virtual node
    /// and returns its id.
    ///
    /// `a` and `b` may be stale ids; both are resolved first. Arcs between
    /// the two sides become self-loops and follow the [`SelfLoops`] policy.
    /// Any third node pointing into both sides is re-created under a new id
    /// so that its row stays free of duplicate neighbours; it keeps its
    /// position in the live-node order.
    ///
    /// # Panics
    /// Panics when `a` and `b` resolve to the same live node, or when either
    /// id is unknown.
    ///
    /// # Examples
    /// ```
    /// use contragraph_core::ContractibleGraph;
    ///
    /// let mut graph = ContractibleGraph::from_edges(3, [(0, 1, 4), (1, 0, 4), (1, 2, 1), (2, 1, 1)])?;
    /// let merged = graph.contract(0, 1);
    /// assert!(!graph.is_live(0));
    /// assert!(graph.is_live(merged));
    /// assert_eq!(graph.edges(merged).collect::<Vec<_>>(), vec![(2, &1)]);
    /// # Ok::<(), contragraph_core::GraphError>(())
    /// ```
    pub fn contract(&mut self, a: usize, b: usize) -> usize {
        let left = self.nodes.find(a);
        let right = self.nodes.find(b);
        assert_ne!(
            left, right,
            "cannot contract {a} with {b}: both resolve to node {left}"
        );

        let merged = self.allocate_node();
        self.nodes.attach(left, merged);
        self.nodes.attach(right, merged);
        self.absorb_rows(merged, &[left, right]);

        let third_parties = self.third_parties(merged, [left, right]);
        for party in &third_parties {
            self.sources.push(party.node);
        }
        self.active.push(merged);

        let mut cascades = 0_usize;
        for party in third_parties.iter().filter(|party| party.points_into_both()) {
            self.revirtualize(party.node);
            cascades += 1;
        }

        self.active.remove(left);
        self.active.remove(right);

        trace!(left, right, merged, cascades, "contracted nodes");
        #[cfg(feature = "metrics")]
        {
            metrics::counter!("contragraph_contractions_total").increment(1);
            metrics::counter!("contragraph_cascade_splits_total").increment(cascades as u64);
        }
        merged
    }

    /// Re-creates `node` under a fresh id with a freshly folded row.
    fn revirtualize(&mut self, node: usize) -> usize {
        let fresh = self.allocate_node();
        self.nodes.attach(node, fresh);
        self.absorb_rows(fresh, &[node]);

        let mut seen = HashSet::new();
        for position in self.sources.row(node) {
            let source = self.nodes.find(self.sources.item(position));
            if seen.insert(source) {
                self.sources.push(source);
            }
        }

        self.active.replace(node, fresh);
        trace!(node, fresh, "rebuilt third-party row");
        fresh
    }

    /// Opens a node id together with its forward and transposed rows.
    fn allocate_node(&mut self) -> usize {
        let node = self.nodes.push_root();
        let row = self.targets.open_row();
        let transposed_row = self.sources.open_row();
        debug_assert_eq!(node, row);
        debug_assert_eq!(node, transposed_row);
        node
    }

    /// Fills the freshly opened row of `owner` from the rows of `rows`,
    /// folding entries that resolve to the same live neighbour.
    fn absorb_rows(&mut self, owner: usize, rows: &[usize]) {
        let mut folded: HashMap<usize, usize> = HashMap::new();
        for &row in rows {
            for position in self.targets.row(row) {
                let destination = self.nodes.find(self.targets.item(position));
                if destination == owner && self.self_loops == SelfLoops::Drop {
                    continue;
                }

                let slot = self.slots.find(position);
                if let Some(&kept) = folded.get(&destination) {
                    let combined = self.fold.fold(&self.weights[kept], &self.weights[slot]);
                    self.weights[kept] = combined;
                    self.slots.attach(slot, kept);
                } else {
                    let fresh = self.targets.push(destination);
                    let fresh_slot = self.slots.push_root();
                    debug_assert_eq!(fresh, fresh_slot);
                    let weight = self.weights[slot].clone();
                    self.weights.push(weight);
                    self.marked.push(false);
                    self.slots.attach(slot, fresh);
                    folded.insert(destination, fresh);
                }
            }
        }
    }

    /// Collects, in discovery order, the live nodes other than `merged` that
    /// point into either side of the contraction.
    fn third_parties(&self, merged: usize, sides: [usize; 2]) -> Vec<ThirdParty> {
        let mut parties: Vec<ThirdParty> = Vec::new();
        let mut index: HashMap<usize, usize> = HashMap::new();
        for (side, &row) in sides.iter().enumerate() {
            let bit = 1_u8 << side;
            for position in self.sources.row(row) {
                let node = self.nodes.find(self.sources.item(position));
                if node == merged {
                    continue;
                }
                let slot = *index.entry(node).or_insert_with(|| {
                    parties.push(ThirdParty { node, sides: 0 });
                    parties.len() - 1
                });
                parties[slot].sides |= bit;
            }
        }
        parties
    }
}
