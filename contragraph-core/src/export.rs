//! Graphviz DOT rendering of the live graph and of leaf expansions.
//!
//! Records follow depth-first discovery order starting from the live nodes in
//! [`ContractibleGraph::node_at`] order. Each row entry is emitted before the
//! traversal descends into its neighbour. The output is meant for
//! visualisation tools and is not parsed back.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::{ContractibleGraph, LeafExpansion};

/// Selects between `digraph`/`->` and `graph`/`--` output.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// One record per directed arc.
    Directed,
    /// One record per unordered endpoint pair; the first arc seen wins.
    Undirected,
}

impl Direction {
    const fn keyword(self) -> &'static str {
        match self {
            Self::Directed => "digraph",
            Self::Undirected => "graph",
        }
    }

    const fn arrow(self) -> &'static str {
        match self {
            Self::Directed => "->",
            Self::Undirected => "--",
        }
    }

    /// Returns the key used to suppress duplicate records.
    fn record_key(self, from: usize, to: usize) -> (usize, usize) {
        match self {
            Self::Directed => (from, to),
            Self::Undirected => (from.min(to), from.max(to)),
        }
    }
}

/// Display adapter rendering a [`ContractibleGraph`] as DOT.
///
/// # Examples
/// ```
/// use contragraph_core::{ContractibleGraph, Direction};
///
/// let graph = ContractibleGraph::from_edges(2, [(0, 1, 4), (1, 0, 4)])?;
/// assert_eq!(graph.dot(Direction::Undirected).to_string(), "graph g { 0 -- 1 [label=4]; }");
/// assert_eq!(
///     graph.dot(Direction::Directed).to_string(),
///     "digraph g { 0 -> 1 [label=4]; 1 -> 0 [label=4]; }",
/// );
/// # Ok::<(), contragraph_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct Dot<'a, W, F> {
    graph: &'a ContractibleGraph<W, F>,
    direction: Direction,
}

impl<W, F> ContractibleGraph<W, F> {
    /// Returns a DOT renderer for the live graph.
    #[must_use]
    pub fn dot(&self, direction: Direction) -> Dot<'_, W, F> {
        Dot {
            graph: self,
            direction,
        }
    }
}

impl<W, F> Dot<'_, W, F> {
    fn records(&self) -> Vec<(usize, usize, &W)> {
        let graph = self.graph;
        let mut visited: HashSet<usize> = HashSet::new();
        let mut emitted: HashSet<(usize, usize)> = HashSet::new();
        let mut records = Vec::new();
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in graph.live_nodes() {
            if !visited.insert(start) {
                continue;
            }
            stack.push((start, 0));
            while let Some(frame) = stack.last_mut() {
                let (node, index) = *frame;
                if index == graph.degree(node) {
                    stack.pop();
                    continue;
                }
                frame.1 += 1;

                let neighbor = graph.neighbor(node, index);
                let (from, to) = self.direction.record_key(node, neighbor);
                if self.direction == Direction::Directed || emitted.insert((from, to)) {
                    records.push((from, to, graph.edge_weight(node, index)));
                }
                if visited.insert(neighbor) {
                    stack.push((neighbor, 0));
                }
            }
        }
        records
    }
}

impl<W, F> fmt::Display for Dot<'_, W, F>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} g {{ ", self.direction.keyword())?;
        for (from, to, weight) in self.records() {
            write!(f, "{from} {} {to} [label={weight}]; ", self.direction.arrow())?;
        }
        f.write_str("}")
    }
}

/// Display adapter rendering a [`LeafExpansion`] as DOT over the original
/// nodes. Marked arcs carry an extra `color=red` attribute.
#[derive(Debug)]
pub struct ExpansionDot<'a, W> {
    expansion: &'a LeafExpansion<W>,
    direction: Direction,
}

impl<W> LeafExpansion<W> {
    /// Returns a DOT renderer for the original graph with cut annotations.
    #[must_use]
    pub fn dot(&self, direction: Direction) -> ExpansionDot<'_, W> {
        ExpansionDot {
            expansion: self,
            direction,
        }
    }
}

impl<W> fmt::Display for ExpansionDot<'_, W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut records: Vec<(usize, usize, &W, bool)> = Vec::new();
        let mut index: HashMap<(usize, usize), usize> = HashMap::new();
        for edge in self.expansion.edges() {
            let key = self.direction.record_key(edge.source(), edge.destination());
            if let Some(&existing) = index.get(&key) {
                records[existing].3 |= edge.is_marked();
                continue;
            }
            index.insert(key, records.len());
            records.push((key.0, key.1, edge.weight(), edge.is_marked()));
        }

        write!(f, "{} g {{ ", self.direction.keyword())?;
        for (from, to, weight, marked) in records {
            let arrow = self.direction.arrow();
            if marked {
                write!(f, "{from} {arrow} {to} [label={weight}, color=red]; ")?;
            } else {
                write!(f, "{from} {arrow} {to} [label={weight}]; ")?;
            }
        }
        f.write_str("}")
    }
}
