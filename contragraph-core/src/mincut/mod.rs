//! Stoer–Wagner global minimum cut over a [`ContractibleGraph`].
//!
//! Each phase orders the live nodes by maximum adjacency, takes the cut that
//! separates the last node from the rest, and contracts the last two nodes.
//! The smallest phase cut is the global minimum. The best cut is tracked with
//! edge marks so the crossing arcs can be recovered through
//! [`ContractibleGraph::expand`] once the graph has collapsed.

mod order;

use std::fmt;

use num_traits::Zero;
use tracing::{debug, info, instrument};

use crate::{
    ContractibleGraph, LeafEdge,
    error::{MinCutError, ObserverError},
    fold::Fold,
};

pub use self::order::maximum_adjacency_order;

/// Outcome of a minimum-cut run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinCut<W> {
    weight: W,
    partition: Vec<usize>,
    cut_edges: Vec<LeafEdge<W>>,
    phases: usize,
}

impl<W> MinCut<W> {
    /// Returns the total weight of the arcs crossing the cut in one direction.
    #[must_use]
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Returns the original nodes on one side of the cut, in ascending order.
    #[must_use]
    pub fn partition(&self) -> &[usize] {
        &self.partition
    }

    /// Returns the original arcs leaving [`MinCut::partition`].
    #[must_use]
    pub fn cut_edges(&self) -> &[LeafEdge<W>] {
        &self.cut_edges
    }

    /// Returns how many phases (and therefore contractions) the run took.
    #[must_use]
    pub fn phases(&self) -> usize {
        self.phases
    }
}

/// Computes a global minimum cut, contracting `graph` down to a single node.
///
/// The graph is read as undirected: supply both directions of every edge and
/// build it with the summing fold.
///
/// Adjacency keys and phase cuts are plain sums of arc weights. The sum of
/// the absolute weights of all arcs must fit in `W`; larger inputs overflow.
///
/// # Errors
/// Returns [`MinCutError::TooFewNodes`] when fewer than two nodes are live.
///
/// # Examples
/// ```
/// use contragraph_core::{ContractibleGraph, minimum_cut};
///
/// let mut graph = ContractibleGraph::from_edges(
///     3,
///     [(0, 1, 5), (1, 0, 5), (1, 2, 2), (2, 1, 2)],
/// )?;
/// let cut = minimum_cut(&mut graph)?;
/// assert_eq!(cut.weight(), &2);
/// assert_eq!(cut.partition(), &[2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn minimum_cut<W, F>(graph: &mut ContractibleGraph<W, F>) -> Result<MinCut<W>, MinCutError>
where
    W: Copy + Ord + Zero + fmt::Debug,
    F: Fold<W>,
{
    minimum_cut_observed(graph, |_, _| Ok(()))
}

/// Computes a global minimum cut, handing the graph to `observer` before
/// every phase.
///
/// # Errors
/// Returns [`MinCutError::TooFewNodes`] when fewer than two nodes are live and
/// [`MinCutError::Observer`] when the observer fails. The graph keeps the
/// contractions performed before the failure.
#[instrument(
    name = "core.minimum_cut",
    err,
    skip_all,
    fields(nodes = graph.node_count())
)]
pub fn minimum_cut_observed<W, F, O>(
    graph: &mut ContractibleGraph<W, F>,
    mut observer: O,
) -> Result<MinCut<W>, MinCutError>
where
    W: Copy + Ord + Zero + fmt::Debug,
    F: Fold<W>,
    O: FnMut(usize, &ContractibleGraph<W, F>) -> Result<(), ObserverError>,
{
    let nodes = graph.node_count();
    if nodes < 2 {
        return Err(MinCutError::TooFewNodes { nodes });
    }

    let mut best: Option<W> = None;
    let mut partition = Vec::new();
    let mut phases = 0_usize;
    while graph.node_count() > 1 {
        observer(phases, graph).map_err(|source| MinCutError::Observer {
            phase: phases,
            source,
        })?;

        let order = maximum_adjacency_order(graph);
        let &[.., previous, last] = order.as_slice() else {
            break;
        };
        let cut = phase_cut(graph, last);
        let improved = best.is_none_or(|current| cut < current);
        if improved {
            mark_row(graph, last);
            partition = graph.leaves_of(last);
            best = Some(cut);
        }
        debug!(phase = phases, cut = ?cut, improved, previous, last, "completed phase");

        graph.contract(previous, last);
        phases += 1;
        #[cfg(feature = "metrics")]
        metrics::counter!("contragraph_mincut_phases_total").increment(1);
    }

    let weight = best.ok_or(MinCutError::TooFewNodes { nodes })?;
    let cut_edges: Vec<LeafEdge<W>> = graph.expand().marked_edges().cloned().collect();
    info!(
        weight = ?weight,
        phases,
        partition = partition.len(),
        cut_edges = cut_edges.len(),
        "minimum cut found"
    );
    Ok(MinCut {
        weight,
        partition,
        cut_edges,
        phases,
    })
}

/// Sums the row of `node`, ignoring kept self-loops.
fn phase_cut<W, F>(graph: &ContractibleGraph<W, F>, node: usize) -> W
where
    W: Copy + Zero,
{
    graph
        .edges(node)
        .filter(|&(neighbor, _)| neighbor != node)
        .fold(W::zero(), |total, (_, weight)| total + *weight)
}

/// Replaces every mark with the arcs leaving `node`.
fn mark_row<W, F>(graph: &mut ContractibleGraph<W, F>, node: usize) {
    graph.clear_marks();
    for index in 0..graph.degree(node) {
        if graph.neighbor(node, index) != node {
            graph.mark(node, index);
        }
    }
}


#[cfg(test)]
mod property;
