//! Maximum-adjacency ordering of the live nodes.

use std::collections::{BinaryHeap, HashMap, HashSet};

use num_traits::Zero;

use crate::ContractibleGraph;

/// Orders the live nodes so that each node is the one most tightly connected
/// to the nodes before it.
///
/// The order starts at `graph.node_at(0)`. Ties go to the larger node id.
/// When no unselected node is adjacent to the selected set the graph is
/// disconnected, and the next unselected node in live order is taken with a
/// connection weight of zero.
///
/// The graph is read as undirected: callers are expected to supply both
/// directions of every edge.
///
/// # Examples
/// ```
/// use contragraph_core::{ContractibleGraph, maximum_adjacency_order};
///
/// let graph = ContractibleGraph::from_edges(
///     3,
///     [(0, 1, 1), (1, 0, 1), (0, 2, 5), (2, 0, 5)],
/// )?;
/// assert_eq!(maximum_adjacency_order(&graph), vec![0, 2, 1]);
/// # Ok::<(), contragraph_core::GraphError>(())
/// ```
#[must_use]
pub fn maximum_adjacency_order<W, F>(graph: &ContractibleGraph<W, F>) -> Vec<usize>
where
    W: Copy + Ord + Zero,
{
    let live = graph.node_count();
    let mut order = Vec::with_capacity(live);
    let mut selected: HashSet<usize> = HashSet::with_capacity(live);
    let mut connection: HashMap<usize, W> = HashMap::with_capacity(live);
    let mut queue: BinaryHeap<(W, usize)> = BinaryHeap::new();
    let mut fallback = 0_usize;

    while order.len() < live {
        let node = match pop_tightest(&mut queue, &connection, &selected) {
            Some(node) => node,
            None => {
                while selected.contains(&graph.node_at(fallback)) {
                    fallback += 1;
                }
                graph.node_at(fallback)
            }
        };
        selected.insert(node);
        order.push(node);

        for (neighbor, weight) in graph.edges(node) {
            if selected.contains(&neighbor) {
                continue;
            }
            let total = connection.entry(neighbor).or_insert_with(W::zero);
            *total = *total + *weight;
            queue.push((*total, neighbor));
        }
    }
    order
}

/// Pops entries until one matches the current connection weight of an
/// unselected node. Older entries for the same node are stale.
fn pop_tightest<W>(
    queue: &mut BinaryHeap<(W, usize)>,
    connection: &HashMap<usize, W>,
    selected: &HashSet<usize>,
) -> Option<usize>
where
    W: Copy + Ord,
{
    while let Some((weight, node)) = queue.pop() {
        if !selected.contains(&node) && connection.get(&node) == Some(&weight) {
            return Some(node);
        }
    }
    None
}
