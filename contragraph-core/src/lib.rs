//! Contragraph core library.
//!
//! A weighted directed graph that supports repeated node contraction while
//! staying queryable after every step. Parallel arcs created by a contraction
//! are folded with a caller-supplied [`Fold`], and third-party nodes that end
//! up with two arcs into a freshly merged node are rebuilt on the spot so the
//! adjacency seen by queries is always simple.
//!
//! The crate also carries the consumers that ship with the engine: a DOT
//! export of the live graph, the expansion of the contracted structure back
//! onto the original nodes, and a Stoer–Wagner global minimum cut driver.
//!
//! # Examples
//! ```
//! use contragraph_core::ContractibleGraph;
//!
//! let edges = [(0, 1, 3), (1, 0, 3), (0, 2, 5), (2, 0, 5), (1, 2, 7), (2, 1, 7)];
//! let mut graph = ContractibleGraph::from_edges(3, edges).expect("node ids are in range");
//! let merged = graph.contract(0, 1);
//!
//! assert_eq!(graph.node_count(), 2);
//! let other = graph
//!     .live_nodes()
//!     .find(|&node| node != merged)
//!     .expect("two live nodes remain");
//! assert_eq!(graph.edges(other).collect::<Vec<_>>(), vec![(merged, &12)]);
//! assert_eq!(graph.edges(merged).collect::<Vec<_>>(), vec![(other, &12)]);
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the engine emits:
//!
//! - `contragraph_contractions_total` (counter)
//! - `contragraph_cascade_splits_total` (counter)
//! - `contragraph_mincut_phases_total` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod expand;
mod export;
mod fold;
mod graph;
mod mincut;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, MinCutError, MinCutErrorCode, ObserverError},
    expand::{LeafEdge, LeafExpansion},
    export::{Direction, Dot, ExpansionDot},
    fold::{Fold, FoldFn, Max, Min, Sum},
    graph::{ContractibleGraph, GraphBuilder, SelfLoops},
    mincut::{MinCut, maximum_adjacency_order, minimum_cut, minimum_cut_observed},
};
