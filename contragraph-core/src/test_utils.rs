//! Shared test utilities for `contragraph-core`.

use contragraph_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use test_strategy::Arbitrary;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `CONTRAGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Expands undirected edges into both arcs.
pub(crate) fn undirected(edges: &[(usize, usize, i64)]) -> Vec<(usize, usize, i64)> {
    edges
        .iter()
        .flat_map(|&(a, b, weight)| [(a, b, weight), (b, a, weight)])
        .collect()
}

/// Topology of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(crate) enum GraphShape {
    /// Each pair is joined with a fixed probability.
    #[weight(3)]
    Random,
    /// Nearly every pair is joined, which maximises cascade splits.
    #[weight(2)]
    Dense,
    /// Two components with no edge between them.
    #[weight(1)]
    Disconnected,
    /// Random pairs drawn with replacement, so parallel edges and self-loops
    /// appear in the input.
    #[weight(2)]
    Multigraph,
    /// Random ordered pairs drawn with replacement and kept as single arcs,
    /// so rows are asymmetric and may hold self-loops.
    #[weight(2)]
    Directed,
}

/// Graph fixture. `edges` holds the arcs to build from: both arcs of every
/// edge, except for [`GraphShape::Directed`].
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    pub node_count: usize,
    pub edges: Vec<(usize, usize, i64)>,
    pub shape: GraphShape,
}

/// Generates fixtures of every shape with between `min_nodes` and
/// `max_nodes` nodes.
pub(crate) fn graph_fixture_strategy(
    min_nodes: usize,
    max_nodes: usize,
) -> impl Strategy<Value = GraphFixture> {
    fixtures_from(any::<GraphShape>(), min_nodes, max_nodes)
}

/// Like [`graph_fixture_strategy`], restricted to symmetric arc sets.
pub(crate) fn undirected_fixture_strategy(
    min_nodes: usize,
    max_nodes: usize,
) -> impl Strategy<Value = GraphFixture> {
    let shapes = any::<GraphShape>().prop_filter("arcs must be symmetric", |shape| {
        *shape != GraphShape::Directed
    });
    fixtures_from(shapes, min_nodes, max_nodes)
}

fn fixtures_from(
    shapes: impl Strategy<Value = GraphShape>,
    min_nodes: usize,
    max_nodes: usize,
) -> impl Strategy<Value = GraphFixture> {
    (shapes, any::<u64>()).prop_map(move |(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, min_nodes..=max_nodes, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(crate) fn generate_fixture(
    shape: GraphShape,
    nodes: std::ops::RangeInclusive<usize>,
    rng: &mut SmallRng,
) -> GraphFixture {
    let node_count = rng.gen_range(nodes);
    let mut edges = Vec::new();
    match shape {
        GraphShape::Random | GraphShape::Dense => {
            let probability = if shape == GraphShape::Dense { 0.9 } else { 0.4 };
            for a in 0..node_count {
                for b in (a + 1)..node_count {
                    if rng.gen_bool(probability) {
                        edges.push((a, b, rng.gen_range(1..=9)));
                    }
                }
            }
        }
        GraphShape::Disconnected => {
            let split = node_count / 2;
            for a in 0..node_count {
                for b in (a + 1)..node_count {
                    if (a < split) == (b < split) && rng.gen_bool(0.6) {
                        edges.push((a, b, rng.gen_range(1..=9)));
                    }
                }
            }
        }
        GraphShape::Multigraph | GraphShape::Directed => {
            for _ in 0..node_count * 2 {
                let a = rng.gen_range(0..node_count);
                let b = rng.gen_range(0..node_count);
                edges.push((a, b, rng.gen_range(1..=9)));
            }
        }
    }
    if shape != GraphShape::Directed {
        edges = undirected(&edges);
    }
    GraphFixture {
        node_count,
        edges,
        shape,
    }
}
