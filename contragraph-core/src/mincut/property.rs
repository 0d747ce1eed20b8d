//! Property tests comparing the Stoer–Wagner driver against an exhaustive
//! oracle on small graphs.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::minimum_cut;
use crate::ContractibleGraph;
use crate::test_utils::{
    GraphFixture, GraphShape, generate_fixture, suite_proptest_config, undirected_fixture_strategy,
};

const MAX_NODES: usize = 8;

/// Enumerates every bipartition and returns the lightest crossing weight.
///
/// `edges` holds both arcs of every undirected edge, so only arcs leaving the
/// candidate side are counted.
fn brute_force_min_cut(node_count: usize, edges: &[(usize, usize, i64)]) -> i64 {
    let mut best = i64::MAX;
    // Node 0 always stays outside, which skips complements.
    for mask in 1_u32..(1 << (node_count - 1)) {
        let inside = |node: usize| node > 0 && mask & (1 << (node - 1)) != 0;
        let weight = edges
            .iter()
            .filter(|&&(a, b, _)| inside(a) && !inside(b))
            .map(|&(_, _, weight)| weight)
            .sum();
        best = best.min(weight);
    }
    best
}

fn run_oracle_equivalence(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = ContractibleGraph::from_edges(fixture.node_count, fixture.edges.clone())
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let cut = minimum_cut(&mut graph).map_err(|err| TestCaseError::fail(err.to_string()))?;

    let expected = brute_force_min_cut(fixture.node_count, &fixture.edges);
    prop_assert_eq!(*cut.weight(), expected);
    prop_assert_eq!(cut.phases(), fixture.node_count - 1);
    prop_assert_eq!(graph.node_count(), 1);

    let inside: HashSet<usize> = cut.partition().iter().copied().collect();
    prop_assert!(!inside.is_empty() && inside.len() < fixture.node_count);
    let crossing: i64 = fixture
        .edges
        .iter()
        .filter(|&&(a, b, _)| a != b && inside.contains(&a) && !inside.contains(&b))
        .map(|&(_, _, weight)| weight)
        .sum();
    prop_assert_eq!(crossing, expected);

    let reported: i64 = cut.cut_edges().iter().map(|edge| *edge.weight()).sum();
    prop_assert_eq!(reported, expected);
    for edge in cut.cut_edges() {
        prop_assert!(inside.contains(&edge.source()));
        prop_assert!(!inside.contains(&edge.destination()));
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn mincut_matches_exhaustive_oracle(fixture in undirected_fixture_strategy(2, MAX_NODES)) {
        run_oracle_equivalence(&fixture)?;
    }
}

#[rstest::rstest]
#[case::random_7(GraphShape::Random, 7)]
#[case::random_2024(GraphShape::Random, 2024)]
#[case::dense_7(GraphShape::Dense, 7)]
#[case::dense_31(GraphShape::Dense, 31)]
#[case::disconnected_7(GraphShape::Disconnected, 7)]
#[case::multigraph_7(GraphShape::Multigraph, 7)]
#[case::multigraph_99(GraphShape::Multigraph, 99)]
fn mincut_matches_oracle_for_seeded_shapes(#[case] shape: GraphShape, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(shape, 2..=MAX_NODES, &mut rng);
    run_oracle_equivalence(&fixture).expect("driver must agree with the oracle");
}

#[test]
fn oracle_handles_triangle() {
    let edges = crate::test_utils::undirected(&[(0, 1, 3), (0, 2, 5), (1, 2, 7)]);
    assert_eq!(brute_force_min_cut(3, &edges), 8);
}
