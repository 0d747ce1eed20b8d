//! Property tests checking random contraction sequences against a partition
//! oracle.
//!
//! The oracle only knows which original node belongs to which live node. From
//! that and the input arcs it derives the exact row every live node must
//! expose: one entry per neighbouring group, weighted with the sum of the
//! original arcs crossing between the two groups. Under [`SelfLoops::Keep`]
//! the arcs inside a group fold into one self-loop on its live node.

use std::collections::HashMap;

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use rstest::rstest;

use crate::test_utils::{
    GraphFixture, GraphShape, generate_fixture, graph_fixture_strategy, suite_proptest_config,
};
use crate::{ContractibleGraph, GraphBuilder, SelfLoops};

/// Index pairs into the live-node order; reduced modulo the live count.
type Picks = Vec<(usize, usize)>;

fn expected_rows(
    graph: &ContractibleGraph<i64>,
    fixture: &GraphFixture,
) -> HashMap<usize, HashMap<usize, i64>> {
    let mut rows: HashMap<usize, HashMap<usize, i64>> = graph
        .live_nodes()
        .map(|node| (node, HashMap::new()))
        .collect();
    for &(a, b, weight) in &fixture.edges {
        let (from, to) = (graph.find_node(a), graph.find_node(b));
        if from == to && graph.self_loops() == SelfLoops::Drop {
            continue;
        }
        if let Some(row) = rows.get_mut(&from) {
            *row.entry(to).or_insert(0) += weight;
        }
    }
    rows
}

fn check_against_oracle(graph: &ContractibleGraph<i64>, fixture: &GraphFixture) -> TestCaseResult {
    let expected = expected_rows(graph, fixture);
    for node in graph.live_nodes() {
        let mut actual: HashMap<usize, i64> = HashMap::new();
        for (neighbor, weight) in graph.edges(node) {
            prop_assert!(graph.is_live(neighbor));
            let previous = actual.insert(neighbor, *weight);
            prop_assert!(
                previous.is_none(),
                "node {} lists neighbour {} twice in a {:?} fixture",
                node,
                neighbor,
                fixture.shape
            );
        }
        prop_assert_eq!(
            Some(&actual),
            expected.get(&node),
            "row of node {} in a {:?} fixture",
            node,
            fixture.shape
        );

        let leaves: Vec<usize> = (0..fixture.node_count)
            .filter(|&leaf| graph.find_node(leaf) == node)
            .collect();
        prop_assert_eq!(graph.leaves_of(node), leaves);
    }

    let expansion = graph.expand();
    for leaf in 0..fixture.node_count {
        prop_assert_eq!(expansion.representative(leaf), graph.find_node(leaf));
    }
    Ok(())
}

fn run_contraction_sequence(
    fixture: &GraphFixture,
    picks: &Picks,
    self_loops: SelfLoops,
) -> TestCaseResult {
    let mut graph: ContractibleGraph<i64> = GraphBuilder::new(fixture.node_count)
        .with_self_loops(self_loops)
        .build(fixture.edges.iter().copied())
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    check_against_oracle(&graph, fixture)?;

    for &(first, second) in picks {
        let live = graph.node_count();
        if live < 2 {
            break;
        }
        let a = graph.node_at(first % live);
        let b = graph.node_at((first % live + 1 + second % (live - 1)) % live);
        prop_assert_ne!(a, b);

        let merged = graph.contract(a, b);

        prop_assert_eq!(graph.node_count(), live - 1);
        prop_assert!(graph.is_live(merged));
        prop_assert!(!graph.is_live(a));
        prop_assert!(!graph.is_live(b));
        prop_assert_eq!(graph.find_node(a), merged);
        prop_assert_eq!(graph.find_node(b), merged);
        check_against_oracle(&graph, fixture)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn contractions_match_partition_oracle(
        fixture in graph_fixture_strategy(2, 16),
        picks in prop::collection::vec((any::<usize>(), any::<usize>()), 0..16),
    ) {
        run_contraction_sequence(&fixture, &picks, SelfLoops::Drop)?;
    }

    #[test]
    fn contractions_match_partition_oracle_keeping_self_loops(
        fixture in graph_fixture_strategy(2, 16),
        picks in prop::collection::vec((any::<usize>(), any::<usize>()), 0..16),
    ) {
        run_contraction_sequence(&fixture, &picks, SelfLoops::Keep)?;
    }

    #[test]
    fn resolution_is_pure_between_mutations(
        fixture in graph_fixture_strategy(2, 16),
        picks in prop::collection::vec((any::<usize>(), any::<usize>()), 0..8),
    ) {
        let mut graph = ContractibleGraph::from_edges(fixture.node_count, fixture.edges.clone())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        for &(first, second) in &picks {
            let live = graph.node_count();
            if live < 2 {
                break;
            }
            let a = graph.node_at(first % live);
            let b = graph.node_at((first % live + 1 + second % (live - 1)) % live);
            graph.contract(a, b);
        }
        let first_pass: Vec<usize> = (0..graph.total_nodes()).map(|node| graph.find_node(node)).collect();
        let second_pass: Vec<usize> = (0..graph.total_nodes()).map(|node| graph.find_node(node)).collect();
        prop_assert_eq!(first_pass, second_pass);
    }
}

#[rstest]
#[case::dense_drop(GraphShape::Dense, 11, SelfLoops::Drop)]
#[case::dense_keep(GraphShape::Dense, 11, SelfLoops::Keep)]
#[case::directed_drop(GraphShape::Directed, 5, SelfLoops::Drop)]
#[case::directed_keep(GraphShape::Directed, 5, SelfLoops::Keep)]
#[case::multigraph_keep(GraphShape::Multigraph, 23, SelfLoops::Keep)]
fn full_collapse_matches_oracle(
    #[case] shape: GraphShape,
    #[case] seed: u64,
    #[case] self_loops: SelfLoops,
) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(shape, 12..=12, &mut rng);
    let picks: Picks = (0..fixture.node_count).map(|index| (index, index * 7)).collect();
    run_contraction_sequence(&fixture, &picks, self_loops).expect("oracle must agree");
}

#[test]
fn directed_fixtures_keep_single_arcs() {
    let mut rng = SmallRng::seed_from_u64(3);
    let fixture = generate_fixture(GraphShape::Directed, 6..=6, &mut rng);
    assert_eq!(fixture.shape, GraphShape::Directed);
    assert_eq!(fixture.edges.len(), fixture.node_count * 2);
}

#[test]
fn kept_self_loops_collect_every_arc_inside_a_group() {
    let mut graph: ContractibleGraph<i64> = GraphBuilder::new(3)
        .with_self_loops(SelfLoops::Keep)
        .build([(0, 1, 4), (1, 0, 2), (1, 1, 3), (1, 2, 5)])
        .expect("node ids are in range");
    let merged = graph.contract(0, 1);
    let mut row: Vec<(usize, i64)> = graph
        .edges(merged)
        .map(|(neighbor, weight)| (neighbor, *weight))
        .collect();
    row.sort_unstable();
    assert_eq!(row, vec![(2, 5), (merged, 9)]);
}
