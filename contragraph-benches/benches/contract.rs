//! Contraction benchmarks.
//!
//! Measures collapsing a random graph down to a single node and contracting
//! the spine of a book graph, which forces every page to be rebuilt under a
//! fresh id.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use contragraph_benches::{
    error::BenchSetupError,
    params::{BookBenchParams, GraphBenchParams},
    source::{SyntheticConfig, SyntheticGraph},
};

/// Seed used for all synthetic graph generation in this benchmark.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const NODE_COUNTS: &[usize] = &[100, 500, 1_000];

/// Edge density for the random graphs.
const DENSITY_PERCENT: u8 = 5;

/// Book sizes to benchmark.
const PAGE_COUNTS: &[usize] = &[100, 1_000, 10_000];

fn contract_collapse_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("contract_collapse");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let source = SyntheticGraph::random(&SyntheticConfig {
            node_count,
            density_percent: DENSITY_PERCENT,
            max_weight: 100,
            seed: SEED,
        })?;
        // Fail setup early rather than inside the timed loop.
        source.build()?;

        let params = GraphBenchParams {
            node_count,
            density_percent: DENSITY_PERCENT,
        };
        group.bench_with_input(BenchmarkId::from_parameter(&params), &source, |b, source| {
            b.iter_batched(
                || source.build().ok(),
                |graph| {
                    let Some(mut graph) = graph else {
                        return;
                    };
                    while graph.node_count() > 1 {
                        let (a, b) = (graph.node_at(0), graph.node_at(1));
                        graph.contract(a, b);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
    Ok(())
}

fn contract_book_spine_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("contract_book_spine");

    for &pages in PAGE_COUNTS {
        let source = SyntheticGraph::book(pages)?;
        source.build()?;

        group.bench_with_input(
            BenchmarkId::from_parameter(BookBenchParams { pages }),
            &source,
            |b, source| {
                b.iter_batched(
                    || source.build().ok(),
                    |graph| graph.map(|mut graph| graph.contract(0, 1)),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
    Ok(())
}

fn contract_collapse(c: &mut Criterion) {
    if let Err(err) = contract_collapse_impl(c) {
        panic!("contract_collapse benchmark setup failed: {err}");
    }
}

fn contract_book_spine(c: &mut Criterion) {
    if let Err(err) = contract_book_spine_impl(c) {
        panic!("contract_book_spine benchmark setup failed: {err}");
    }
}

criterion_group!(benches, contract_collapse, contract_book_spine);
criterion_main!(benches);
