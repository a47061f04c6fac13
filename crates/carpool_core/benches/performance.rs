//! Performance benchmarks for carpool_core using Criterion.rs.

use carpool_core::matching::{GreedyMatching, GroupingAlgorithm, StaticMatching};
use carpool_core::scenario::{build_scenario, GridParams, RouteScenario, ScenarioParams};
use carpool_core::test_helpers::grid_route;
use carpool_core::{final_similarity, MatchingConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_similarity(c: &mut Criterion) {
    let (graph, _) = build_scenario(&ScenarioParams::default().with_seed(1));
    let a = grid_route(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]);
    let b = grid_route(&[(0, 1), (1, 1), (1, 2), (1, 3), (2, 3)]);

    c.bench_function("final_similarity_5x5", |bench| {
        bench.iter(|| black_box(final_similarity(&a, &b, &graph, 0.5, 0.5)));
    });
}

fn bench_grouping(c: &mut Criterion) {
    let sizes = vec![("small", 10), ("medium", 40), ("large", 80)];
    let config = MatchingConfig::default();
    let grid = GridParams {
        size: 10,
        ..GridParams::default()
    };

    let mut group = c.benchmark_group("grouping");
    for (name, num_routes) in sizes {
        let params = ScenarioParams::default()
            .with_scenario(RouteScenario::Partial)
            .with_grid(grid)
            .with_num_routes(num_routes)
            .with_seed(42);
        let (graph, routes) = build_scenario(&params);

        group.bench_with_input(BenchmarkId::new("static", name), &routes, |bench, routes| {
            let matcher = StaticMatching::new(config);
            bench.iter(|| black_box(matcher.group(routes, &graph)));
        });
        group.bench_with_input(BenchmarkId::new("greedy", name), &routes, |bench, routes| {
            let matcher = GreedyMatching::new(config, 7);
            bench.iter(|| black_box(matcher.group(routes, &graph)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_similarity, bench_grouping);
criterion_main!(benches);
