mod support;

use carpool_core::matching::{GroupingAlgorithm, StaticMatching};
use carpool_core::scenario::RouteScenario;
use carpool_core::test_helpers::{grid_graph, grid_route, scenario_fixture};
use carpool_core::{Group, MatchingConfig};

use support::{assert_partition, separated_routes};

#[test]
fn identical_routes_collapse_into_one_group() {
    for num_routes in [1, 2, 10, 25] {
        let (graph, routes) = scenario_fixture(RouteScenario::Identical, num_routes, 17);
        let groups = StaticMatching::default().group(&routes, &graph);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), num_routes);
    }
}

#[test]
fn separated_routes_stay_apart() {
    let (graph, routes) = separated_routes(6);
    let groups = StaticMatching::default().group(&routes, &graph);
    assert_eq!(groups.len(), 6);
    assert!(groups.iter().all(|group| group.len() == 1));
}

#[test]
fn output_is_a_partition_of_the_input() {
    for scenario in RouteScenario::ALL {
        for seed in 0..5 {
            let (graph, routes) = scenario_fixture(scenario, 10, seed);
            let groups = StaticMatching::default().group(&routes, &graph);
            assert_partition(&routes, &groups);
        }
    }
}

#[test]
fn result_is_a_fixed_point() {
    let matcher = StaticMatching::default();
    for scenario in RouteScenario::ALL {
        for seed in 0..5 {
            let (graph, routes) = scenario_fixture(scenario, 10, seed);
            let groups = matcher.group(&routes, &graph);

            assert!(matcher.is_converged(&groups, &graph));
            assert_eq!(matcher.merge_groups(groups.clone(), &graph), groups);
        }
    }
}

#[test]
fn merged_groups_keep_absorbing_order() {
    let graph = grid_graph(5);
    let a = grid_route(&[(0, 0), (0, 1), (0, 2)]);
    let b = grid_route(&[(0, 2), (0, 1), (0, 0)]);
    let far = grid_route(&[(4, 3), (4, 4)]);

    let groups = StaticMatching::default().group(&[a.clone(), far.clone(), b.clone()], &graph);
    assert_eq!(groups, vec![Group::from(vec![a, b]), Group::singleton(far)]);
}

#[test]
fn lower_threshold_never_produces_fewer_groups() {
    let strict = StaticMatching::new(MatchingConfig::default().with_threshold(0.1));
    let lenient = StaticMatching::default();

    for seed in 0..5 {
        let (graph, routes) = scenario_fixture(RouteScenario::Partial, 8, seed);
        assert!(strict.group(&routes, &graph).len() >= lenient.group(&routes, &graph).len());
    }
}
