use carpool_core::test_helpers::{grid_graph, grid_route};
use carpool_core::{Graph, GridNode, Group, Route};

/// Routes four rows apart on a tall grid: more than 200 m between any two
/// nodes of different routes and no shared segment.
pub fn separated_routes(count: u32) -> (Graph<GridNode>, Vec<Route<GridNode>>) {
    let graph = grid_graph(4 * count);
    let routes = (0..count)
        .map(|i| grid_route(&[(4 * i, 0), (4 * i, 1), (4 * i, 2)]))
        .collect();
    (graph, routes)
}

/// Every input route appears in exactly one group, with multiplicity.
pub fn assert_partition(routes: &[Route<GridNode>], groups: &[Group<GridNode>]) {
    let mut expected: Vec<Vec<GridNode>> = routes.iter().map(|r| r.nodes().to_vec()).collect();
    let mut actual: Vec<Vec<GridNode>> = groups
        .iter()
        .flat_map(|group| group.routes())
        .map(|r| r.nodes().to_vec())
        .collect();
    expected.sort();
    actual.sort();

    assert_eq!(expected, actual);
    assert!(groups.iter().all(|group| !group.is_empty()));
}
