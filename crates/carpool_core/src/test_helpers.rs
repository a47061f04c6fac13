//! Grid and route fixtures.
//!
//! Routes are written as `(row, col)` pairs over a square grid anchored at
//! the default origin, or drawn from a seeded scenario.

use crate::graph::{Graph, GridNode};
use crate::route::Route;
use crate::scenario::{build_grid_graph, build_scenario, GridParams, RouteScenario, ScenarioParams};

/// A square grid with the default origin and 0.0005° spacing.
pub fn grid_graph(size: u32) -> Graph<GridNode> {
    build_grid_graph(&GridParams {
        size,
        ..GridParams::default()
    })
}

/// Route through the given `(row, col)` nodes.
pub fn grid_route(nodes: &[(u32, u32)]) -> Route<GridNode> {
    Route::new(
        nodes
            .iter()
            .map(|&(row, col)| GridNode::new(row, col))
            .collect(),
    )
}

/// Seeded routes of one scenario on the default 5×5 grid.
pub fn scenario_fixture(
    scenario: RouteScenario,
    num_routes: usize,
    seed: u64,
) -> (Graph<GridNode>, Vec<Route<GridNode>>) {
    let params = ScenarioParams::default()
        .with_scenario(scenario)
        .with_num_routes(num_routes)
        .with_seed(seed);
    build_scenario(&params)
}
