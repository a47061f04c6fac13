use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::{Coordinate, Graph, GridNode};
use crate::route::Route;
use crate::scenario::params::{GridParams, RouteScenario, ScenarioParams};

/// Length range of standalone random routes (nodes, inclusive).
const RANDOM_ROUTE_MIN_LEN: usize = 3;
const RANDOM_ROUTE_MAX_LEN: usize = 5;

/// Length of the main route in the partial scenario.
const PARTIAL_MAIN_LEN: usize = 5;

/// Length of the random prefix and suffix around the shared stretch.
const PARTIAL_END_LEN: usize = 2;

pub fn build_grid_graph(grid: &GridParams) -> Graph<GridNode> {
    (0..grid.size)
        .flat_map(|row| (0..grid.size).map(move |col| GridNode::new(row, col)))
        .map(|node| {
            let coordinate = Coordinate::new(
                grid.base_lat + f64::from(node.row) * grid.step_lat,
                grid.base_lng + f64::from(node.col) * grid.step_lng,
            );
            (node, coordinate)
        })
        .collect()
}

/// 4-neighbors of `node` present in `graph`, in a fixed order.
fn neighbors(node: GridNode, graph: &Graph<GridNode>) -> Vec<GridNode> {
    [
        node.row.checked_add(1).map(|row| GridNode::new(row, node.col)),
        node.row.checked_sub(1).map(|row| GridNode::new(row, node.col)),
        node.col.checked_add(1).map(|col| GridNode::new(node.row, col)),
        node.col.checked_sub(1).map(|col| GridNode::new(node.row, col)),
    ]
    .into_iter()
    .flatten()
    .filter(|candidate| graph.contains(candidate))
    .collect()
}

/// Random walk of `min_len..=max_len` nodes from a uniformly chosen start.
///
/// The walk does not step straight back to the node it came from unless that
/// is the only move. It ends early when a node has no neighbor at all.
pub fn random_walk<R: Rng>(
    graph: &Graph<GridNode>,
    min_len: usize,
    max_len: usize,
    rng: &mut R,
) -> Route<GridNode> {
    let nodes: Vec<GridNode> = graph.nodes().copied().collect();
    let Some(&start) = nodes.choose(rng) else {
        return Route::new(Vec::new());
    };

    let target_len = rng.gen_range(min_len.min(max_len)..=max_len);
    let mut walk = vec![start];
    let mut current = start;

    for _ in 1..target_len {
        let mut moves = neighbors(current, graph);
        if walk.len() > 1 && moves.len() > 1 {
            let previous = walk[walk.len() - 2];
            moves.retain(|candidate| *candidate != previous);
        }

        let Some(&next) = moves.choose(rng) else {
            break;
        };
        walk.push(next);
        current = next;
    }

    Route::new(walk)
}

/// Generate `params.num_routes` routes of the requested family.
pub fn generate_routes<R: Rng>(
    graph: &Graph<GridNode>,
    params: &ScenarioParams,
    rng: &mut R,
) -> Vec<Route<GridNode>> {
    let count = params.num_routes;
    let routes = match params.scenario {
        RouteScenario::Identical => {
            let route = random_walk(graph, RANDOM_ROUTE_MIN_LEN, RANDOM_ROUTE_MAX_LEN, rng);
            vec![route; count]
        }
        RouteScenario::Partial => partial_routes(graph, count, rng),
        RouteScenario::Different => (0..count)
            .map(|_| random_walk(graph, RANDOM_ROUTE_MIN_LEN, RANDOM_ROUTE_MAX_LEN, rng))
            .collect(),
    };

    info!(
        "generator: created {} routes for '{}' scenario",
        routes.len(),
        params.scenario
    );
    routes
}

/// A main route plus `count - 1` routes built as
/// `prefix ++ main[mid-1..mid+2] ++ suffix`.
fn partial_routes<R: Rng>(
    graph: &Graph<GridNode>,
    count: usize,
    rng: &mut R,
) -> Vec<Route<GridNode>> {
    if count == 0 {
        return Vec::new();
    }

    let main = random_walk(graph, PARTIAL_MAIN_LEN, PARTIAL_MAIN_LEN, rng);
    let mid = main.len() / 2;
    let shared_end = (mid + 2).min(main.len());
    let shared = main.nodes()[mid.saturating_sub(1)..shared_end].to_vec();

    let mut routes = Vec::with_capacity(count);
    routes.push(main);
    for _ in 1..count {
        let prefix = random_walk(graph, PARTIAL_END_LEN, PARTIAL_END_LEN, rng);
        let suffix = random_walk(graph, PARTIAL_END_LEN, PARTIAL_END_LEN, rng);

        let mut nodes = prefix.nodes().to_vec();
        nodes.extend_from_slice(&shared);
        nodes.extend_from_slice(suffix.nodes());
        routes.push(Route::new(nodes));
    }
    routes
}

/// Build the grid and the routes described by `params`.
pub fn build_scenario(params: &ScenarioParams) -> (Graph<GridNode>, Vec<Route<GridNode>>) {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let graph = build_grid_graph(&params.grid);
    let routes = generate_routes(&graph, params, &mut rng);
    (graph, routes)
}
