//! Synthetic scenarios: a coordinate grid plus routes walked on it.
//!
//! Three route families exercise the grouping algorithms at the extremes and
//! in between: identical copies of one route, routes sharing a common middle
//! stretch, and independent random walks.

mod build;
mod params;

pub use build::{build_grid_graph, build_scenario, generate_routes, random_walk};
pub use params::{GridParams, RouteScenario, ScenarioParams};
