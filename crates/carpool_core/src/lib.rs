//! Route grouping engine for carpool matching experiments.
//!
//! Routes are node sequences over a small coordinate graph. Pairs of routes
//! are scored by geographic proximity and shared segments; the score feeds a
//! groupwise dissimilarity cost that drives two alternative clusterers:
//!
//! - [`matching::StaticMatching`]: batch agglomerative merging
//! - [`matching::GreedyMatching`]: online, order-dependent assignment
//!
//! ```
//! use carpool_core::matching::{GroupingAlgorithm, StaticMatching};
//! use carpool_core::scenario::{build_scenario, RouteScenario, ScenarioParams};
//! use carpool_core::MatchingConfig;
//!
//! let params = ScenarioParams::default()
//!     .with_scenario(RouteScenario::Identical)
//!     .with_seed(7);
//! let (graph, routes) = build_scenario(&params);
//!
//! let groups = StaticMatching::new(MatchingConfig::default()).group(&routes, &graph);
//! assert_eq!(groups.len(), 1);
//! ```

pub mod config;
pub mod cost;
pub mod error;
pub mod graph;
pub mod matching;
pub mod route;
pub mod scenario;
pub mod similarity;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use config::{MatchingConfig, SimilarityModel, DEFAULT_THRESHOLD, DEFAULT_TOLERANCE_M};
pub use cost::{group_cost, CostModel};
pub use error::ConfigError;
pub use graph::{haversine_m, Coordinate, Graph, GridNode, NodeKey};
pub use route::{Group, Route, Segment};
pub use similarity::{final_similarity, geographic_similarity, segment_overlap};
