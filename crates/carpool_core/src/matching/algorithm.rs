use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::MatchingConfig;
use crate::error::ConfigError;
use crate::graph::{Graph, NodeKey};
use crate::route::{Group, Route};

use super::{GreedyMatching, StaticMatching};

/// Trait for algorithms that partition routes into carpool groups.
///
/// Every input route ends up in exactly one output group. Implementations
/// own their working set for the duration of a call, so one instance can be
/// shared across threads and invoked repeatedly.
///
/// # Examples
///
/// ```rust
/// use carpool_core::matching::{GroupingAlgorithm, GreedyMatching};
/// use carpool_core::test_helpers::{grid_graph, grid_route};
/// use carpool_core::MatchingConfig;
///
/// let graph = grid_graph(5);
/// let routes = vec![
///     grid_route(&[(0, 0), (0, 1), (0, 2)]),
///     grid_route(&[(0, 0), (0, 1), (0, 2)]),
/// ];
/// let groups = GreedyMatching::new(MatchingConfig::default(), 42).group(&routes, &graph);
/// assert_eq!(groups.len(), 1);
/// ```
pub trait GroupingAlgorithm<N: NodeKey>: Send + Sync {
    /// Partition `routes` into groups. An empty input yields no groups.
    fn group(&self, routes: &[Route<N>], graph: &Graph<N>) -> Vec<Group<N>>;

    /// Short, stable identifier used in logs and exports.
    fn name(&self) -> &'static str;
}

/// Selects one of the available grouping strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Batch agglomerative merging.
    Static,
    /// Online assignment in shuffled arrival order.
    Greedy,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 2] = [AlgorithmKind::Static, AlgorithmKind::Greedy];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Static => "static",
            AlgorithmKind::Greedy => "greedy",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(AlgorithmKind::Static),
            "greedy" => Ok(AlgorithmKind::Greedy),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Build a boxed algorithm. `seed` only affects greedy matching.
pub fn build_algorithm<N: NodeKey + Send + Sync + 'static>(
    kind: AlgorithmKind,
    config: MatchingConfig,
    seed: u64,
) -> Box<dyn GroupingAlgorithm<N>> {
    match kind {
        AlgorithmKind::Static => Box::new(StaticMatching::new(config)),
        AlgorithmKind::Greedy => Box::new(GreedyMatching::new(config, seed)),
    }
}
