use log::debug;

use crate::config::MatchingConfig;
use crate::cost::CostModel;
use crate::graph::{Graph, NodeKey};
use crate::route::{Group, Route};

use super::algorithm::GroupingAlgorithm;
use super::types::MergeCandidate;

/// Batch agglomerative grouping.
///
/// Starts from one singleton group per route and repeatedly merges the pair
/// of groups whose merge raises the total cost the least, for as long as that
/// increase stays strictly below the configured threshold.
///
/// # Algorithm Behavior
///
/// 1. Score every unordered pair `(i, j)`, `i < j`, by
///    `cost(G_i ++ G_j) - cost(G_i) - cost(G_j)`
/// 2. Keep the first pair with the smallest increase (ties go to the pair
///    enumerated first)
/// 3. If the increase is below the threshold, append `G_j` onto `G_i`,
///    remove `G_j` and repeat; otherwise stop
///
/// The group count drops by one per merge, so the loop runs at most
/// `routes.len() - 1` rounds; each round rescans all pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMatching {
    pub config: MatchingConfig,
}

impl StaticMatching {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    fn cost_model(&self) -> CostModel {
        CostModel::new(self.config.similarity)
    }

    /// Cheapest merge among the current groups, if any pair has a finite
    /// cost increase.
    pub fn best_merge<N: NodeKey>(&self, groups: &[Group<N>], graph: &Graph<N>) -> Option<MergeCandidate> {
        let model = self.cost_model();
        let mut best: Option<MergeCandidate> = None;
        let mut min_cost_increase = f64::INFINITY;

        for i in 0..groups.len() {
            for j in (i + 1)..groups.len() {
                let cost_increase = model.cost_increase(&groups[i], &groups[j], graph);
                if cost_increase < min_cost_increase {
                    min_cost_increase = cost_increase;
                    best = Some(MergeCandidate {
                        first: i,
                        second: j,
                        cost_increase,
                    });
                }
            }
        }

        best
    }

    /// Continue merging from an arbitrary starting partition.
    pub fn merge_groups<N: NodeKey>(&self, mut groups: Vec<Group<N>>, graph: &Graph<N>) -> Vec<Group<N>> {
        while groups.len() > 1 {
            let Some(candidate) = self.best_merge(&groups, graph) else {
                break;
            };
            if !self.config.accepts(candidate.cost_increase) {
                debug!(
                    "static: stopping with {} groups, cheapest merge costs {:.4}",
                    groups.len(),
                    candidate.cost_increase
                );
                break;
            }

            debug!(
                "static: merging group {} into {} (cost increase {:.4})",
                candidate.second, candidate.first, candidate.cost_increase
            );
            let absorbed = groups.remove(candidate.second);
            groups[candidate.first].absorb(absorbed);
        }

        groups
    }

    /// True when no pair of `groups` can be merged below the threshold,
    /// i.e. [`StaticMatching::merge_groups`] would return them unchanged.
    pub fn is_converged<N: NodeKey>(&self, groups: &[Group<N>], graph: &Graph<N>) -> bool {
        match self.best_merge(groups, graph) {
            Some(candidate) => !self.config.accepts(candidate.cost_increase),
            None => true,
        }
    }
}

impl<N: NodeKey> GroupingAlgorithm<N> for StaticMatching {
    fn group(&self, routes: &[Route<N>], graph: &Graph<N>) -> Vec<Group<N>> {
        let singletons = routes.iter().cloned().map(Group::singleton).collect();
        let groups = self.merge_groups(singletons, graph);
        debug!("static: {} routes -> {} groups", routes.len(), groups.len());
        groups
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
