use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::MatchingConfig;
use crate::cost::CostModel;
use crate::graph::{Graph, NodeKey};
use crate::route::{Group, Route};

use super::algorithm::GroupingAlgorithm;
use super::types::JoinCandidate;

/// Online, one-pass grouping.
///
/// Routes arrive one at a time. Each route joins the existing group with the
/// smallest marginal cost if that cost is below the threshold, otherwise it
/// opens a new group. Groups are never merged with each other afterwards, so
/// the result depends on arrival order.
///
/// [`GroupingAlgorithm::group`] shuffles the input with a fresh
/// `StdRng::seed_from_u64(seed)` on every call; use
/// [`GreedyMatching::group_with_rng`] to supply the randomness source or
/// [`GreedyMatching::assign_in_order`] to keep the given order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyMatching {
    pub config: MatchingConfig,
    /// Seed of the arrival-order shuffle.
    pub seed: u64,
}

impl GreedyMatching {
    pub fn new(config: MatchingConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Existing group with the strictly smallest delta cost for `route`.
    /// On ties the earlier group is kept.
    pub fn best_group<N: NodeKey>(
        &self,
        groups: &[Group<N>],
        route: &Route<N>,
        graph: &Graph<N>,
    ) -> Option<JoinCandidate> {
        let model = CostModel::new(self.config.similarity);
        let mut best: Option<JoinCandidate> = None;
        let mut min_delta_cost = f64::INFINITY;

        for (group_index, group) in groups.iter().enumerate() {
            let delta_cost = model.delta_cost(group, route, graph);
            if delta_cost < min_delta_cost {
                min_delta_cost = delta_cost;
                best = Some(JoinCandidate {
                    group_index,
                    delta_cost,
                });
            }
        }

        best
    }

    /// Process `routes` as a stream in the given order.
    pub fn assign_in_order<N, I>(&self, routes: I, graph: &Graph<N>) -> Vec<Group<N>>
    where
        N: NodeKey,
        I: IntoIterator<Item = Route<N>>,
    {
        let mut groups: Vec<Group<N>> = Vec::new();

        for route in routes {
            match self.best_group(&groups, &route, graph) {
                Some(candidate) if self.config.accepts(candidate.delta_cost) => {
                    debug!(
                        "greedy: route joins group {} (delta cost {:.4})",
                        candidate.group_index, candidate.delta_cost
                    );
                    groups[candidate.group_index].push(route);
                }
                _ => {
                    debug!("greedy: route opens group {}", groups.len());
                    groups.push(Group::singleton(route));
                }
            }
        }

        groups
    }

    /// Shuffle `routes` with `rng`, then assign them in that order.
    pub fn group_with_rng<N, R>(&self, routes: &[Route<N>], graph: &Graph<N>, rng: &mut R) -> Vec<Group<N>>
    where
        N: NodeKey,
        R: Rng,
    {
        let mut requests = routes.to_vec();
        requests.shuffle(rng);
        let groups = self.assign_in_order(requests, graph);
        debug!("greedy: {} routes -> {} groups", routes.len(), groups.len());
        groups
    }
}

impl<N: NodeKey> GroupingAlgorithm<N> for GreedyMatching {
    fn group(&self, routes: &[Route<N>], graph: &Graph<N>) -> Vec<Group<N>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.group_with_rng(routes, graph, &mut rng)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{grid_graph, grid_route};

    #[test]
    fn first_route_opens_a_group() {
        let graph = grid_graph(5);
        let route = grid_route(&[(0, 0), (0, 1)]);
        let matcher = GreedyMatching::default();
        assert_eq!(matcher.best_group(&[], &route, &graph), None);
        assert_eq!(
            matcher.assign_in_order(vec![route.clone()], &graph),
            vec![Group::singleton(route)]
        );
    }

    #[test]
    fn ties_keep_the_earlier_group() {
        let graph = grid_graph(5);
        let route = grid_route(&[(1, 1), (1, 2), (1, 3)]);
        let groups = vec![Group::singleton(route.clone()), Group::singleton(route.clone())];

        let best = GreedyMatching::default()
            .best_group(&groups, &route, &graph)
            .expect("candidate");
        assert_eq!(best.group_index, 0);
        assert_eq!(best.delta_cost, 0.0);
    }

    #[test]
    fn delta_cost_ignores_pairs_inside_the_group() {
        let graph = grid_graph(5);
        let near = grid_route(&[(0, 0), (0, 1), (0, 2)]);
        let far = grid_route(&[(4, 3), (4, 4)]);
        // A mixed group has a large internal cost, but only the new pairs count.
        let groups = vec![Group::from(vec![near.clone(), far])];

        let best = GreedyMatching::default()
            .best_group(&groups, &near, &graph)
            .expect("candidate");
        assert!((best.delta_cost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn arrival_order_changes_the_result() {
        let graph = grid_graph(5);
        let base = grid_route(&[(2, 0), (2, 1), (2, 2)]);
        // Shifted one column: close enough to join a lone `base` route, but
        // not a group already holding two of them.
        let shifted = grid_route(&[(2, 1), (2, 2), (2, 3)]);
        let matcher = GreedyMatching::default();

        let shifted_first = matcher.assign_in_order(
            vec![shifted.clone(), base.clone(), base.clone()],
            &graph,
        );
        let shifted_last = matcher.assign_in_order(vec![base.clone(), base, shifted], &graph);

        assert_eq!(shifted_first.len(), 1);
        assert_eq!(shifted_last.len(), 2);
    }

    #[test]
    fn same_seed_same_groups() {
        let graph = grid_graph(5);
        let routes: Vec<_> = (0..5)
            .map(|row| grid_route(&[(row, 0), (row, 1), (row, 2)]))
            .collect();
        let matcher = GreedyMatching::new(MatchingConfig::default(), 9);
        assert_eq!(matcher.group(&routes, &graph), matcher.group(&routes, &graph));

        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(
            matcher.group_with_rng(&routes, &graph, &mut rng),
            matcher.group(&routes, &graph)
        );
    }
}
