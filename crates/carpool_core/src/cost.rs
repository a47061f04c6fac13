//! Groupwise dissimilarity cost shared by both grouping algorithms.

use crate::config::SimilarityModel;
use crate::graph::{Graph, NodeKey};
use crate::route::{Group, Route};

/// Turns pairwise similarity into group costs.
///
/// Every pair is scored as `similarity(earlier, later)` by position in the
/// group, which fixes the orientation of the directional geographic term.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostModel {
    pub similarity: SimilarityModel,
}

impl CostModel {
    pub fn new(similarity: SimilarityModel) -> Self {
        Self { similarity }
    }

    /// `Σ (1 - similarity(r_i, r_j))` over all pairs `i < j`; 0.0 for fewer
    /// than two routes.
    pub fn pairwise_cost<N: NodeKey>(&self, routes: &[&Route<N>], graph: &Graph<N>) -> f64 {
        if routes.len() < 2 {
            return 0.0;
        }

        let mut cost = 0.0;
        for (i, first) in routes.iter().enumerate() {
            for second in &routes[i + 1..] {
                cost += 1.0 - self.similarity.score(first, second, graph);
            }
        }
        cost
    }

    pub fn group_cost<N: NodeKey>(&self, group: &Group<N>, graph: &Graph<N>) -> f64 {
        let routes: Vec<&Route<N>> = group.routes().iter().collect();
        self.pairwise_cost(&routes, graph)
    }

    /// Marginal cost of appending `route` to `group`: only the new pairs
    /// `(member, route)` are counted.
    pub fn delta_cost<N: NodeKey>(&self, group: &Group<N>, route: &Route<N>, graph: &Graph<N>) -> f64 {
        group
            .routes()
            .iter()
            .map(|member| 1.0 - self.similarity.score(member, route, graph))
            .sum()
    }

    /// `cost(first ++ second) - (cost(first) + cost(second))`.
    pub fn cost_increase<N: NodeKey>(&self, first: &Group<N>, second: &Group<N>, graph: &Graph<N>) -> f64 {
        let merged: Vec<&Route<N>> = first.routes().iter().chain(second.routes()).collect();
        let cost_after = self.pairwise_cost(&merged, graph);
        let cost_before = self.group_cost(first, graph) + self.group_cost(second, graph);
        cost_after - cost_before
    }
}

/// Group cost with caller-supplied weights and the default tolerance.
pub fn group_cost<N: NodeKey>(group: &Group<N>, graph: &Graph<N>, alpha: f64, beta: f64) -> f64 {
    CostModel::new(SimilarityModel::new(alpha, beta)).group_cost(group, graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{grid_graph, grid_route};

    #[test]
    fn small_groups_cost_nothing() {
        let graph = grid_graph(5);
        let empty: Group<_> = Group::from(Vec::new());
        let single = Group::singleton(grid_route(&[(0, 0), (0, 1)]));
        assert_eq!(group_cost(&empty, &graph, 0.5, 0.5), 0.0);
        assert_eq!(group_cost(&single, &graph, 0.5, 0.5), 0.0);
    }

    #[test]
    fn identical_routes_cost_nothing() {
        let graph = grid_graph(5);
        let route = grid_route(&[(1, 0), (1, 1), (1, 2)]);
        let group = Group::from(vec![route.clone(), route.clone(), route]);
        assert_eq!(group_cost(&group, &graph, 0.5, 0.5), 0.0);
    }

    #[test]
    fn disjoint_far_routes_cost_one_per_pair() {
        let graph = grid_graph(5);
        let group = Group::from(vec![
            grid_route(&[(0, 0), (0, 1)]),
            grid_route(&[(4, 3), (4, 4)]),
        ]);
        assert_eq!(group_cost(&group, &graph, 0.5, 0.5), 1.0);
    }

    #[test]
    fn cost_grows_as_routes_are_added() {
        let graph = grid_graph(5);
        let model = CostModel::default();
        let mut group = Group::singleton(grid_route(&[(0, 0), (0, 1), (0, 2)]));
        let mut previous = model.group_cost(&group, &graph);

        for route in [
            grid_route(&[(0, 1), (0, 2), (1, 2)]),
            grid_route(&[(2, 2), (3, 2)]),
            grid_route(&[(4, 4)]),
        ] {
            let delta = model.delta_cost(&group, &route, &graph);
            group.push(route);
            let current = model.group_cost(&group, &graph);
            assert!(current >= previous);
            assert!((current - previous - delta).abs() < 1e-9);
            previous = current;
        }
    }

    #[test]
    fn cost_increase_counts_only_cross_pairs() {
        let graph = grid_graph(5);
        let model = CostModel::default();
        let a = Group::from(vec![
            grid_route(&[(0, 0), (0, 1)]),
            grid_route(&[(0, 1), (0, 2)]),
        ]);
        let b = Group::singleton(grid_route(&[(4, 3), (4, 4)]));

        // Both members of `a` are far from `b` and share nothing with it.
        assert!((model.cost_increase(&a, &b, &graph) - 2.0).abs() < 1e-9);
    }
}
