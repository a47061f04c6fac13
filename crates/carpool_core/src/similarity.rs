//! Pairwise route similarity: geographic proximity plus path overlap.
//!
//! `S_geo` is directional. For every resolvable node of the first route it
//! takes the distance to the nearest node of the second route, so
//! `S_geo(a, b)` and `S_geo(b, a)` differ whenever one route strays further
//! from the other than the other does from it. Callers that need a stable
//! orientation must pass routes in a consistent order.

use crate::config::SimilarityModel;
use crate::graph::{haversine_m, Graph, NodeKey};
use crate::route::Route;

impl SimilarityModel {
    /// Directional geographic similarity `S_geo(first → second)` in `[0, 1]`.
    ///
    /// Returns 0.0 when either route has no coordinate in `graph`.
    pub fn geographic<N: NodeKey>(&self, first: &Route<N>, second: &Route<N>, graph: &Graph<N>) -> f64 {
        let from = first.coordinates(graph);
        let to = second.coordinates(graph);
        if from.is_empty() || to.is_empty() {
            return 0.0;
        }

        let total_min_dist: f64 = from
            .iter()
            .map(|&p| {
                to.iter()
                    .map(|&q| haversine_m(p, q))
                    .fold(f64::INFINITY, f64::min)
            })
            .sum();
        let avg_min_dist = total_min_dist / from.len() as f64;

        (1.0 - avg_min_dist / self.tolerance_m).clamp(0.0, 1.0)
    }

    /// Shared-segment ratio relative to the larger segment set. Symmetric.
    pub fn overlap<N: NodeKey>(&self, first: &Route<N>, second: &Route<N>) -> f64 {
        segment_overlap(first, second)
    }

    /// `alpha * S_geo(first → second) + beta * S_overlap`.
    pub fn score<N: NodeKey>(&self, first: &Route<N>, second: &Route<N>, graph: &Graph<N>) -> f64 {
        self.alpha * self.geographic(first, second, graph) + self.beta * self.overlap(first, second)
    }
}

/// `S_geo` with the default 100 m tolerance.
pub fn geographic_similarity<N: NodeKey>(first: &Route<N>, second: &Route<N>, graph: &Graph<N>) -> f64 {
    SimilarityModel::default().geographic(first, second, graph)
}

/// `|segments(a) ∩ segments(b)| / max(|segments(a)|, |segments(b)|)`, or 0.0
/// when either route has no segment.
pub fn segment_overlap<N: NodeKey>(first: &Route<N>, second: &Route<N>) -> f64 {
    let a = first.segments();
    let b = second.segments();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let shared = a.intersection(&b).count();
    shared as f64 / a.len().max(b.len()) as f64
}

/// Final similarity with caller-supplied weights and the default tolerance.
pub fn final_similarity<N: NodeKey>(
    first: &Route<N>,
    second: &Route<N>,
    graph: &Graph<N>,
    alpha: f64,
    beta: f64,
) -> f64 {
    SimilarityModel::new(alpha, beta).score(first, second, graph)
}
