//! Post-hoc quality metrics over a partition of routes.
//!
//! Route length is measured in distinct segments, the same unit the overlap
//! score uses.

use std::collections::HashSet;

use carpool_core::{Group, NodeKey, Route};
use serde::Serialize;

/// Share of solo driving saved by letting each group drive its union of
/// segments once: `(D_solo - D_shared) / D_solo`.
///
/// Returns 0.0 when the routes have no segments at all.
pub fn travel_gain<N: NodeKey>(groups: &[Group<N>], all_routes: &[Route<N>]) -> f64 {
    let d_solo: usize = all_routes.iter().map(Route::segment_count).sum();
    if d_solo == 0 {
        return 0.0;
    }

    let d_shared: usize = groups
        .iter()
        .map(|group| {
            group
                .routes()
                .iter()
                .flat_map(Route::segments)
                .collect::<HashSet<_>>()
                .len()
        })
        .sum();

    (d_solo as f64 - d_shared as f64) / d_solo as f64
}

/// Fairness as the maximum relative detour over all travelers in shared
/// groups.
///
/// The shared trip of a group is approximated by its longest member, so a
/// traveler's detour is `(longest - own) / own`. Singleton groups and
/// zero-length routes are skipped; 0.0 when nothing qualifies.
pub fn max_relative_detour<N: NodeKey>(groups: &[Group<N>]) -> f64 {
    let mut max_detour = 0.0_f64;

    for group in groups.iter().filter(|group| group.len() >= 2) {
        let lengths: Vec<usize> = group.routes().iter().map(Route::segment_count).collect();
        let shared = lengths.iter().copied().max().unwrap_or(0);

        for &solo in lengths.iter().filter(|&&solo| solo > 0) {
            let detour = (shared as f64 - solo as f64) / solo as f64;
            max_detour = max_detour.max(detour);
        }
    }

    max_detour
}

pub fn average_group_size<N: NodeKey>(groups: &[Group<N>]) -> f64 {
    if groups.is_empty() {
        return 0.0;
    }
    let total: usize = groups.iter().map(Group::len).sum();
    total as f64 / groups.len() as f64
}

/// Summary of one grouping run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupingMetrics {
    pub total_routes: usize,
    pub num_groups: usize,
    pub avg_group_size: f64,
    /// Fraction of solo segments saved by sharing.
    pub travel_gain: f64,
    /// Maximum relative detour (fairness).
    pub max_relative_detour: f64,
}

impl GroupingMetrics {
    pub fn from_groups<N: NodeKey>(groups: &[Group<N>], all_routes: &[Route<N>]) -> Self {
        Self {
            total_routes: all_routes.len(),
            num_groups: groups.len(),
            avg_group_size: average_group_size(groups),
            travel_gain: travel_gain(groups, all_routes),
            max_relative_detour: max_relative_detour(groups),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carpool_core::test_helpers::grid_route;

    #[test]
    fn identical_routes_in_one_group_save_everything_but_one_trip() {
        let route = grid_route(&[(0, 0), (0, 1), (0, 2)]);
        let routes = vec![route.clone(); 4];
        let groups = vec![Group::from(routes.clone())];

        assert!((travel_gain(&groups, &routes) - 0.75).abs() < 1e-12);
        assert_eq!(max_relative_detour(&groups), 0.0);
        assert_eq!(average_group_size(&groups), 4.0);
    }

    #[test]
    fn singletons_gain_nothing() {
        let routes = vec![
            grid_route(&[(0, 0), (0, 1)]),
            grid_route(&[(2, 0), (2, 1), (2, 2)]),
        ];
        let groups: Vec<_> = routes.iter().cloned().map(Group::singleton).collect();

        assert_eq!(travel_gain(&groups, &routes), 0.0);
        assert_eq!(max_relative_detour(&groups), 0.0);
        assert_eq!(average_group_size(&groups), 1.0);
    }

    #[test]
    fn detour_uses_longest_member_as_shared_trip() {
        let short = grid_route(&[(0, 0), (0, 1)]);
        let long = grid_route(&[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let groups = vec![Group::from(vec![short, long])];

        // Short route: 1 segment, shared trip: 3 segments.
        assert_eq!(max_relative_detour(&groups), 2.0);
    }

    #[test]
    fn zero_length_routes_are_skipped() {
        let point = grid_route(&[(0, 0)]);
        let groups = vec![Group::from(vec![point.clone(), point.clone()])];
        let routes = vec![point.clone(), point];

        assert_eq!(travel_gain(&groups, &routes), 0.0);
        assert_eq!(max_relative_detour(&groups), 0.0);
    }

    #[test]
    fn empty_partition_metrics_are_zero() {
        let metrics = GroupingMetrics::from_groups::<carpool_core::GridNode>(&[], &[]);
        assert_eq!(metrics.num_groups, 0);
        assert_eq!(metrics.avg_group_size, 0.0);
        assert_eq!(metrics.travel_gain, 0.0);
        assert_eq!(metrics.max_relative_detour, 0.0);
    }
}
