//! Routes, canonical segments and groups of routes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::graph::{Coordinate, Graph, NodeKey};

/// Unordered pair of adjacent route nodes.
///
/// The smaller endpoint is always stored first, so `A→B` and `B→A` produce
/// the same segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment<N: NodeKey> {
    low: N,
    high: N,
}

impl<N: NodeKey> Segment<N> {
    pub fn new(a: N, b: N) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn endpoints(&self) -> (&N, &N) {
        (&self.low, &self.high)
    }
}

/// One traveler's path as an ordered node sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route<N: NodeKey> {
    nodes: Vec<N>,
}

impl<N: NodeKey> Route<N> {
    pub fn new(nodes: Vec<N>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Canonical segments of consecutive node pairs. Repeated traversals of
    /// the same pair collapse into one entry.
    pub fn segments(&self) -> HashSet<Segment<N>> {
        self.nodes
            .windows(2)
            .map(|pair| Segment::new(pair[0].clone(), pair[1].clone()))
            .collect()
    }

    /// Number of distinct segments; the abstract length of the route.
    pub fn segment_count(&self) -> usize {
        self.segments().len()
    }

    /// Coordinates of the nodes known to `graph`, in route order. Unknown
    /// nodes are skipped.
    pub fn coordinates(&self, graph: &Graph<N>) -> Vec<Coordinate> {
        self.nodes
            .iter()
            .filter_map(|node| graph.coordinate(node))
            .collect()
    }
}

impl<N: NodeKey> From<Vec<N>> for Route<N> {
    fn from(nodes: Vec<N>) -> Self {
        Self::new(nodes)
    }
}

/// Routes matched together. Groups only ever grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group<N: NodeKey> {
    routes: Vec<Route<N>>,
}

impl<N: NodeKey> Group<N> {
    pub fn singleton(route: Route<N>) -> Self {
        Self {
            routes: vec![route],
        }
    }

    pub fn routes(&self) -> &[Route<N>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn push(&mut self, route: Route<N>) {
        self.routes.push(route);
    }

    /// Append all of `other`'s routes after this group's routes.
    pub fn absorb(&mut self, other: Group<N>) {
        self.routes.extend(other.routes);
    }

    pub fn into_routes(self) -> Vec<Route<N>> {
        self.routes
    }
}

impl<N: NodeKey> From<Vec<Route<N>>> for Group<N> {
    fn from(routes: Vec<Route<N>>) -> Self {
        Self { routes }
    }
}
