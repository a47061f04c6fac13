//! Static node → coordinate lookup and great-circle distance.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by [`haversine_m`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Bounds every node identifier must satisfy.
///
/// Nodes are compared for equality (segment intersection), hashed (segment
/// sets) and totally ordered (segment canonicalization, deterministic graph
/// iteration).
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// A node on a rectangular grid, ordered by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridNode {
    pub row: u32,
    pub col: u32,
}

impl GridNode {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Latitude/longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two coordinates, in meters.
pub fn haversine_m(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lng.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c * 1000.0
}

/// Node → coordinate mapping.
///
/// Backed by a `BTreeMap` so that [`Graph::nodes`] iterates in node order,
/// which keeps seeded route generation reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<N: NodeKey> {
    coordinates: BTreeMap<N, Coordinate>,
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self {
            coordinates: BTreeMap::new(),
        }
    }
}

impl<N: NodeKey> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the coordinate of `node`.
    pub fn insert(&mut self, node: N, coordinate: Coordinate) {
        self.coordinates.insert(node, coordinate);
    }

    pub fn coordinate(&self, node: &N) -> Option<Coordinate> {
        self.coordinates.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.coordinates.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.coordinates.keys()
    }
}

impl<N: NodeKey> FromIterator<(N, Coordinate)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Coordinate)>>(iter: I) -> Self {
        Self {
            coordinates: iter.into_iter().collect(),
        }
    }
}
