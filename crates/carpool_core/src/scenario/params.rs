use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default grid origin: lower Manhattan.
const DEFAULT_BASE_LAT: f64 = 40.7;
const DEFAULT_BASE_LNG: f64 = -74.0;

/// Default spacing between neighboring grid nodes (degrees).
const DEFAULT_STEP_DEG: f64 = 0.0005;

const DEFAULT_GRID_SIZE: u32 = 5;
const DEFAULT_NUM_ROUTES: usize = 10;

/// Square grid layout. Node `(row, col)` sits at
/// `(base_lat + row * step_lat, base_lng + col * step_lng)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    pub size: u32,
    pub base_lat: f64,
    pub base_lng: f64,
    pub step_lat: f64,
    pub step_lng: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            base_lat: DEFAULT_BASE_LAT,
            base_lng: DEFAULT_BASE_LNG,
            step_lat: DEFAULT_STEP_DEG,
            step_lng: DEFAULT_STEP_DEG,
        }
    }
}

/// Which family of routes to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteScenario {
    /// One random route repeated for every traveler.
    Identical,
    /// Routes sharing a three-node middle stretch with random ends.
    Partial,
    /// Independent random routes.
    Different,
}

impl RouteScenario {
    pub const ALL: [RouteScenario; 3] = [
        RouteScenario::Identical,
        RouteScenario::Partial,
        RouteScenario::Different,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RouteScenario::Identical => "identical",
            RouteScenario::Partial => "partial",
            RouteScenario::Different => "different",
        }
    }
}

impl fmt::Display for RouteScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteScenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identical" => Ok(RouteScenario::Identical),
            "partial" => Ok(RouteScenario::Partial),
            "different" => Ok(RouteScenario::Different),
            _ => Err(ConfigError::UnknownScenario(s.to_string())),
        }
    }
}

/// Parameters for building a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub scenario: RouteScenario,
    pub num_routes: usize,
    pub grid: GridParams,
    /// Seed for route generation. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            scenario: RouteScenario::Different,
            num_routes: DEFAULT_NUM_ROUTES,
            grid: GridParams::default(),
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_scenario(mut self, scenario: RouteScenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_num_routes(mut self, num_routes: usize) -> Self {
        self.num_routes = num_routes;
        self
    }

    pub fn with_grid(mut self, grid: GridParams) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
