//! Tunable policy values for similarity scoring and grouping.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Distance at which geographic similarity drops to zero (meters).
pub const DEFAULT_TOLERANCE_M: f64 = 100.0;

/// Cost below which a merge (static) or a join (greedy) is accepted.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

const DEFAULT_ALPHA: f64 = 0.5;
const DEFAULT_BETA: f64 = 0.5;

/// Weights and tolerance of the pairwise similarity score.
///
/// The final score is `alpha * S_geo + beta * S_overlap` without any
/// renormalization; keeping `alpha + beta <= 1` keeps it within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityModel {
    /// Weight of geographic similarity.
    pub alpha: f64,
    /// Weight of segment overlap.
    pub beta: f64,
    /// Average nearest-point distance at which `S_geo` reaches zero.
    pub tolerance_m: f64,
}

impl SimilarityModel {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha,
            beta,
            tolerance_m: DEFAULT_TOLERANCE_M,
        }
    }

    pub fn with_tolerance_m(mut self, tolerance_m: f64) -> Self {
        self.tolerance_m = tolerance_m;
        self
    }

    /// True when `alpha + beta > 1.0`; such weights are accepted but logged
    /// by [`SimilarityModel::validate`].
    pub fn exceeds_unit_weight(&self) -> bool {
        self.alpha + self.beta > 1.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight("alpha", self.alpha)?;
        check_weight("beta", self.beta)?;
        if !self.tolerance_m.is_finite() || self.tolerance_m <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance_m));
        }
        if self.exceeds_unit_weight() {
            warn!(
                "alpha + beta = {} exceeds 1.0; similarity scores may leave [0, 1]",
                self.alpha + self.beta
            );
        }
        Ok(())
    }
}

impl Default for SimilarityModel {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA, DEFAULT_BETA)
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteWeight { name, value });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeWeight { name, value });
    }
    Ok(())
}

/// Configuration shared by both grouping algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub similarity: SimilarityModel,
    /// Merge threshold for static matching and join threshold for greedy
    /// matching. Candidates must be strictly below it.
    pub threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity: SimilarityModel::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MatchingConfig {
    pub fn with_weights(mut self, alpha: f64, beta: f64) -> Self {
        self.similarity.alpha = alpha;
        self.similarity.beta = beta;
        self
    }

    pub fn with_tolerance_m(mut self, tolerance_m: f64) -> Self {
        self.similarity.tolerance_m = tolerance_m;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Whether a merge or join costing `cost` passes the threshold.
    pub fn accepts(&self, cost: f64) -> bool {
        cost < self.threshold
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.similarity.validate()?;
        if !self.threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
