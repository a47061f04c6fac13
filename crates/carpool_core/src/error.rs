use thiserror::Error;

/// Rejected configuration or unparseable configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("weight `{name}` must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },
    #[error("weight `{name}` must be finite, got {value}")]
    NonFiniteWeight { name: &'static str, value: f64 },
    #[error("tolerance must be finite and positive, got {0} m")]
    InvalidTolerance(f64),
    #[error("threshold must be finite, got {0}")]
    InvalidThreshold(f64),
    #[error("unknown route scenario `{0}` (expected identical, partial or different)")]
    UnknownScenario(String),
    #[error("unknown grouping algorithm `{0}` (expected static or greedy)")]
    UnknownAlgorithm(String),
}
