use carpool_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("invalid configuration for {experiment_id}: {source}")]
    Config {
        experiment_id: String,
        #[source]
        source: ConfigError,
    },
    #[error("no results to export")]
    Empty,
    #[error("results length ({results}) doesn't match parameter_sets length ({parameter_sets})")]
    LengthMismatch { results: usize, parameter_sets: usize },
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
