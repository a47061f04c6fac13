//! Experiment harness for comparing carpool grouping strategies.
//!
//! Runs the static and greedy algorithms from `carpool_core` over generated
//! scenarios, scores the resulting partitions with travel-gain and fairness
//! metrics, and exports the results.
//!
//! # Quick Start
//!
//! ```no_run
//! use carpool_experiments::{export_to_csv, run_parallel_experiments, ParameterSpace};
//! use carpool_core::scenario::RouteScenario;
//!
//! let space = ParameterSpace::grid()
//!     .scenarios(vec![RouteScenario::Partial])
//!     .alphas(vec![0.1, 0.5, 0.9])
//!     .seeds(vec![1, 2, 3]);
//!
//! let parameter_sets = space.generate();
//! let results = run_parallel_experiments(&parameter_sets, None)?;
//! export_to_csv(&results, &parameter_sets, "alpha_sweep.csv")?;
//! # Ok::<(), carpool_experiments::ExperimentError>(())
//! ```
//!
//! # Architecture
//!
//! - [`parameters`]: Cartesian parameter grid and presets
//! - [`runner`]: single and parallel (rayon) experiment execution
//! - [`metrics`]: travel gain, maximum relative detour, group sizes
//! - [`export`]: CSV and JSON output

pub mod error;
pub mod export;
pub mod metrics;
pub mod parameters;
pub mod runner;

pub use error::ExperimentError;
pub use export::{export_to_csv, export_to_json};
pub use metrics::{average_group_size, max_relative_detour, travel_gain, GroupingMetrics};
pub use parameters::{ParameterSet, ParameterSpace};
pub use runner::{run_parallel_experiments, run_single_experiment, ExperimentResult};
