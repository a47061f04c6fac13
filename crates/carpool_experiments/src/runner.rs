//! Parallel experiment execution using rayon.
//!
//! Each experiment generates its scenario from the parameter set's seed, runs
//! one grouping algorithm over it and scores the partition. Runs share no
//! state, so a sweep is a plain parallel map.

use carpool_core::matching::{build_algorithm, AlgorithmKind};
use carpool_core::scenario::{build_scenario, RouteScenario};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::ExperimentError;
use crate::metrics::GroupingMetrics;
use crate::parameters::ParameterSet;

/// Outcome of one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentResult {
    pub experiment_id: String,
    pub scenario: RouteScenario,
    pub algorithm: AlgorithmKind,
    pub alpha: f64,
    pub beta: f64,
    #[serde(flatten)]
    pub metrics: GroupingMetrics,
}

/// Run a single experiment with the given parameter set.
///
/// # Errors
///
/// Returns [`ExperimentError::Config`] when the matching configuration is
/// invalid.
pub fn run_single_experiment(param_set: &ParameterSet) -> Result<ExperimentResult, ExperimentError> {
    param_set
        .config
        .validate()
        .map_err(|source| ExperimentError::Config {
            experiment_id: param_set.experiment_id.clone(),
            source,
        })?;

    let (graph, routes) = build_scenario(&param_set.scenario);
    let algorithm = build_algorithm(
        param_set.algorithm,
        param_set.config,
        param_set.shuffle_seed(),
    );
    let groups = algorithm.group(&routes, &graph);
    let metrics = GroupingMetrics::from_groups(&groups, &routes);

    debug!(
        "{}: {} over {} routes formed {} groups",
        param_set.experiment_id,
        algorithm.name(),
        metrics.total_routes,
        metrics.num_groups
    );

    Ok(ExperimentResult {
        experiment_id: param_set.experiment_id.clone(),
        scenario: param_set.scenario.scenario,
        algorithm: param_set.algorithm,
        alpha: param_set.config.similarity.alpha,
        beta: param_set.config.similarity.beta,
        metrics,
    })
}

/// Run multiple experiments in parallel with a progress bar.
///
/// Results come back in the same order as `parameter_sets`. `num_threads`
/// of `None` uses rayon's default.
pub fn run_parallel_experiments(
    parameter_sets: &[ParameterSet],
    num_threads: Option<usize>,
) -> Result<Vec<ExperimentResult>, ExperimentError> {
    run_parallel_experiments_with_progress(parameter_sets, num_threads, true)
}

/// Run multiple experiments in parallel with an optional progress bar.
///
/// The first failing run aborts the sweep with its error.
pub fn run_parallel_experiments_with_progress(
    parameter_sets: &[ParameterSet],
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<ExperimentResult>, ExperimentError> {
    let total = parameter_sets.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    info!("running {} experiments", total);

    let pb_clone = pb.clone();
    let results = pool.install(|| {
        parameter_sets
            .par_iter()
            .map(|param_set| {
                let result = run_single_experiment(param_set);
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                result
            })
            .collect::<Result<Vec<_>, _>>()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterSpace;
    use carpool_core::MatchingConfig;

    #[test]
    fn identical_scenario_forms_a_single_group() {
        let sets = ParameterSpace::grid()
            .scenarios(vec![RouteScenario::Identical])
            .algorithms(AlgorithmKind::ALL.to_vec())
            .seeds(vec![3])
            .generate();

        for set in &sets {
            let result = run_single_experiment(set).unwrap();
            assert_eq!(result.metrics.num_groups, 1, "{}", set.algorithm);
            assert_eq!(result.metrics.total_routes, 10);
            assert_eq!(result.metrics.max_relative_detour, 0.0);
            assert!(result.metrics.travel_gain > 0.0);
        }
    }

    #[test]
    fn invalid_config_is_reported_with_experiment_id() {
        let sets = ParameterSpace::grid()
            .with_base_config(MatchingConfig::default().with_threshold(f64::NAN))
            .generate();

        match run_single_experiment(&sets[0]) {
            Err(ExperimentError::Config { experiment_id, .. }) => {
                assert_eq!(experiment_id, "exp_0")
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn parallel_results_keep_input_order() {
        let sets = ParameterSpace::grid()
            .scenarios(RouteScenario::ALL.to_vec())
            .algorithms(AlgorithmKind::ALL.to_vec())
            .seeds(vec![1, 2])
            .generate();
        let results = run_parallel_experiments_with_progress(&sets, Some(2), false).unwrap();

        assert_eq!(results.len(), 12);
        for (result, set) in results.iter().zip(&sets) {
            assert_eq!(result.experiment_id, set.experiment_id);
            assert_eq!(result.algorithm, set.algorithm);
        }
    }

    #[test]
    fn parallel_runs_are_reproducible() {
        let sets = crate::parameters::alpha_sweep_space(vec![11]).generate();
        let first = run_parallel_experiments_with_progress(&sets, Some(2), false).unwrap();
        let second = run_parallel_experiments_with_progress(&sets, Some(1), false).unwrap();
        assert_eq!(first, second);
    }
}
