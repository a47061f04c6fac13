//! Parameter grid for grouping experiments.
//!
//! A [`ParameterSpace`] lists the values to explore per dimension; dimensions
//! left empty fall back to the base configuration. [`ParameterSpace::generate`]
//! expands the Cartesian product into [`ParameterSet`]s.

use carpool_core::matching::AlgorithmKind;
use carpool_core::scenario::{RouteScenario, ScenarioParams};
use carpool_core::MatchingConfig;
use serde::Serialize;

/// Multiplier used to derive the greedy shuffle seed from the scenario seed,
/// so route generation and arrival order do not share a random stream.
const SHUFFLE_SEED_MULTIPLIER: u64 = 0x9e3779b9;

/// A single fully specified experiment run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    pub experiment_id: String,
    /// Index of the seed within the space; runs sharing it see the same routes.
    pub run_id: usize,
    pub seed: u64,
    pub scenario: ScenarioParams,
    pub algorithm: AlgorithmKind,
    pub config: MatchingConfig,
}

impl ParameterSet {
    /// Seed of the greedy arrival-order shuffle.
    pub fn shuffle_seed(&self) -> u64 {
        self.seed.wrapping_mul(SHUFFLE_SEED_MULTIPLIER)
    }
}

/// Values to explore per dimension.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    base_config: MatchingConfig,
    base_scenario: ScenarioParams,
    scenarios: Vec<RouteScenario>,
    num_routes: Vec<usize>,
    /// Geographic weights; the overlap weight is `1 - alpha`.
    alphas: Vec<f64>,
    thresholds: Vec<f64>,
    algorithms: Vec<AlgorithmKind>,
    seeds: Vec<u64>,
}

impl Default for ParameterSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSpace {
    pub fn new() -> Self {
        Self {
            base_config: MatchingConfig::default(),
            base_scenario: ScenarioParams::default(),
            scenarios: vec![],
            num_routes: vec![],
            alphas: vec![],
            thresholds: vec![],
            algorithms: vec![],
            seeds: vec![],
        }
    }

    /// Create a new parameter space for grid search.
    pub fn grid() -> Self {
        Self::new()
    }

    pub fn scenarios(mut self, scenarios: Vec<RouteScenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    pub fn num_routes(mut self, counts: Vec<usize>) -> Self {
        self.num_routes = counts;
        self
    }

    /// Geographic weights to explore; each run uses `beta = 1 - alpha`.
    pub fn alphas(mut self, alphas: Vec<f64>) -> Self {
        self.alphas = alphas;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<f64>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn algorithms(mut self, algorithms: Vec<AlgorithmKind>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_base_config(mut self, config: MatchingConfig) -> Self {
        self.base_config = config;
        self
    }

    /// Generate all parameter sets (Cartesian product).
    ///
    /// Ordering is scenario, route count, alpha, threshold, algorithm, seed,
    /// with the seed varying fastest.
    pub fn generate(&self) -> Vec<ParameterSet> {
        let scenarios = or_base(&self.scenarios, self.base_scenario.scenario);
        let num_routes = or_base(&self.num_routes, self.base_scenario.num_routes);
        let alphas = or_base(&self.alphas, self.base_config.similarity.alpha);
        let thresholds = or_base(&self.thresholds, self.base_config.threshold);
        let algorithms = or_base(&self.algorithms, AlgorithmKind::Static);
        let seeds = or_base(&self.seeds, self.base_scenario.seed.unwrap_or(0));

        let mut parameter_sets = Vec::new();
        for &scenario in &scenarios {
            for &count in &num_routes {
                for &alpha in &alphas {
                    for &threshold in &thresholds {
                        for &algorithm in &algorithms {
                            for (run_id, &seed) in seeds.iter().enumerate() {
                                let mut config = self.base_config.with_threshold(threshold);
                                if !self.alphas.is_empty() {
                                    config = config.with_weights(alpha, 1.0 - alpha);
                                }
                                let scenario_params = self
                                    .base_scenario
                                    .clone()
                                    .with_scenario(scenario)
                                    .with_num_routes(count)
                                    .with_seed(seed);

                                parameter_sets.push(ParameterSet {
                                    experiment_id: format!("exp_{}", parameter_sets.len()),
                                    run_id,
                                    seed,
                                    scenario: scenario_params,
                                    algorithm,
                                    config,
                                });
                            }
                        }
                    }
                }
            }
        }
        parameter_sets
    }
}

fn or_base<T: Clone>(values: &[T], base: T) -> Vec<T> {
    if values.is_empty() {
        vec![base]
    } else {
        values.to_vec()
    }
}

/// Every scenario under both algorithms with equal weights.
pub fn case_study_space(seed: u64) -> ParameterSpace {
    ParameterSpace::grid()
        .scenarios(RouteScenario::ALL.to_vec())
        .algorithms(AlgorithmKind::ALL.to_vec())
        .seeds(vec![seed])
}

/// Weight sweep on the partial scenario under both algorithms.
pub fn alpha_sweep_space(seeds: Vec<u64>) -> ParameterSpace {
    ParameterSpace::grid()
        .scenarios(vec![RouteScenario::Partial])
        .alphas(vec![0.1, 0.5, 0.9])
        .algorithms(AlgorithmKind::ALL.to_vec())
        .seeds(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_space_yields_one_default_set() {
        let sets = ParameterSpace::grid().generate();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].config, MatchingConfig::default());
        assert_eq!(sets[0].algorithm, AlgorithmKind::Static);
        assert_eq!(sets[0].experiment_id, "exp_0");
    }

    #[test]
    fn grid_is_a_cartesian_product() {
        let sets = ParameterSpace::grid()
            .scenarios(vec![RouteScenario::Identical, RouteScenario::Partial])
            .alphas(vec![0.1, 0.9])
            .algorithms(AlgorithmKind::ALL.to_vec())
            .seeds(vec![1, 2, 3])
            .generate();
        assert_eq!(sets.len(), 2 * 2 * 2 * 3);

        let ids: std::collections::HashSet<_> = sets.iter().map(|s| &s.experiment_id).collect();
        assert_eq!(ids.len(), sets.len());
    }

    #[test]
    fn alpha_sets_complementary_beta() {
        let sets = ParameterSpace::grid().alphas(vec![0.1, 0.9]).generate();
        for set in &sets {
            let weights = set.config.similarity;
            assert!((weights.alpha + weights.beta - 1.0).abs() < 1e-12);
        }
        assert_eq!(sets[0].config.similarity.alpha, 0.1);
        assert_eq!(sets[1].config.similarity.alpha, 0.9);
    }

    #[test]
    fn runs_sharing_a_seed_share_routes() {
        let sets = alpha_sweep_space(vec![5]).generate();
        assert_eq!(sets.len(), 6);
        assert!(sets.iter().all(|s| s.scenario == sets[0].scenario));
        assert!(sets.iter().all(|s| s.shuffle_seed() == sets[0].shuffle_seed()));
    }

    #[test]
    fn case_study_covers_all_scenarios_and_algorithms() {
        let sets = case_study_space(1).generate();
        assert_eq!(sets.len(), 6);
        for scenario in RouteScenario::ALL {
            for algorithm in AlgorithmKind::ALL {
                assert!(sets
                    .iter()
                    .any(|s| s.scenario.scenario == scenario && s.algorithm == algorithm));
            }
        }
    }
}
