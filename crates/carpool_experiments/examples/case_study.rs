//! Example: static vs. greedy grouping on the three generated scenarios.
//!
//! Runs both algorithms on identical, partially overlapping and random routes,
//! prints the grouping quality per scenario, then repeats the comparison for
//! several similarity weights on the partial scenario.
//!
//! Set `RUST_LOG=debug` to follow individual merges and joins.

use carpool_experiments::parameters::{alpha_sweep_space, case_study_space};
use carpool_experiments::runner::run_parallel_experiments_with_progress;
use carpool_experiments::ExperimentResult;

const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Case study: grouping quality per scenario ===");
    let parameter_sets = case_study_space(SEED).generate();
    let results = run_parallel_experiments_with_progress(&parameter_sets, None, false)?;
    for result in &results {
        print_result(&format!("{} / {}", result.scenario, result.algorithm), result);
    }

    println!("\n=== Weight sweep on partial overlap ===");
    let parameter_sets = alpha_sweep_space(vec![SEED]).generate();
    let results = run_parallel_experiments_with_progress(&parameter_sets, None, false)?;
    for result in &results {
        print_result(
            &format!(
                "alpha={:.1} beta={:.1} / {}",
                result.alpha, result.beta, result.algorithm
            ),
            result,
        );
    }

    Ok(())
}

fn print_result(label: &str, result: &ExperimentResult) {
    let metrics = &result.metrics;
    println!("\n{label}");
    println!("  Groups formed: {}", metrics.num_groups);
    println!("  Average group size: {:.2}", metrics.avg_group_size);
    println!("  Travel gain: {:.1}%", metrics.travel_gain * 100.0);
    println!(
        "  Max relative detour: {:.1}%",
        metrics.max_relative_detour * 100.0
    );
}
