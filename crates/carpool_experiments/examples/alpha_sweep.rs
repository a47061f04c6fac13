//! Example: multi-seed sweep over similarity weights, exported to CSV and JSON.

use carpool_core::matching::AlgorithmKind;
use carpool_core::scenario::RouteScenario;
use carpool_experiments::{export_to_csv, export_to_json, run_parallel_experiments, ParameterSpace};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Generating parameter sets...");
    let parameter_sets = ParameterSpace::grid()
        .scenarios(RouteScenario::ALL.to_vec())
        .alphas(vec![0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0])
        .thresholds(vec![0.3, 0.5, 0.7])
        .algorithms(AlgorithmKind::ALL.to_vec())
        .seeds((0..20).collect())
        .generate();
    println!("Generated {} parameter combinations", parameter_sets.len());

    let results = run_parallel_experiments(&parameter_sets, None)?;
    println!("Completed {} experiments", results.len());

    if let Some(best) = results
        .iter()
        .max_by(|a, b| a.metrics.travel_gain.total_cmp(&b.metrics.travel_gain))
    {
        println!("\n=== Highest travel gain ===");
        println!("Experiment: {}", best.experiment_id);
        println!("Scenario: {} / {}", best.scenario, best.algorithm);
        println!("alpha={:.1} beta={:.1}", best.alpha, best.beta);
        println!("Travel gain: {:.1}%", best.metrics.travel_gain * 100.0);
        println!(
            "Max relative detour: {:.1}%",
            best.metrics.max_relative_detour * 100.0
        );
    }

    println!("\nExporting results...");
    export_to_csv(&results, &parameter_sets, "alpha_sweep.csv")?;
    println!("Exported to alpha_sweep.csv");
    export_to_json(&results, "alpha_sweep.json")?;
    println!("Exported to alpha_sweep.json");

    Ok(())
}
