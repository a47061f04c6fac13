use crate::error::ExperimentError;
use crate::parameters::ParameterSet;
use crate::runner::ExperimentResult;

pub(crate) fn export_to_csv_impl(
    results: &[ExperimentResult],
    parameter_sets: &[ParameterSet],
    file: std::fs::File,
) -> Result<(), ExperimentError> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "experiment_id",
        "run_id",
        "seed",
        "scenario",
        "num_routes",
        "grid_size",
        "algorithm",
        "alpha",
        "beta",
        "tolerance_m",
        "threshold",
        "total_routes",
        "num_groups",
        "avg_group_size",
        "travel_gain",
        "max_relative_detour",
    ])?;

    for (result, param_set) in results.iter().zip(parameter_sets.iter()) {
        let similarity = &param_set.config.similarity;
        let metrics = &result.metrics;

        wtr.write_record([
            param_set.experiment_id.clone(),
            param_set.run_id.to_string(),
            param_set.seed.to_string(),
            param_set.scenario.scenario.to_string(),
            param_set.scenario.num_routes.to_string(),
            param_set.scenario.grid.size.to_string(),
            param_set.algorithm.to_string(),
            similarity.alpha.to_string(),
            similarity.beta.to_string(),
            similarity.tolerance_m.to_string(),
            param_set.config.threshold.to_string(),
            metrics.total_routes.to_string(),
            metrics.num_groups.to_string(),
            metrics.avg_group_size.to_string(),
            metrics.travel_gain.to_string(),
            metrics.max_relative_detour.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
