//! Result export to CSV and JSON.

use std::path::Path;

use crate::error::ExperimentError;
use crate::parameters::ParameterSet;
use crate::runner::ExperimentResult;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export experiment results to JSON format.
///
/// Writes a pretty-printed array with one object per result.
///
/// # Errors
///
/// Returns an error if `results` is empty or if file creation or JSON
/// serialization fails.
pub fn export_to_json(
    results: &[ExperimentResult],
    path: impl AsRef<Path>,
) -> Result<(), ExperimentError> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(results, file)
}

/// Export experiment results with their parameters to CSV format.
///
/// Parameters and results are paired by index (`results[i]` corresponds to
/// `parameter_sets[i]`).
///
/// # Errors
///
/// Returns an error if `results` is empty, if the lengths don't match, or if
/// file creation or CSV writing fails.
pub fn export_to_csv(
    results: &[ExperimentResult],
    parameter_sets: &[ParameterSet],
    path: impl AsRef<Path>,
) -> Result<(), ExperimentError> {
    writer_utils::ensure_not_empty(results)?;
    writer_utils::ensure_same_len(results, parameter_sets)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(results, parameter_sets, file)
}
