use crate::error::ExperimentError;
use crate::runner::ExperimentResult;

pub(crate) fn export_to_json_impl(
    results: &[ExperimentResult],
    file: std::fs::File,
) -> Result<(), ExperimentError> {
    serde_json::to_writer_pretty(file, results)?;
    Ok(())
}
