use std::fs::File;
use std::path::Path;

use crate::error::ExperimentError;

pub(crate) fn ensure_not_empty<T>(items: &[T]) -> Result<(), ExperimentError> {
    if items.is_empty() {
        return Err(ExperimentError::Empty);
    }

    Ok(())
}

pub(crate) fn ensure_same_len<A, B>(results: &[A], parameter_sets: &[B]) -> Result<(), ExperimentError> {
    if results.len() != parameter_sets.len() {
        return Err(ExperimentError::LengthMismatch {
            results: results.len(),
            parameter_sets: parameter_sets.len(),
        });
    }

    Ok(())
}

pub(crate) fn create_output_file(path: impl AsRef<Path>) -> Result<File, ExperimentError> {
    Ok(File::create(path)?)
}
