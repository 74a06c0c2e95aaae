use thiserror::Error;

use soi_model::ModelError;

/// Errors from per-row transformation.
///
/// All of these are fatal for the run: a row that cannot be transformed
/// means nothing gets submitted.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Date value does not match the configured source format.
    #[error("invalid date '{value}' (expected format {format})")]
    DateFormat { value: String, format: String },

    /// Row is missing a mapped source column.
    #[error("row is missing source column '{0}'")]
    MissingColumn(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
