//! Unified error type for the import pipeline.

use thiserror::Error;

use soi_ingest::IngestError;
use soi_transform::TransformError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Failed to serialize the in-memory request buffer.
    #[error("failed to build import buffer: {message}")]
    Buffer { message: String },

    /// The bulk import service itself failed to respond. Row-level
    /// rejections are not errors; they come back in the outcome list.
    #[error("bulk import service failed: {message}")]
    Service { message: String },
}

pub type Result<T> = std::result::Result<T, ImportError>;
