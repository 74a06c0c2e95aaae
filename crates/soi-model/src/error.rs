use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid external id: {0}")]
    InvalidExternalId(String),
    #[error("unknown target field: {0}")]
    UnknownTargetField(String),
    #[error("duplicate target field in mapping: {0}")]
    DuplicateTargetField(String),
    #[error("mapping field name must not be empty")]
    EmptyFieldName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
