use thiserror::Error;

/// Errors that can occur during normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("normalization requires a non-empty doc_id")]
    MissingDocId,
    #[error("input text empty after normalization")]
    EmptyInput,
}
