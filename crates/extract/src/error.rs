use thiserror::Error;

/// Errors that make a submission unanalyzable.
///
/// These are structural failures only. A suspicious document is a valid
/// high-score result downstream, never an extraction error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractionError {
    /// The byte stream is not a PDF the parser can read.
    #[error("pdf parsing failed: {0}")]
    Parse(String),
    /// Parsing succeeded but produced no extractable text. Treated as a
    /// failure so an empty document can never pass screening vacuously.
    #[error("document contains no extractable text")]
    EmptyDocument,
    /// Payload exceeds the configured size limit.
    #[error("payload exceeds size limit: {0}")]
    PayloadTooLarge(String),
    /// Invalid extraction configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
