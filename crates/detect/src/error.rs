use thiserror::Error;

/// Errors produced by the detector.
///
/// Only configuration problems are errors. Suspicious text is a valid result
/// with a high score, never a failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("invalid detection config: {0}")]
    InvalidConfig(String),
}
