use thiserror::Error;

/// Errors produced by the similarity layer.
///
/// An empty corpus is not an error; it yields an empty match list. Only
/// structural failures land here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    /// Invalid scorer configuration.
    #[error("invalid similarity config: {0}")]
    InvalidConfig(String),
    /// The candidate text normalized to nothing; there is nothing to score.
    #[error("candidate text is empty after normalization")]
    EmptyCandidate,
    /// The corpus source failed to produce a snapshot (I/O on the corpus
    /// store). Retryable at the caller's discretion.
    #[error("corpus unavailable: {0}")]
    CorpusUnavailable(String),
}
