use thiserror::Error;

use detect::DetectError;
use extract::ExtractionError;
use similarity::ScoringError;

/// Errors surfaced by the submission gate.
///
/// Component errors propagate unchanged: a submission blocked by a real
/// failure must stay distinguishable from a submission blocked by a
/// high-risk score, which is a successful [`Verdict`](crate::Verdict).
#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Detection(#[from] DetectError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
