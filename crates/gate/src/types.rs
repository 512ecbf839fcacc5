use serde::{Deserialize, Serialize};

use detect::AiDetectionResult;
use similarity::{SimilarityMatch, SimilarityStatus};

/// Why a submission was blocked. Each variant carries the observed
/// percentage and the threshold it crossed, so the caller can render the
/// decision without re-reading the policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockingReason {
    ArtificialText { percentage: u8, threshold: f64 },
    ExcessiveSimilarity { percentage: f64, threshold: f64 },
}

/// Similarity outcome attached to a verdict: the complete match list plus
/// the status derived from the thresholds in force during the screening.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityReport {
    pub matches: Vec<SimilarityMatch>,
    pub status: SimilarityStatus,
}

/// Composite screening decision.
///
/// `similarity` is `None` when AI detection blocked the submission before
/// the corpus was consulted. `blocking_reasons` is empty exactly when
/// `allowed` is true; warnings live in the similarity status, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    pub allowed: bool,
    pub ai: AiDetectionResult,
    pub similarity: Option<SimilarityReport>,
    pub blocking_reasons: Vec<BlockingReason>,
}
