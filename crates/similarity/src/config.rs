use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Configuration for the similarity scorer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityConfig {
    /// Configuration schema version. Any change that can affect scores must
    /// bump this so stored screening results stay replayable. Must be >= 1.
    pub version: u32,
    /// Number of words per shingle. Larger values demand longer verbatim
    /// runs before two documents look alike; smaller values tolerate more
    /// paraphrasing. Documents shorter than `shingle_k` words fall back to
    /// unigram sets so self-similarity still saturates.
    pub shingle_k: usize,
    /// Seed for shingle hashing. Two scorers with the same seed and config
    /// produce bit-identical shingle sets.
    pub seed: u64,
    /// Fan the corpus loop out over rayon. Output is identical to the
    /// sequential path.
    pub use_parallel: bool,
    /// Skip corpus documents whose canonical hash equals the candidate's.
    /// Off by default; the caller owns the resubmission policy.
    pub skip_identical_hash: bool,
}

impl SimilarityConfig {
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.version == 0 {
            return Err(ScoringError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.shingle_k == 0 {
            return Err(ScoringError::InvalidConfig(
                "shingle_k must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            version: 1,
            shingle_k: 3,
            seed: 0x5C0_7E5_15_D0C5,
            use_parallel: false,
            skip_identical_hash: false,
        }
    }
}
