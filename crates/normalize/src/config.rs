use serde::{Deserialize, Serialize};

/// Configuration for the normalization pipeline.
///
/// The `version` field tracks behavior changes: any edit to normalization
/// semantics (including bug fixes) must bump it, so identity hashes produced
/// under different behavior never collide. Version 0 is reserved and
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization behavior. Must be >= 1.
    pub version: u32,
    /// Apply Unicode NFKC normalization before other transforms, so
    /// composed and decomposed forms of the same accented text compare equal.
    pub normalize_unicode: bool,
    /// Treat Unicode punctuation as delimiters and drop it. On by default:
    /// similarity comparison is over words, not typography.
    pub strip_punctuation: bool,
    /// Apply locale-free Unicode lowercasing.
    pub lowercase: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            strip_punctuation: true,
            lowercase: true,
        }
    }
}
