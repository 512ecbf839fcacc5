use serde::{Deserialize, Serialize};

use crate::config::NormalizeConfig;
use crate::token::Token;

/// Output of the normalization pipeline.
///
/// `sha256_hex` identifies the canonical text under the config version that
/// produced it: two submissions with equal hashes carry the same words in
/// the same order. The similarity scorer uses this to recognize a candidate
/// resubmitted unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedDocument {
    /// Caller-supplied identifier, kept for traceability.
    pub doc_id: String,
    /// Collapsed canonical text: single spaces, transformed per config.
    pub canonical_text: String,
    /// Ordered tokens with byte offsets into `canonical_text`.
    pub tokens: Vec<Token>,
    /// Versioned identity hash of `canonical_text`.
    pub sha256_hex: String,
    /// Version of the config that produced this document.
    pub version: u32,
    /// The full configuration, for replay and audits.
    pub config: NormalizeConfig,
}
