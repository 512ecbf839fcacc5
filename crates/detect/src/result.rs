use serde::{Deserialize, Serialize};

use crate::style::AiStyle;

/// Per-signal sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternScores {
    pub repetition: u8,
    pub structure: u8,
    pub vocabulary: u8,
    pub transitions: u8,
}

impl PatternScores {
    pub fn mean(&self) -> f64 {
        (self.repetition as f64
            + self.structure as f64
            + self.vocabulary as f64
            + self.transitions as f64)
            / 4.0
    }
}

/// How much signal the detector had to work with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Result of one detection pass. Pure function of the input text and
/// config; nothing here is persisted by the screening core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiDetectionResult {
    /// Final weighted score, rounded and clamped to [0, 100].
    pub ai_percentage: u8,
    /// Dominant reference style, or unknown.
    pub ai_type: AiStyle,
    pub confidence: Confidence,
    /// Human-readable descriptions of the rules that fired, in signal order.
    pub indicators: Vec<String>,
    pub patterns: PatternScores,
}
