use serde::{Deserialize, Serialize};

use policy::{classify, RiskLevel, Thresholds};

use crate::scorer::{max_similarity, SimilarityMatch};

/// Risk status derived from a match list and the current threshold pair.
///
/// Derived, never stored: callers recompute it whenever thresholds may have
/// moved, so the display always reflects the pair in force.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityStatus {
    pub level: RiskLevel,
    /// Maximum similarity among all matches; 0 for an empty list.
    pub percentage: f64,
    pub message: String,
    /// UI color tag matching `level`.
    pub color_tag: String,
    /// The thresholds the classification used, echoed for display.
    pub warning_threshold: f64,
    pub danger_threshold: f64,
}

/// Classify the maximum similarity of a match list against a threshold pair.
pub fn derive_status(matches: &[SimilarityMatch], thresholds: &Thresholds) -> SimilarityStatus {
    let percentage = max_similarity(matches);
    let level = classify(percentage, thresholds);
    let message = match level {
        RiskLevel::Danger => format!(
            "highest similarity {percentage:.1}% is at or above the danger threshold ({:.0}%)",
            thresholds.danger
        ),
        RiskLevel::Warning => format!(
            "highest similarity {percentage:.1}% is above the warning threshold ({:.0}%)",
            thresholds.warning
        ),
        RiskLevel::Success => format!("highest similarity {percentage:.1}% is within limits"),
    };

    SimilarityStatus {
        level,
        percentage,
        message,
        color_tag: level.color_tag().to_string(),
        warning_threshold: thresholds.warning,
        danger_threshold: thresholds.danger,
    }
}
