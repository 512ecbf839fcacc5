use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The warning/danger cut point pair, in percent.
///
/// Invariant: `0 <= warning < danger <= 100`. Construct through
/// [`Thresholds::new`] or validate after deserialization; a raw struct
/// literal bypasses the check and is only appropriate in tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    pub warning: f64,
    pub danger: f64,
}

impl Thresholds {
    /// Build a validated pair.
    pub fn new(warning: f64, danger: f64) -> Result<Self, ConfigError> {
        let pair = Self { warning, danger };
        pair.validate()?;
        Ok(pair)
    }

    /// Check the pair invariant without consuming the value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("warning", self.warning), ("danger", self.danger)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if self.warning >= self.danger {
            return Err(ConfigError::InvertedPair {
                warning: self.warning,
                danger: self.danger,
            });
        }
        Ok(())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: 40.0,
            danger: 70.0,
        }
    }
}

/// Risk classification of a percentage score.
///
/// Ordered so that `Success < Warning < Danger`; classification is monotonic
/// in the percentage for a fixed threshold pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Success,
    Warning,
    Danger,
}

impl RiskLevel {
    /// UI color tag used by the presentation layer.
    pub fn color_tag(&self) -> &'static str {
        match self {
            RiskLevel::Success => "success",
            RiskLevel::Warning => "warning",
            RiskLevel::Danger => "danger",
        }
    }
}

/// Classify a percentage against a threshold pair.
///
/// Half-open intervals: `[0, warning)` success, `[warning, danger)` warning,
/// `[danger, 100]` danger.
pub fn classify(percentage: f64, thresholds: &Thresholds) -> RiskLevel {
    if percentage >= thresholds.danger {
        RiskLevel::Danger
    } else if percentage >= thresholds.warning {
        RiskLevel::Warning
    } else {
        RiskLevel::Success
    }
}
