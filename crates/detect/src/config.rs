use serde::{Deserialize, Serialize};

use crate::error::DetectError;

/// Relative weight of each signal in the final score.
///
/// Weights must each sit in [0, 1] and sum to 1. The defaults are the
/// hand-tuned production values; signal logic never reads them, so they can
/// be retuned without touching the signals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SignalWeights {
    pub repetition: f64,
    pub structure: f64,
    pub vocabulary: f64,
    pub transitions: f64,
}

impl SignalWeights {
    pub fn sum(&self) -> f64 {
        self.repetition + self.structure + self.vocabulary + self.transitions
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            repetition: 0.30,
            structure: 0.25,
            vocabulary: 0.25,
            transitions: 0.20,
        }
    }
}

/// Configuration for the AI-authorship detector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectConfig {
    /// Configuration schema version. Must be >= 1.
    pub version: u32,
    /// Signal weights for the final score.
    pub weights: SignalWeights,
    /// Below this many characters the input carries too little signal and
    /// confidence is pinned to low.
    pub min_text_chars: usize,
    /// How many leading characters of a sentence count as its "opening"
    /// for the repetition signal.
    pub opening_prefix_chars: usize,
    /// Mean pattern score at or above which confidence is high.
    pub high_confidence_mean: f64,
    /// Mean pattern score at or above which confidence is medium.
    pub medium_confidence_mean: f64,
    /// Final percentage above which the general "very artificial style"
    /// indicator fires.
    pub artificial_indicator_threshold: u8,
}

impl DetectConfig {
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.version == 0 {
            return Err(DetectError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        let w = &self.weights;
        for (name, value) in [
            ("repetition", w.repetition),
            ("structure", w.structure),
            ("vocabulary", w.vocabulary),
            ("transitions", w.transitions),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DetectError::InvalidConfig(format!(
                    "{name} weight {value} is outside [0, 1]"
                )));
            }
        }
        if (w.sum() - 1.0).abs() > 1e-6 {
            return Err(DetectError::InvalidConfig(format!(
                "signal weights must sum to 1.0 (got {})",
                w.sum()
            )));
        }
        if self.opening_prefix_chars == 0 {
            return Err(DetectError::InvalidConfig(
                "opening_prefix_chars must be >= 1".into(),
            ));
        }
        if self.medium_confidence_mean >= self.high_confidence_mean {
            return Err(DetectError::InvalidConfig(
                "medium confidence mean must be below the high confidence mean".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            version: 1,
            weights: SignalWeights::default(),
            min_text_chars: 300,
            opening_prefix_chars: 20,
            high_confidence_mean: 60.0,
            medium_confidence_mean: 35.0,
            artificial_indicator_threshold: 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DetectConfig::default().validate().is_ok());
    }

    #[test]
    fn default_weights_sum_to_one() {
        assert!((SignalWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn weights_not_summing_to_one_rejected() {
        let cfg = DetectConfig {
            weights: SignalWeights {
                repetition: 0.5,
                structure: 0.5,
                vocabulary: 0.5,
                transitions: 0.5,
            },
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(DetectError::InvalidConfig(_))));
    }

    #[test]
    fn negative_weight_rejected() {
        let cfg = DetectConfig {
            weights: SignalWeights {
                repetition: -0.1,
                structure: 0.45,
                vocabulary: 0.45,
                transitions: 0.2,
            },
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(DetectError::InvalidConfig(_))));
    }

    #[test]
    fn inverted_confidence_bands_rejected() {
        let cfg = DetectConfig {
            high_confidence_mean: 30.0,
            medium_confidence_mean: 60.0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(DetectError::InvalidConfig(_))));
    }
}
