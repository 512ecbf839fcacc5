//! Heuristic AI-authorship detection for thesis text.
//!
//! A four-signal weighted heuristic rather than a trained classifier, and
//! deliberately so: fully deterministic, auditable, explainable through indicators,
//! and free of any external model dependency. Each signal scores one
//! writing-pattern family in [0, 100]:
//!
//! - **Repetition**: duplicate sentence openings and templated phrasings
//! - **Structure**: sentence-length uniformity and simple constructions
//! - **Vocabulary**: low diversity and over-used formal connectors
//! - **Transitions**: connector-word density per sentence
//!
//! The final percentage is a weighted sum of the four (weights in
//! [`DetectConfig`], validated to sum to 1), rounded and clamped. A style
//! label, a confidence band, and human-readable indicators round out the
//! result.
//!
//! ## Contract
//!
//! - Pure function of `(text, config)`: no I/O, no clock, no global state.
//! - Suspicious text is a valid high-score result. The only error is an
//!   invalid configuration.
//! - Progress events are observational; [`analyze`] and
//!   [`analyze_with_progress`] return identical results for the same input.

mod config;
mod error;
mod progress;
mod result;
mod signals;
mod style;
mod text;

pub use crate::config::{DetectConfig, SignalWeights};
pub use crate::error::DetectError;
pub use crate::progress::{DetectionStage, NullSink, ProgressEvent, ProgressSink};
pub use crate::result::{AiDetectionResult, Confidence, PatternScores};
pub use crate::signals::{repetition_score, structure_score, transition_score, vocabulary_score};
pub use crate::style::{classify_style, AiStyle};

use crate::text::split_sentences;

/// Run a detection pass without progress reporting.
pub fn analyze(text: &str, cfg: &DetectConfig) -> Result<AiDetectionResult, DetectError> {
    analyze_with_progress(text, cfg, &mut NullSink)
}

/// Run a detection pass, emitting stage events into `sink` as analysis
/// advances. Progress rises monotonically from 0 to 100.
pub fn analyze_with_progress(
    text: &str,
    cfg: &DetectConfig,
    sink: &mut dyn ProgressSink,
) -> Result<AiDetectionResult, DetectError> {
    cfg.validate()?;

    emit(sink, DetectionStage::Preparation, 5);
    let sentences = split_sentences(text);

    emit(sink, DetectionStage::PatternAnalysis, 20);
    let repetition = signals::repetition_score(&sentences, cfg.opening_prefix_chars);

    emit(sink, DetectionStage::StructuralAnalysis, 40);
    let structure = signals::structure_score(&sentences);

    emit(sink, DetectionStage::LexicalAnalysis, 60);
    let vocabulary = signals::vocabulary_score(text);

    emit(sink, DetectionStage::TransitionAnalysis, 80);
    let transitions = signals::transition_score(text, sentences.len());

    emit(sink, DetectionStage::Finalization, 100);
    let patterns = PatternScores {
        repetition,
        structure,
        vocabulary,
        transitions,
    };

    let weighted = cfg.weights.repetition * repetition as f64
        + cfg.weights.structure * structure as f64
        + cfg.weights.vocabulary * vocabulary as f64
        + cfg.weights.transitions * transitions as f64;
    let ai_percentage = weighted.round().clamp(0.0, 100.0) as u8;

    let ai_type = classify_style(text);
    let confidence = confidence_for(text, &patterns, cfg);
    let indicators = build_indicators(&patterns, ai_percentage, cfg);

    Ok(AiDetectionResult {
        ai_percentage,
        ai_type,
        confidence,
        indicators,
        patterns,
    })
}

fn emit(sink: &mut dyn ProgressSink, stage: DetectionStage, progress: u8) {
    sink.emit(ProgressEvent {
        stage,
        progress,
        detail: stage.label().to_string(),
    });
}

fn confidence_for(text: &str, patterns: &PatternScores, cfg: &DetectConfig) -> Confidence {
    if text.chars().count() < cfg.min_text_chars {
        return Confidence::Low;
    }
    let mean = patterns.mean();
    if mean >= cfg.high_confidence_mean {
        Confidence::High
    } else if mean >= cfg.medium_confidence_mean {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn build_indicators(patterns: &PatternScores, ai_percentage: u8, cfg: &DetectConfig) -> Vec<String> {
    let mut indicators = Vec::new();
    if patterns.repetition > 50 {
        indicators.push(format!(
            "repeated sentence openings and templated phrasing (score {})",
            patterns.repetition
        ));
    }
    if patterns.structure > 50 {
        indicators.push(format!(
            "unusually uniform sentence structure (score {})",
            patterns.structure
        ));
    }
    if patterns.vocabulary > 50 {
        indicators.push(format!(
            "low vocabulary diversity (score {})",
            patterns.vocabulary
        ));
    }
    if patterns.transitions > 50 {
        indicators.push(format!(
            "dense transition-word usage (score {})",
            patterns.transitions
        ));
    }
    if ai_percentage > cfg.artificial_indicator_threshold {
        indicators.push("very artificial, templated writing style overall".to_string());
    }
    indicators
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPETITIVE_TEXT: &str = "Il est important de noter la méthode employée. \
        Il est important de noter les résultats obtenus. \
        Il est important de noter les limites identifiées. \
        Il est important de noter la portée des conclusions. \
        Il est important de noter les perspectives futures.";

    const NATURAL_TEXT: &str = "Le littoral aquitain recule en moyenne de deux mètres par an. \
        Nos relevés, effectués sur trois hivers, nuancent pourtant ce chiffre global. \
        Certaines plages engraissent. D'autres, au contraire, perdent jusqu'à six mètres \
        lors d'une seule tempête décennale, ce qui complique toute moyenne annuelle. \
        La suite du chapitre détaille le protocole de mesure retenu.";

    #[test]
    fn scores_always_bounded() {
        let cfg = DetectConfig::default();
        for text in ["", "Un mot.", REPETITIVE_TEXT, NATURAL_TEXT] {
            let res = analyze(text, &cfg).unwrap();
            assert!(res.ai_percentage <= 100);
            assert!(res.patterns.repetition <= 100);
            assert!(res.patterns.structure <= 100);
            assert!(res.patterns.vocabulary <= 100);
            assert!(res.patterns.transitions <= 100);
        }
    }

    #[test]
    fn repetitive_openings_push_score_over_fifteen() {
        // Five near-duplicate openings, other signals left to themselves:
        // the repetition signal alone must carry the final score past 15
        // under default weights.
        let res = analyze(REPETITIVE_TEXT, &DetectConfig::default()).unwrap();
        assert!(
            res.patterns.repetition > 50,
            "repetition sub-score {} should exceed 50",
            res.patterns.repetition
        );
        assert!(
            res.ai_percentage > 15,
            "final score {} should exceed 15",
            res.ai_percentage
        );
    }

    #[test]
    fn natural_text_scores_lower_than_repetitive_text() {
        let cfg = DetectConfig::default();
        let natural = analyze(NATURAL_TEXT, &cfg).unwrap();
        let repetitive = analyze(REPETITIVE_TEXT, &cfg).unwrap();
        assert!(natural.ai_percentage < repetitive.ai_percentage);
    }

    #[test]
    fn deterministic_across_runs() {
        let cfg = DetectConfig::default();
        let first = analyze(REPETITIVE_TEXT, &cfg).unwrap();
        let second = analyze(REPETITIVE_TEXT, &cfg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_text_is_a_valid_low_score_result() {
        let res = analyze("", &DetectConfig::default()).unwrap();
        assert_eq!(res.ai_percentage, 0);
        assert_eq!(res.ai_type, AiStyle::Unknown);
        assert_eq!(res.confidence, Confidence::Low);
        assert!(res.indicators.is_empty());
    }

    #[test]
    fn short_text_pins_confidence_low() {
        let res = analyze("Il est important de noter. Il est important de noter.",
            &DetectConfig::default())
        .unwrap();
        assert_eq!(res.confidence, Confidence::Low);
    }

    #[test]
    fn progress_events_cover_all_stages_monotonically() {
        let mut events: Vec<ProgressEvent> = Vec::new();
        let result =
            analyze_with_progress(NATURAL_TEXT, &DetectConfig::default(), &mut events).unwrap();

        assert_eq!(events.len(), 6);
        assert_eq!(events.first().unwrap().stage, DetectionStage::Preparation);
        assert_eq!(events.last().unwrap().stage, DetectionStage::Finalization);
        assert_eq!(events.last().unwrap().progress, 100);
        for pair in events.windows(2) {
            assert!(pair[0].progress < pair[1].progress);
        }
        // Progress reporting never changes the result.
        assert_eq!(result, analyze(NATURAL_TEXT, &DetectConfig::default()).unwrap());
    }

    #[test]
    fn indicators_name_the_firing_signals() {
        let res = analyze(REPETITIVE_TEXT, &DetectConfig::default()).unwrap();
        assert!(res
            .indicators
            .iter()
            .any(|i| i.contains("repeated sentence openings")));
    }

    #[test]
    fn artificial_indicator_fires_above_threshold() {
        let cfg = DetectConfig {
            artificial_indicator_threshold: 10,
            ..Default::default()
        };
        let res = analyze(REPETITIVE_TEXT, &cfg).unwrap();
        assert!(res
            .indicators
            .iter()
            .any(|i| i.contains("very artificial")));
    }

    #[test]
    fn invalid_config_is_the_only_error() {
        let cfg = DetectConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            analyze("text", &cfg),
            Err(DetectError::InvalidConfig(_))
        ));
    }

    #[test]
    fn result_serializes_for_the_upload_handler() {
        let res = analyze(REPETITIVE_TEXT, &DetectConfig::default()).unwrap();
        let json = serde_json::to_string(&res).unwrap();
        let back: AiDetectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(res, back);
    }
}
