//! Umbrella crate for the thesis screening core.
//!
//! This crate stitches the screening stages (PDF text extraction,
//! normalization, AI-authorship detection, corpus similarity scoring, and
//! the submission gate) behind a single API entry point, and bundles their
//! configurations into one loadable [`PipelineConfig`].
//!
//! The core is a library: transports, persistence, and UI belong to the
//! calling application. It consumes raw submission bytes (or already
//! extracted text) plus an explicit corpus snapshot, and emits plain
//! serializable verdicts.

mod config;

pub use crate::config::{ConfigLoadError, PipelineConfig};

pub use detect::{
    analyze, analyze_with_progress, AiDetectionResult, AiStyle, Confidence, DetectConfig,
    DetectError, DetectionStage, PatternScores, ProgressEvent, ProgressSink, SignalWeights,
};
pub use extract::{extract_pdf, extract_text, ExtractConfig, ExtractedDocument, ExtractionError};
pub use gate::{
    BlockingReason, CorpusSource, Gate, GateError, GateObserver, InMemoryCorpus, SimilarityReport,
    Verdict,
};
pub use normalize::{hash_text, normalize, NormalizeConfig, NormalizeError, NormalizedDocument};
pub use policy::{classify, ConfigError, RiskLevel, ThresholdStore, Thresholds};
pub use similarity::{
    derive_status, max_similarity, CorpusDocument, ScoringError, SimilarityConfig, SimilarityMatch,
    SimilarityScorer, SimilarityStatus,
};

use std::sync::Arc;

/// End-to-end screening pipeline with a shared threshold store.
///
/// Construction validates every stage configuration, so a pipeline that
/// exists can screen. One instance serves concurrent submissions; the only
/// shared mutable state is the threshold store, which admin updates swap
/// atomically.
pub struct ScreeningPipeline {
    gate: Gate,
    thresholds: Arc<ThresholdStore>,
}

impl ScreeningPipeline {
    /// Build a pipeline from a bundled configuration.
    pub fn new(cfg: PipelineConfig) -> Result<Self, ConfigLoadError> {
        cfg.validate()?;
        let thresholds = Arc::new(
            ThresholdStore::new(cfg.thresholds)
                .map_err(|e| ConfigLoadError::Validation(e.to_string()))?,
        );
        let gate = Gate::with_configs(
            cfg.extract,
            cfg.normalize,
            cfg.similarity,
            cfg.detect,
            Arc::clone(&thresholds),
        );
        Ok(Self { gate, thresholds })
    }

    /// Pipeline with all-default stage configurations.
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default()).expect("default configuration is valid")
    }

    /// Install a stage observer on the underlying gate.
    pub fn with_observer(mut self, observer: Arc<dyn GateObserver>) -> Self {
        self.gate = self.gate.with_observer(observer);
        self
    }

    /// Screen a PDF submission against a corpus snapshot.
    pub fn screen_pdf(&self, bytes: &[u8], corpus: &dyn CorpusSource) -> Result<Verdict, GateError> {
        self.gate.screen_pdf(bytes, corpus)
    }

    /// Screen already-extracted text against a corpus snapshot.
    pub fn screen_text(&self, text: &str, corpus: &dyn CorpusSource) -> Result<Verdict, GateError> {
        self.gate.screen_text(text, corpus)
    }

    /// Screen extracted text, forwarding detection progress events.
    pub fn screen_text_with_progress(
        &self,
        text: &str,
        corpus: &dyn CorpusSource,
        sink: &mut dyn ProgressSink,
    ) -> Result<Verdict, GateError> {
        self.gate.screen_text_with_progress(text, corpus, sink)
    }

    /// Current threshold pair, read atomically. Backs the admin read
    /// endpoint.
    pub fn current_thresholds(&self) -> Thresholds {
        self.thresholds.get()
    }

    /// Replace the threshold pair. Backs the admin update endpoint; invalid
    /// pairs are rejected and the previous pair stays in force.
    pub fn update_thresholds(&self, thresholds: Thresholds) -> Result<(), ConfigError> {
        self.thresholds.update(thresholds)
    }

    /// Shared handle to the threshold store, for callers that wire it into
    /// other components.
    pub fn threshold_store(&self) -> Arc<ThresholdStore> {
        Arc::clone(&self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_constructs() {
        let pipeline = ScreeningPipeline::with_defaults();
        assert_eq!(pipeline.current_thresholds(), Thresholds::default());
    }

    #[test]
    fn invalid_bundle_rejected_at_construction() {
        let cfg = PipelineConfig {
            thresholds: Thresholds {
                warning: 90.0,
                danger: 10.0,
            },
            ..Default::default()
        };
        assert!(matches!(
            ScreeningPipeline::new(cfg),
            Err(ConfigLoadError::Validation(_))
        ));
    }

    #[test]
    fn threshold_updates_visible_through_the_pipeline() {
        let pipeline = ScreeningPipeline::with_defaults();
        pipeline
            .update_thresholds(Thresholds {
                warning: 20.0,
                danger: 50.0,
            })
            .unwrap();
        assert_eq!(pipeline.current_thresholds().danger, 50.0);
    }

    #[test]
    fn rejected_update_keeps_previous_pair() {
        let pipeline = ScreeningPipeline::with_defaults();
        let before = pipeline.current_thresholds();
        assert!(pipeline
            .update_thresholds(Thresholds {
                warning: 80.0,
                danger: 50.0,
            })
            .is_err());
        assert_eq!(pipeline.current_thresholds(), before);
    }
}
