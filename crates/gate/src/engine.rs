use std::sync::Arc;

use tracing::info;

use detect::{analyze_with_progress, DetectConfig, NullSink, ProgressSink};
use extract::{extract_pdf, ExtractConfig};
use normalize::NormalizeConfig;
use policy::{classify, RiskLevel, ThresholdStore, Thresholds};
use similarity::{derive_status, max_similarity, SimilarityConfig, SimilarityScorer};

use crate::corpus::CorpusSource;
use crate::error::GateError;
use crate::observer::{GateObserver, ObserverSpan};
use crate::types::{BlockingReason, SimilarityReport, Verdict};

/// The submission gate: runs AI detection, then similarity scoring, and
/// folds both into one accept/block decision.
///
/// The gate holds per-stage configurations and a shared handle to the
/// threshold store; each screening reads the threshold pair exactly once, so
/// the AI and similarity classifications of a single submission always use
/// the same pair even while an admin update lands concurrently.
///
/// Screening is a pure decision function over `(input, corpus snapshot,
/// thresholds)`: the gate performs no I/O of its own beyond what the stages
/// require, and independent screenings can run in parallel on one instance.
pub struct Gate {
    extract_cfg: ExtractConfig,
    normalize_cfg: NormalizeConfig,
    similarity_cfg: SimilarityConfig,
    detect_cfg: DetectConfig,
    thresholds: Arc<ThresholdStore>,
    observer: Option<Arc<dyn GateObserver>>,
}

impl Gate {
    /// Gate with default stage configurations.
    pub fn new(thresholds: Arc<ThresholdStore>) -> Self {
        Self::with_configs(
            ExtractConfig::default(),
            NormalizeConfig::default(),
            SimilarityConfig::default(),
            DetectConfig::default(),
            thresholds,
        )
    }

    /// Gate with explicit stage configurations.
    pub fn with_configs(
        extract_cfg: ExtractConfig,
        normalize_cfg: NormalizeConfig,
        similarity_cfg: SimilarityConfig,
        detect_cfg: DetectConfig,
        thresholds: Arc<ThresholdStore>,
    ) -> Self {
        Self {
            extract_cfg,
            normalize_cfg,
            similarity_cfg,
            detect_cfg,
            thresholds,
            observer: None,
        }
    }

    /// Install a stage observer.
    pub fn with_observer(mut self, observer: Arc<dyn GateObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Screen a PDF submission end to end.
    pub fn screen_pdf(&self, bytes: &[u8], corpus: &dyn CorpusSource) -> Result<Verdict, GateError> {
        let span = ObserverSpan::start(self.observer.as_ref());
        let doc = match extract_pdf(bytes, &self.extract_cfg) {
            Ok(doc) => {
                if let Some(span) = span {
                    span.record_extraction(Ok(()));
                }
                doc
            }
            Err(err) => {
                if let Some(span) = span {
                    span.record_extraction(Err(err.clone()));
                }
                return Err(err.into());
            }
        };
        self.screen_inner(&doc.text, corpus, &mut NullSink)
    }

    /// Screen text the upload layer already extracted.
    pub fn screen_text(&self, text: &str, corpus: &dyn CorpusSource) -> Result<Verdict, GateError> {
        self.screen_inner(text, corpus, &mut NullSink)
    }

    /// Screen extracted text, forwarding detection progress events to `sink`.
    pub fn screen_text_with_progress(
        &self,
        text: &str,
        corpus: &dyn CorpusSource,
        sink: &mut dyn ProgressSink,
    ) -> Result<Verdict, GateError> {
        self.screen_inner(text, corpus, sink)
    }

    fn screen_inner(
        &self,
        text: &str,
        corpus: &dyn CorpusSource,
        sink: &mut dyn ProgressSink,
    ) -> Result<Verdict, GateError> {
        // One read for the whole screening: both classifications must see
        // the same pair.
        let thresholds = self.thresholds.get();

        let span = ObserverSpan::start(self.observer.as_ref());
        let ai = match analyze_with_progress(text, &self.detect_cfg, sink) {
            Ok(result) => {
                if let Some(span) = span {
                    span.record_detection(Ok(()));
                }
                result
            }
            Err(err) => {
                if let Some(span) = span {
                    span.record_detection(Err(err.clone()));
                }
                return Err(err.into());
            }
        };

        let ai_level = classify(ai.ai_percentage as f64, &thresholds);
        if ai_level == RiskLevel::Danger {
            // Blocking on AI alone: the corpus is never consulted.
            let verdict = Verdict {
                allowed: false,
                blocking_reasons: vec![BlockingReason::ArtificialText {
                    percentage: ai.ai_percentage,
                    threshold: thresholds.danger,
                }],
                ai,
                similarity: None,
            };
            self.finish(&verdict, &thresholds);
            return Ok(verdict);
        }

        let span = ObserverSpan::start(self.observer.as_ref());
        let report = match self.run_similarity(text, corpus, &thresholds) {
            Ok(report) => {
                if let Some(span) = span {
                    span.record_similarity(Ok(()));
                }
                report
            }
            Err(err) => {
                if let Some(span) = span {
                    span.record_similarity(Err(err.clone()));
                }
                return Err(err.into());
            }
        };

        let blocking_reasons = if report.status.level == RiskLevel::Danger {
            vec![BlockingReason::ExcessiveSimilarity {
                percentage: report.status.percentage,
                threshold: thresholds.danger,
            }]
        } else {
            Vec::new()
        };

        let verdict = Verdict {
            allowed: blocking_reasons.is_empty(),
            ai,
            similarity: Some(report),
            blocking_reasons,
        };
        self.finish(&verdict, &thresholds);
        Ok(verdict)
    }

    fn run_similarity(
        &self,
        text: &str,
        corpus: &dyn CorpusSource,
        thresholds: &Thresholds,
    ) -> Result<SimilarityReport, similarity::ScoringError> {
        // Snapshot once, up front: scoring must not observe corpus updates
        // that land mid-screening.
        let snapshot = corpus.snapshot()?;
        let scorer = SimilarityScorer::new(self.similarity_cfg.clone(), self.normalize_cfg.clone());
        let matches = scorer.score(text, &snapshot)?;
        let status = derive_status(&matches, thresholds);
        Ok(SimilarityReport { matches, status })
    }

    fn finish(&self, verdict: &Verdict, thresholds: &Thresholds) {
        if let Some(observer) = &self.observer {
            observer.record_verdict(verdict.allowed);
        }
        info!(
            allowed = verdict.allowed,
            ai_percentage = verdict.ai.ai_percentage,
            max_similarity = verdict
                .similarity
                .as_ref()
                .map(|r| max_similarity(&r.matches)),
            danger_threshold = thresholds.danger,
            "screening_verdict"
        );
    }
}
