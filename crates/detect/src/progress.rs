//! Progress reporting for the detection pipeline.
//!
//! Detection is synchronous and CPU-bound, but the UI wants stage-by-stage
//! feedback. Rather than a bespoke callback parameter, the detector emits
//! [`ProgressEvent`]s into a [`ProgressSink`] the caller supplies: a plain
//! `Vec<ProgressEvent>` collects them, and any channel or async task can
//! implement the trait. Events are observational only; dropping them never
//! changes the result.

use serde::{Deserialize, Serialize};

/// Named stages of a detection pass, in execution order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStage {
    Preparation,
    PatternAnalysis,
    StructuralAnalysis,
    LexicalAnalysis,
    TransitionAnalysis,
    Finalization,
}

impl DetectionStage {
    /// Human-readable description shown as the "current analysis" line.
    pub fn label(&self) -> &'static str {
        match self {
            DetectionStage::Preparation => "preparing text",
            DetectionStage::PatternAnalysis => "analyzing repeated patterns",
            DetectionStage::StructuralAnalysis => "analyzing sentence structure",
            DetectionStage::LexicalAnalysis => "analyzing vocabulary diversity",
            DetectionStage::TransitionAnalysis => "analyzing transition words",
            DetectionStage::Finalization => "combining signal scores",
        }
    }
}

/// One progress update. `progress` rises monotonically from 0 to 100 across
/// a detection pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressEvent {
    pub stage: DetectionStage,
    pub progress: u8,
    pub detail: String,
}

/// Receiver for progress events. Fire-and-forget: no backpressure, no
/// result flows back to the detector.
pub trait ProgressSink {
    fn emit(&mut self, event: ProgressEvent);
}

impl ProgressSink for Vec<ProgressEvent> {
    fn emit(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

/// Sink that drops every event; used by the progress-free entry point.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&mut self, _event: ProgressEvent) {}
}
