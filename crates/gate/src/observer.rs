use std::sync::Arc;
use std::time::{Duration, Instant};

use detect::DetectError;
use extract::ExtractionError;
use similarity::ScoringError;

/// Stage-level observer for screening runs.
///
/// Purely observational: latencies and outcomes flow out, nothing flows
/// back. Installed per gate instance, never global.
pub trait GateObserver: Send + Sync {
    fn record_extraction(&self, latency: Duration, outcome: Result<(), ExtractionError>);
    fn record_detection(&self, latency: Duration, outcome: Result<(), DetectError>);
    fn record_similarity(&self, latency: Duration, outcome: Result<(), ScoringError>);
    fn record_verdict(&self, allowed: bool);
}

/// Started timer bound to an observer; records exactly once.
pub(crate) struct ObserverSpan {
    observer: Arc<dyn GateObserver>,
    start: Instant,
}

impl ObserverSpan {
    pub(crate) fn start(observer: Option<&Arc<dyn GateObserver>>) -> Option<Self> {
        observer.map(|observer| Self {
            observer: Arc::clone(observer),
            start: Instant::now(),
        })
    }

    pub(crate) fn record_extraction(self, outcome: Result<(), ExtractionError>) {
        self.observer
            .record_extraction(self.start.elapsed(), outcome);
    }

    pub(crate) fn record_detection(self, outcome: Result<(), DetectError>) {
        self.observer.record_detection(self.start.elapsed(), outcome);
    }

    pub(crate) fn record_similarity(self, outcome: Result<(), ScoringError>) {
        self.observer
            .record_similarity(self.start.elapsed(), outcome);
    }
}
