use similarity::{CorpusDocument, ScoringError};

/// Supplier of the comparison corpus snapshot.
///
/// The gate calls [`snapshot`](CorpusSource::snapshot) at most once per
/// screening, and only after AI detection has declined to block, so a
/// short-circuited screening never touches the corpus store. Implementations
/// should return the accepted documents as of a single point in time; a
/// half-updated view would let concurrent submissions score against moving
/// ground.
pub trait CorpusSource {
    fn snapshot(&self) -> Result<Vec<CorpusDocument>, ScoringError>;
}

/// Corpus already resident in memory; the common case for tests and for
/// callers that fetch the snapshot themselves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    docs: Vec<CorpusDocument>,
}

impl InMemoryCorpus {
    pub fn new(docs: Vec<CorpusDocument>) -> Self {
        Self { docs }
    }
}

impl CorpusSource for InMemoryCorpus {
    fn snapshot(&self) -> Result<Vec<CorpusDocument>, ScoringError> {
        Ok(self.docs.clone())
    }
}
