use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One previously accepted document in the comparison corpus.
///
/// The scorer receives the corpus as an explicit snapshot captured once per
/// screening call; it never reaches out for fresher data mid-scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusDocument {
    pub id: String,
    pub title: String,
    pub author: String,
    pub submitted_at: DateTime<Utc>,
    /// Extracted text of the archived document.
    pub text: String,
}
