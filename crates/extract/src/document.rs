use serde::{Deserialize, Serialize};

/// Extracted thesis text, immutable once produced.
///
/// `pages` preserves the document's page order; `text` is the concatenated
/// analysis form with page breaks normalized to single newlines. The
/// emptiness invariant is enforced at construction: an `ExtractedDocument`
/// always carries at least one non-empty page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Per-page text, blank pages removed, order preserved.
    pub pages: Vec<String>,
    /// All pages joined with single newlines.
    pub text: String,
}

impl ExtractedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
