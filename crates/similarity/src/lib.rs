//! Corpus similarity scoring for thesis screening.
//!
//! Compares a candidate submission against a snapshot of previously accepted
//! documents and reports one percentage per corpus document, plus a derived
//! risk status against the shared threshold policy.
//!
//! ## Contract
//!
//! - The scorer consumes raw extracted text and normalizes both sides with
//!   the same [`normalize::NormalizeConfig`], so the comparison is over
//!   canonical words.
//! - Scores are word k-shingle **set** Jaccard indexes scaled to [0, 100]:
//!   symmetric, bounded, robust to reordering and partial overlap, and
//!   saturating at 100 for identical canonical text.
//! - Deterministic: seeded hashing, no sampling. Same candidate + same
//!   corpus snapshot = same match list, with or without `use_parallel`.
//! - Complete: one [`SimilarityMatch`] per corpus document, sorted by
//!   percentage descending. Display truncation is the caller's concern.
//! - An empty corpus is a valid zero-match result, not an error. Only
//!   corpus *read* failures and invalid configs are [`ScoringError`]s.

mod config;
mod corpus;
mod error;
mod score;
mod scorer;
mod shingles;
mod status;

pub use crate::config::SimilarityConfig;
pub use crate::corpus::CorpusDocument;
pub use crate::error::ScoringError;
pub use crate::score::jaccard_percentage;
pub use crate::scorer::{max_similarity, SimilarityMatch, SimilarityScorer};
pub use crate::shingles::shingle_set;
pub use crate::status::{derive_status, SimilarityStatus};
