//! Submission gate for thesis screening.
//!
//! The gate is the decision layer above the two scorers: it runs AI
//! detection, applies the shared threshold policy, short-circuits when the
//! AI score alone blocks the submission, otherwise scores similarity against
//! a corpus snapshot and classifies the maximum match. The result is a
//! single composite [`Verdict`] the upload handler can serialize as-is.
//!
//! ## Contract
//!
//! - The threshold pair is read once per screening; both classifications of
//!   a submission see the same pair.
//! - The corpus is consulted at most once, and never when AI detection
//!   already blocked, which a corpus source that panics on use can verify.
//! - Component errors propagate unchanged through [`GateError`]; a blocked
//!   verdict is a successful screening, an error is not a verdict.

mod corpus;
mod engine;
mod error;
mod observer;
mod types;

pub use crate::corpus::{CorpusSource, InMemoryCorpus};
pub use crate::engine::Gate;
pub use crate::error::GateError;
pub use crate::observer::GateObserver;
pub use crate::types::{BlockingReason, SimilarityReport, Verdict};
