//! Threshold policy for thesis screening.
//!
//! Both scorers (similarity and AI detection) classify their percentage
//! output against the same pair of cut points: a warning threshold and a
//! danger threshold. This crate owns that pair, the classification rule, and
//! the shared store that serves it to concurrent screening calls.
//!
//! ## Contract
//!
//! - `warning < danger`, both in [0, 100]. Updates violating this are
//!   rejected with [`ConfigError`] and leave the previous pair in effect.
//! - Readers always observe a consistent pair: [`ThresholdStore::get`]
//!   returns both values from a single lock acquisition, never a torn read.
//! - Classification uses half-open intervals: danger iff `pct >= danger`,
//!   warning iff `warning <= pct < danger`, success otherwise.

mod error;
mod store;
mod thresholds;

pub use crate::error::ConfigError;
pub use crate::store::ThresholdStore;
pub use crate::thresholds::{classify, RiskLevel, Thresholds};
