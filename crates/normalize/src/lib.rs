//! Text normalization for thesis comparison.
//!
//! Similarity scoring only makes sense over a canonical form of the text:
//! two submissions that differ in casing, punctuation, or whitespace should
//! compare as the same words. This crate turns extracted thesis text into
//! that form deterministically.
//!
//! ## What we do
//!
//! - Unicode NFKC normalization (configurable)
//! - Locale-free lowercasing
//! - Punctuation stripping (on by default; comparison is bag-of-words)
//! - Whitespace collapsing to single spaces
//! - Tokenization with byte offsets
//! - A versioned SHA-256 identity hash of the canonical text
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale dependence. Same text + same config = same
//! output on any machine, forever. Any behavior change must bump
//! [`NormalizeConfig::version`], which is folded into the identity hash.

mod config;
mod document;
mod error;
mod hash;
mod pipeline;
mod token;

pub use crate::config::NormalizeConfig;
pub use crate::document::NormalizedDocument;
pub use crate::error::NormalizeError;
pub use crate::hash::{hash_canonical_bytes, hash_text};
pub use crate::pipeline::normalize;
pub use crate::token::Token;
