use serde::{Deserialize, Serialize};

/// A single token of canonical text with its byte span.
///
/// Offsets index into the canonical text that produced the token, so
/// downstream stages can map a token back to its place in the comparison
/// form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
