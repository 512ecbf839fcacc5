use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Configuration for text extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Semantic version of the extraction behavior. Must be >= 1.
    pub version: u32,
    /// Reject payloads larger than this before parsing. `None` disables the
    /// limit; the default matches what the upload layer accepts.
    pub max_payload_bytes: Option<usize>,
    /// Drop control characters the PDF parser leaks into extracted text.
    pub strip_control_chars: bool,
}

impl ExtractConfig {
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.version == 0 {
            return Err(ExtractionError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_payload_bytes: Some(25 * 1024 * 1024),
            strip_control_chars: true,
        }
    }
}
