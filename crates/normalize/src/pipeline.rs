use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::NormalizeConfig;
use crate::document::NormalizedDocument;
use crate::error::NormalizeError;
use crate::hash::hash_canonical_bytes;
use crate::token::Token;

/// Normalize extracted thesis text into its canonical comparison form.
pub fn normalize(
    doc_id: impl Into<String>,
    input: &str,
    cfg: &NormalizeConfig,
) -> Result<NormalizedDocument, NormalizeError> {
    if cfg.version == 0 {
        return Err(NormalizeError::InvalidConfig(
            "config version must be >= 1".into(),
        ));
    }

    let doc_id: String = doc_id.into();
    let trimmed = doc_id.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::MissingDocId);
    }
    let doc_id = if doc_id.len() == trimmed.len() {
        doc_id
    } else {
        trimmed.to_string()
    };

    // NFKC first: it can change character boundaries, so every later
    // decision must see the normalized form.
    let text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    let mut writer = CanonicalWriter::new(text.len());
    // Iterate grapheme clusters so multi-scalar sequences stay intact, then
    // feed scalars one at a time; lowercasing may expand a single scalar
    // (German ß -> ss).
    for grapheme in text.graphemes(true) {
        if cfg.lowercase {
            for ch in grapheme.to_lowercase().chars() {
                writer.push(ch, cfg);
            }
        } else {
            for ch in grapheme.chars() {
                writer.push(ch, cfg);
            }
        }
    }
    let (canonical_text, tokens) = writer.finish();

    if canonical_text.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let sha256_hex = hash_canonical_bytes(cfg.version, canonical_text.as_bytes());

    Ok(NormalizedDocument {
        doc_id,
        canonical_text,
        tokens,
        sha256_hex,
        version: cfg.version,
        config: cfg.clone(),
    })
}

/// Single-pass whitespace collapse + tokenizer.
///
/// Delimiters (whitespace, and punctuation when stripping is on) close the
/// current token; a single space is inserted lazily before the next token so
/// the canonical text never carries leading, trailing, or doubled spaces.
struct CanonicalWriter {
    text: String,
    tokens: Vec<Token>,
    pending_space: bool,
    token_start: Option<usize>,
}

impl CanonicalWriter {
    fn new(capacity_hint: usize) -> Self {
        Self {
            text: String::with_capacity(capacity_hint),
            tokens: Vec::with_capacity(capacity_hint / 5 + 1),
            pending_space: false,
            token_start: None,
        }
    }

    fn push(&mut self, ch: char, cfg: &NormalizeConfig) {
        let is_delimiter = ch.is_whitespace() || (cfg.strip_punctuation && ch.is_punctuation());
        if is_delimiter {
            self.close_token();
            if !self.text.is_empty() {
                self.pending_space = true;
            }
            return;
        }

        if self.pending_space {
            self.text.push(' ');
            self.pending_space = false;
            self.token_start = Some(self.text.len());
        } else if self.token_start.is_none() {
            self.token_start = Some(self.text.len());
        }
        self.text.push(ch);
    }

    fn close_token(&mut self) {
        if let Some(start) = self.token_start.take() {
            if start < self.text.len() {
                let end = self.text.len();
                self.tokens.push(Token {
                    text: self.text[start..end].to_string(),
                    start,
                    end,
                });
            }
        }
    }

    fn finish(mut self) -> (String, Vec<Token>) {
        self.close_token();
        (self.text, self.tokens)
    }
}
