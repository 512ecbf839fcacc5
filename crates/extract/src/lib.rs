//! Text extraction for thesis submissions.
//!
//! This is where a submission enters the screening pipeline: raw PDF bytes
//! in, page-ordered plain text out. Both scorers work on the concatenated
//! text, so extraction failures have to be loud: an unparseable file or a
//! PDF with no extractable text is an [`ExtractionError`], never an empty
//! success. An empty document would score 0% on both scorers and pass every
//! check vacuously.
//!
//! ## What we do
//!
//! - **Enforce size limits** before parsing, so oversized uploads never
//!   reach the PDF parser
//! - **Extract text** per page, preserving page order
//! - **Normalize page breaks** to single newlines and strip control
//!   characters the parsers leak through
//! - **Log everything** with structured tracing events for production
//!   debugging
//!
//! Parsing state is scoped to the call: the parser allocates, runs, and is
//! dropped before we return, on success and failure alike.

use std::time::Instant;

use tracing::{info, warn};

mod config;
mod document;
mod error;

pub use crate::config::ExtractConfig;
pub use crate::document::ExtractedDocument;
pub use crate::error::ExtractionError;

/// Extract page-ordered plain text from a PDF byte stream.
pub fn extract_pdf(bytes: &[u8], cfg: &ExtractConfig) -> Result<ExtractedDocument, ExtractionError> {
    let start = Instant::now();
    let span = tracing::info_span!("extract.pdf", payload_len = bytes.len());
    let _guard = span.enter();

    let result = extract_pdf_inner(bytes, cfg);
    let elapsed_micros = start.elapsed().as_micros();
    match &result {
        Ok(doc) => info!(
            pages = doc.pages.len(),
            chars = doc.text.chars().count(),
            elapsed_micros,
            "extract_success"
        ),
        Err(err) => warn!(error = %err, elapsed_micros, "extract_failure"),
    }
    result
}

fn extract_pdf_inner(
    bytes: &[u8],
    cfg: &ExtractConfig,
) -> Result<ExtractedDocument, ExtractionError> {
    cfg.validate()?;

    if let Some(limit) = cfg.max_payload_bytes {
        if bytes.len() > limit {
            return Err(ExtractionError::PayloadTooLarge(format!(
                "payload size {} exceeds limit of {limit}",
                bytes.len()
            )));
        }
    }

    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Parse(e.to_string()))?;

    build_document(&raw, cfg)
}

/// Build a document from text the upload layer already decoded.
///
/// Applies the same page-break normalization, control-character stripping,
/// and emptiness rules as [`extract_pdf`], without touching the PDF parser.
pub fn extract_text(text: &str, cfg: &ExtractConfig) -> Result<ExtractedDocument, ExtractionError> {
    cfg.validate()?;
    if let Some(limit) = cfg.max_payload_bytes {
        if text.len() > limit {
            return Err(ExtractionError::PayloadTooLarge(format!(
                "payload size {} exceeds limit of {limit}",
                text.len()
            )));
        }
    }
    build_document(text, cfg)
}

fn build_document(raw: &str, cfg: &ExtractConfig) -> Result<ExtractedDocument, ExtractionError> {
    // pdf-extract separates pages with form feeds; plain-text callers may
    // not have any, in which case the whole input is a single page.
    let pages: Vec<String> = raw
        .split('\u{c}')
        .map(|page| clean_page(page, cfg))
        .filter(|page| !page.is_empty())
        .collect();

    if pages.is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }

    let text = pages.join("\n");
    Ok(ExtractedDocument { pages, text })
}

/// Strip control characters and collapse line structure within one page.
/// Line breaks survive as single newlines; everything else that is a
/// control character goes away.
fn clean_page(page: &str, cfg: &ExtractConfig) -> String {
    let mut out = String::with_capacity(page.len());
    let mut pending_break = false;
    for ch in page.chars() {
        if ch == '\n' || ch == '\r' {
            pending_break = true;
            continue;
        }
        if cfg.strip_control_chars && ch.is_control() {
            continue;
        }
        if pending_break {
            if !out.is_empty() {
                out.push('\n');
            }
            pending_break = false;
        }
        out.push(ch);
    }
    out.trim().to_string()
}
