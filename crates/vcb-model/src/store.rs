//! The process-wide content store.

use std::path::Path;
use std::sync::OnceLock;

use crate::document::ContentDocument;
use crate::embedded::CONTENT_JSON;
use crate::error::{ConfigurationError, Result};
use crate::validate::validate_document;

static CONTENT: OnceLock<ContentDocument> = OnceLock::new();

/// Parses and validates a document from JSON text.
pub fn from_json_str(json: &str) -> Result<ContentDocument> {
    let doc: ContentDocument =
        serde_json::from_str(json).map_err(|source| ConfigurationError::Parse { source })?;
    validate_document(&doc)?;
    Ok(doc)
}

/// Loads an alternative document from disk through the same checks.
pub fn load_from_path(path: &Path) -> Result<ContentDocument> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = from_json_str(&json)?;
    tracing::info!(path = %path.display(), "Loaded content document");
    Ok(doc)
}

/// The embedded document, parsed and validated on first use.
///
/// Every later call returns the same `'static` reference.
pub fn content() -> Result<&'static ContentDocument> {
    if let Some(doc) = CONTENT.get() {
        return Ok(doc);
    }
    let doc = from_json_str(CONTENT_JSON)?;
    tracing::debug!(
        cases = doc.legal.cases.len(),
        states = doc.mandates.states.len(),
        competitors = doc.competition.competitors.len(),
        "Embedded content document loaded"
    );
    Ok(CONTENT.get_or_init(|| doc))
}
