//! Embedded content data.
//!
//! The dossier document is compiled into the binary with `include_str!()`,
//! so the application never resolves a data path at runtime.

/// The investor dossier document, camelCase JSON.
pub const CONTENT_JSON: &str = include_str!("../data/content.json");
