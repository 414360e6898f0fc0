//! Investor newsletter and printable dossier for VC Brief.
//!
//! The newsletter is built from a fixed data snapshot in three steps:
//! [`compose`] lays it out on US-Letter pages, [`render_pdf`] draws the
//! layout with `printpdf`, and [`NewsletterExport`] runs both on a worker
//! thread so the UI never blocks. [`compose_dossier`] lays out dossier
//! panels on the same pages for printing.

pub mod dossier;
pub mod error;
pub mod export;
pub mod layout;
pub mod palette;
pub mod pdf;
pub mod snapshot;
pub mod text;

pub use dossier::{DOSSIER_FILE_NAME, compose_dossier, render_dossier};
pub use error::{ReportError, Result};
pub use export::{ExportPhase, NEWSLETTER_FILE_NAME, NewsletterExport, Renderer, write_pdf};
pub use layout::{DocumentLayout, compose};
pub use pdf::render_pdf;
pub use snapshot::{NewsletterSnapshot, snapshot};
pub use text::render_text;

/// Composes and renders the embedded snapshot.
pub fn render_newsletter() -> Result<Vec<u8>> {
    let snapshot = snapshot()?;
    render_pdf(&compose(snapshot))
}
