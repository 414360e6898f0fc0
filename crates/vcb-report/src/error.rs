//! Error types for newsletter generation.

use std::path::PathBuf;
use thiserror::Error;
use vcb_model::ConfigurationError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The embedded snapshot failed to load.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The PDF backend rejected the document.
    #[error("Failed to render PDF: {message}")]
    Pdf { message: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn pdf(err: impl std::fmt::Display) -> Self {
        Self::Pdf {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
