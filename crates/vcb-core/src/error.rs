//! Error types for the UI state machines.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::tabs::TabContainer`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    /// The requested tab is not in the declared set.
    #[error("Tab '{id}' is not declared")]
    Undeclared { id: String },
}

/// Errors raised by session flag storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionStoreError {
    #[error("Failed to {operation} session file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
