//! Newsletter window state

use std::path::{Path, PathBuf};

use vcb_report::NewsletterExport;

/// The investor update window and its background export.
#[derive(Debug, Default)]
pub struct NewsletterState {
    pub open: bool,
    pub export: NewsletterExport,
    /// Cached text rendition shown in the window.
    pub preview: Option<String>,
    /// Outcome of the last save, shown under the download button.
    pub last_save: Option<SaveOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Failed(String),
}

impl NewsletterState {
    pub fn with_export(export: NewsletterExport) -> Self {
        Self {
            export,
            ..Self::default()
        }
    }

    /// Opens the window. Returns `true` if preparation should be started.
    pub fn open(&mut self) -> bool {
        self.open = true;
        !self.export.is_loading() && !self.export.is_ready()
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn record_save(&mut self, outcome: SaveOutcome) {
        match &outcome {
            SaveOutcome::Saved(path) => tracing::info!(path = %path.display(), "Newsletter saved"),
            SaveOutcome::Failed(message) => tracing::error!(%message, "Newsletter save failed"),
        }
        self.last_save = Some(outcome);
    }

    pub fn saved_directory(&self) -> Option<&Path> {
        match &self.last_save {
            Some(SaveOutcome::Saved(path)) => path.parent(),
            _ => None,
        }
    }
}
