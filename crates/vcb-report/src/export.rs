//! Deferred newsletter preparation.
//!
//! Rendering runs on a background thread and reports back over an mpsc
//! channel. The UI polls once per frame and reads the phase as booleans.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::error::{ReportError, Result};

/// Fixed download name of the generated document.
pub const NEWSLETTER_FILE_NAME: &str = "4SL_Investor_Update_Dec2025.pdf";

/// Produces the finished document bytes.
pub type Renderer = Arc<dyn Fn() -> Result<Vec<u8>> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPhase {
    NotReady,
    Preparing,
    Ready(Vec<u8>),
    /// Preparation failed. The user may trigger it again.
    Failed(String),
}

impl ExportPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotReady => "not ready",
            Self::Preparing => "preparing",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

pub struct NewsletterExport {
    phase: ExportPhase,
    receiver: Option<Receiver<Result<Vec<u8>>>>,
    renderer: Renderer,
}

impl std::fmt::Debug for NewsletterExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterExport")
            .field("phase", &self.phase.label())
            .finish_non_exhaustive()
    }
}

impl Default for NewsletterExport {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsletterExport {
    /// Export of the embedded December 2025 snapshot.
    pub fn new() -> Self {
        Self::with_renderer(Arc::new(crate::render_newsletter))
    }

    pub fn with_renderer(renderer: Renderer) -> Self {
        Self {
            phase: ExportPhase::NotReady,
            receiver: None,
            renderer,
        }
    }

    pub fn phase(&self) -> &ExportPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ExportPhase::Preparing
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, ExportPhase::Ready(_))
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.phase {
            ExportPhase::Ready(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ExportPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Starts preparation. Returns `false` if it is already running.
    pub fn start(&mut self) -> bool {
        self.start_with(|| {})
    }

    /// Like [`start`](Self::start), calling `on_done` from the worker once
    /// the result has been sent, e.g. to wake the UI. A panicking renderer
    /// is reported as `Failed` and still calls `on_done`.
    pub fn start_with(&mut self, on_done: impl FnOnce() + Send + 'static) -> bool {
        if self.is_loading() {
            return false;
        }
        let (sender, receiver) = mpsc::channel();
        let renderer = Arc::clone(&self.renderer);
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(renderer.as_ref()))
                .unwrap_or_else(|_| {
                    Err(ReportError::Pdf {
                        message: "renderer panicked".to_string(),
                    })
                });
            let _ = sender.send(result);
            on_done();
        });
        self.receiver = Some(receiver);
        self.phase = ExportPhase::Preparing;
        tracing::info!("Preparing investor newsletter");
        true
    }

    /// Drains a finished result, if any. Returns `true` if the phase changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };
        match receiver.try_recv() {
            Ok(result) => {
                self.finish(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.finish(Err(ReportError::Pdf {
                    message: "renderer stopped without a result".to_string(),
                }));
                true
            }
        }
    }

    /// Blocks until the running preparation finishes or `timeout` passes.
    pub fn wait(&mut self, timeout: Duration) -> &ExportPhase {
        if let Some(receiver) = &self.receiver {
            match receiver.recv_timeout(timeout) {
                Ok(result) => self.finish(result),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => self.finish(Err(ReportError::Pdf {
                    message: "renderer stopped without a result".to_string(),
                })),
            }
        }
        &self.phase
    }

    fn finish(&mut self, result: Result<Vec<u8>>) {
        self.receiver = None;
        self.phase = match result {
            Ok(bytes) => {
                tracing::info!(bytes = bytes.len(), "Investor newsletter ready");
                ExportPhase::Ready(bytes)
            }
            Err(err) => {
                tracing::error!(error = %err, "Investor newsletter preparation failed");
                ExportPhase::Failed(err.to_string())
            }
        };
    }
}

/// Writes the document to `path`.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Saved PDF");
    Ok(())
}
