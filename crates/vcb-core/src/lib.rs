//! Presentation-independent state for VC Brief.
//!
//! Everything here is synchronous and free of UI types so the desktop app,
//! the CLI and the tests drive the same logic.
//!
//! - [`tabs`]: active-panel state with declared tab sets
//! - [`dossier`]: the dossier's ten panels in display order
//! - [`search`]: case-insensitive substring filtering
//! - [`dialog`]: single-record detail dialog state
//! - [`splash`]: the one-per-session intro sequence
//! - [`format`]: currency, number and percentage rendering
//! - [`chart`]: mini bar chart geometry

pub mod chart;
pub mod dialog;
pub mod dossier;
pub mod error;
pub mod format;
pub mod search;
pub mod splash;
pub mod tabs;

pub use chart::{BarChartGeometry, BarRect, ChartPadding};
pub use dialog::DetailDialog;
pub use dossier::{DossierTab, dossier_tabs};
pub use error::{SessionStoreError, TabError};
pub use format::{
    format_currency, format_currency_compact, format_number, format_percentage,
    format_signed_percentage,
};
pub use search::{SearchQuery, filter, filter_records};
pub use splash::{
    ExitTrigger, INTRO_SEEN_KEY, MemorySessionStore, SessionStore, SplashController,
    SplashOptions, SplashPhase,
};
pub use tabs::{TabContainer, TabSpec};
