//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod app_state;
mod newsletter;

pub use app_state::{AppState, EscapeOutcome, SearchPanel, SearchState, Splash};
pub use newsletter::{NewsletterState, SaveOutcome};
