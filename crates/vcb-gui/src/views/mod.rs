//! UI views

pub mod dialogs;
pub mod header;
pub mod newsletter;
pub mod panels;
pub mod splash;
pub mod widgets;

pub use dialogs::{case_dialog, competitor_dialog};
pub use header::{HeaderActions, footer, header};
pub use newsletter::{NewsletterAction, newsletter_window};
pub use splash::{Starfield, splash_overlay};
