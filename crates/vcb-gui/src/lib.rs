//! VC Brief desktop application.
//!
//! State lives in [`state`] and is driven without a window in the tests;
//! [`views`] only reads it and reports what the user asked for.

pub mod app;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;

pub use app::VcBriefApp;
