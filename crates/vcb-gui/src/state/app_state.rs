//! Application-level state

use std::path::PathBuf;
use std::time::Instant;

use vcb_core::{
    DetailDialog, DossierTab, ExitTrigger, SessionStore, SplashController, TabContainer,
    dossier_tabs,
};
use vcb_model::{Competitor, ConfigurationError, ContentDocument, LegalCase};

use super::{NewsletterState, SaveOutcome};
use crate::settings::Settings;

/// Panels that host a search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPanel {
    Mandates,
    Cases,
    Competitors,
}

/// Raw search box text per panel, kept while switching tabs.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    mandates: String,
    cases: String,
    competitors: String,
}

impl SearchState {
    pub fn text(&self, panel: SearchPanel) -> &str {
        match panel {
            SearchPanel::Mandates => &self.mandates,
            SearchPanel::Cases => &self.cases,
            SearchPanel::Competitors => &self.competitors,
        }
    }

    pub fn text_mut(&mut self, panel: SearchPanel) -> &mut String {
        match panel {
            SearchPanel::Mandates => &mut self.mandates,
            SearchPanel::Cases => &mut self.cases,
            SearchPanel::Competitors => &mut self.competitors,
        }
    }
}

/// What an Escape press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    SkippedIntro,
    ClosedDialog,
    ClosedNewsletter,
    Ignored,
}

pub type Splash = SplashController<Box<dyn SessionStore>>;

/// Top-level application state
pub struct AppState {
    pub content: &'static ContentDocument,
    pub settings: Settings,
    pub tabs: TabContainer<DossierTab>,
    pub search: SearchState,
    /// Keyed by case id.
    pub case_dialog: DetailDialog<String>,
    /// Keyed by competitor name.
    pub competitor_dialog: DetailDialog<String>,
    pub newsletter: NewsletterState,
    /// Outcome of the last "Print / PDF", shown in the header.
    pub last_print: Option<SaveOutcome>,
    pub splash: Splash,
}

impl AppState {
    pub fn new(
        content: &'static ContentDocument,
        settings: Settings,
        session: Box<dyn SessionStore>,
        now: Instant,
    ) -> Result<Self, ConfigurationError> {
        let splash = SplashController::start(session, settings.splash_options(), now);
        Ok(Self {
            content,
            tabs: dossier_tabs()?,
            search: SearchState::default(),
            case_dialog: DetailDialog::default(),
            competitor_dialog: DetailDialog::default(),
            newsletter: NewsletterState::default(),
            last_print: None,
            splash,
            settings,
        })
    }

    /// Switches panel. Dialogs belong to their panel and close with it.
    pub fn select_tab(&mut self, tab: DossierTab) {
        match self.tabs.select(tab) {
            Ok(true) => {
                tracing::debug!(tab = tab.id(), "Tab selected");
                self.close_dialogs();
            }
            Ok(false) => {}
            Err(err) => tracing::warn!(error = %err, "Tab selection rejected"),
        }
    }

    /// Arrow-key navigation. Ignored while typing or while the intro covers the app.
    pub fn cycle_tab(&mut self, forward: bool, text_has_focus: bool) -> Option<DossierTab> {
        if text_has_focus || self.splash.is_visible() {
            return None;
        }
        let tab = if forward {
            self.tabs.select_next()
        } else {
            self.tabs.select_previous()
        };
        tracing::debug!(tab = tab.id(), "Tab selected from keyboard");
        self.close_dialogs();
        Some(tab)
    }

    /// The intro takes Escape first. While its reveal still covers the
    /// window, nothing underneath reacts.
    pub fn handle_escape(&mut self, now: Instant) -> EscapeOutcome {
        if self.splash.trigger_exit(ExitTrigger::Escape, now) {
            return EscapeOutcome::SkippedIntro;
        }
        if self.splash.is_visible() {
            return EscapeOutcome::Ignored;
        }
        if self.case_dialog.is_open() || self.competitor_dialog.is_open() {
            self.close_dialogs();
            return EscapeOutcome::ClosedDialog;
        }
        if self.newsletter.open {
            self.newsletter.close();
            return EscapeOutcome::ClosedNewsletter;
        }
        EscapeOutcome::Ignored
    }

    /// Prints the active tab to `path`. Returns `true` when written.
    pub fn print_active_tab(&mut self, path: PathBuf) -> bool {
        let tab = self.tabs.active();
        let written = vcb_report::render_dossier(self.content, &[tab])
            .and_then(|bytes| vcb_report::write_pdf(&path, &bytes));
        let outcome = match written {
            Ok(()) => {
                tracing::info!(tab = tab.id(), path = %path.display(), "Dossier tab printed");
                SaveOutcome::Saved(path)
            }
            Err(err) => {
                tracing::error!(tab = tab.id(), error = %err, "Dossier print failed");
                SaveOutcome::Failed(err.to_string())
            }
        };
        let saved = matches!(outcome, SaveOutcome::Saved(_));
        self.last_print = Some(outcome);
        saved
    }

    pub fn close_dialogs(&mut self) {
        self.case_dialog.close();
        self.competitor_dialog.close();
    }

    /// The case shown in the dialog, looked up fresh from the content.
    pub fn open_case(&self) -> Option<&'static LegalCase> {
        let id = self.case_dialog.current()?;
        self.content.legal.cases.iter().find(|case| &case.id == id)
    }

    pub fn open_competitor(&self) -> Option<&'static Competitor> {
        let name = self.competitor_dialog.current()?;
        self.content
            .competition
            .competitors
            .iter()
            .find(|competitor| &competitor.name == name)
    }
}
