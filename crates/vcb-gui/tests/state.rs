//! App state driven without a window.

use std::sync::Arc;
use std::time::{Duration, Instant};

use vcb_core::{DossierTab, INTRO_SEEN_KEY, MemorySessionStore, SessionStore};
use vcb_gui::settings::Settings;
use vcb_gui::state::{AppState, EscapeOutcome, NewsletterState, SaveOutcome};
use vcb_report::NewsletterExport;

fn state_with(store: MemorySessionStore, settings: Settings) -> AppState {
    let content = vcb_model::content().expect("embedded content");
    AppState::new(content, settings, Box::new(store), Instant::now()).expect("state")
}

fn fresh_state() -> AppState {
    state_with(MemorySessionStore::new(), Settings::default())
}

fn seen_state() -> AppState {
    state_with(
        MemorySessionStore::with(INTRO_SEEN_KEY, "true"),
        Settings::default(),
    )
}

#[test]
fn first_visit_shows_intro_on_crisis_tab() {
    let state = fresh_state();
    assert!(state.splash.is_visible());
    assert_eq!(state.tabs.active(), DossierTab::Crisis);
}

#[test]
fn seen_session_skips_intro_unless_always_show() {
    assert!(!seen_state().splash.is_visible());

    let mut settings = Settings::default();
    settings.intro.always_show = true;
    let state = state_with(MemorySessionStore::with(INTRO_SEEN_KEY, "true"), settings);
    assert!(state.splash.is_visible());
}

#[test]
fn escape_skips_intro_before_anything_else() {
    let mut state = fresh_state();
    state.case_dialog.open("fl-parkland-2018-003".to_string());
    let now = Instant::now();

    assert_eq!(state.handle_escape(now), EscapeOutcome::SkippedIntro);
    assert!(state.splash.is_exiting());
    assert!(state.splash.store().get(INTRO_SEEN_KEY).is_some());
    assert!(state.case_dialog.is_open());

    // The reveal still covers the window, so the hidden dialog stays open.
    assert_eq!(state.handle_escape(now), EscapeOutcome::Ignored);
    assert!(state.case_dialog.is_open());

    let after_reveal = now + state.splash.timings().reveal;
    state.splash.tick(after_reveal);
    assert!(!state.splash.is_visible());
    assert_eq!(state.handle_escape(after_reveal), EscapeOutcome::ClosedDialog);
    assert!(!state.case_dialog.is_open());
}

#[test]
fn escape_closes_dialog_then_newsletter() {
    let mut state = seen_state();
    state.competitor_dialog.open("Gaggle".to_string());
    state.newsletter.open = true;
    let now = Instant::now();

    assert_eq!(state.handle_escape(now), EscapeOutcome::ClosedDialog);
    assert_eq!(state.handle_escape(now), EscapeOutcome::ClosedNewsletter);
    assert!(!state.newsletter.open);
    assert_eq!(state.handle_escape(now), EscapeOutcome::Ignored);
}

#[test]
fn arrow_keys_wait_for_intro_and_text_focus() {
    let mut state = fresh_state();
    assert_eq!(state.cycle_tab(true, false), None);

    let mut state = seen_state();
    assert_eq!(state.cycle_tab(true, true), None);
    assert_eq!(state.tabs.active(), DossierTab::Crisis);

    assert_eq!(state.cycle_tab(true, false), Some(DossierTab::Impact));
    assert_eq!(state.cycle_tab(false, false), Some(DossierTab::Crisis));
    assert_eq!(state.cycle_tab(false, false), Some(DossierTab::Appendix));
}

#[test]
fn changing_tab_closes_dialogs() {
    let mut state = seen_state();
    state.select_tab(DossierTab::Legal);
    state.case_dialog.open("fl-parkland-2018-003".to_string());

    // Re-selecting the active tab keeps the dialog.
    state.select_tab(DossierTab::Legal);
    assert!(state.case_dialog.is_open());

    state.select_tab(DossierTab::Competition);
    assert!(!state.case_dialog.is_open());
    assert_eq!(state.tabs.active(), DossierTab::Competition);
}

#[test]
fn dialogs_resolve_records_by_key() {
    let mut state = seen_state();
    assert!(state.open_case().is_none());

    state.case_dialog.open("fl-parkland-2018-003".to_string());
    let case = state.open_case().expect("case");
    assert_eq!(case.id, "fl-parkland-2018-003");

    state.competitor_dialog.open("Gaggle".to_string());
    assert_eq!(state.open_competitor().map(|c| c.name.as_str()), Some("Gaggle"));

    state.competitor_dialog.open("Nobody".to_string());
    assert!(state.open_competitor().is_none());
}

#[test]
fn search_text_is_kept_per_panel() {
    use vcb_gui::state::SearchPanel;

    let mut state = seen_state();
    state.search.text_mut(SearchPanel::Cases).push_str("settlement");
    state.select_tab(DossierTab::Mandates);
    state.select_tab(DossierTab::Legal);
    assert_eq!(state.search.text(SearchPanel::Cases), "settlement");
    assert_eq!(state.search.text(SearchPanel::Mandates), "");
}

#[test]
fn newsletter_open_starts_preparation_once() {
    let export = NewsletterExport::with_renderer(Arc::new(|| Ok(b"%PDF-1.3".to_vec())));
    let mut newsletter = NewsletterState::with_export(export);

    assert!(newsletter.open());
    assert!(newsletter.export.start());
    newsletter.export.wait(Duration::from_secs(5));
    assert!(newsletter.export.is_ready());

    newsletter.close();
    assert!(!newsletter.open());
    assert!(newsletter.open);
}

#[test]
fn saved_directory_follows_last_save() {
    let mut newsletter = NewsletterState::default();
    assert!(newsletter.saved_directory().is_none());

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("newsletter.pdf");
    newsletter.record_save(SaveOutcome::Saved(path));
    assert_eq!(newsletter.saved_directory(), Some(dir.path()));

    newsletter.record_save(SaveOutcome::Failed("disk full".to_string()));
    assert!(newsletter.saved_directory().is_none());
}

#[test]
fn print_writes_only_the_active_tab() {
    let mut state = seen_state();
    let dir = tempfile::tempdir().expect("tempdir");

    state.select_tab(DossierTab::Appendix);
    let appendix = dir.path().join("appendix.pdf");
    assert!(state.print_active_tab(appendix.clone()));
    assert_eq!(state.last_print, Some(SaveOutcome::Saved(appendix.clone())));

    state.select_tab(DossierTab::Mandates);
    let mandates = dir.path().join("mandates.pdf");
    assert!(state.print_active_tab(mandates.clone()));

    let appendix = std::fs::read(&appendix).expect("appendix pdf");
    let mandates = std::fs::read(&mandates).expect("mandates pdf");
    assert!(appendix.starts_with(b"%PDF"));
    assert!(mandates.len() > appendix.len());
}

#[test]
fn failed_print_is_recorded() {
    let mut state = seen_state();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("dossier.pdf");

    assert!(!state.print_active_tab(path));
    assert!(matches!(state.last_print, Some(SaveOutcome::Failed(_))));
}
