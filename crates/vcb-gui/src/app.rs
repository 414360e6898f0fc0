//! Main application struct and eframe::App implementation

use std::path::{Path, PathBuf};
use std::time::Instant;

use eframe::egui;
use vcb_core::splash::desktop_session_store;
use vcb_model::ConfigurationError;
use vcb_report::DOSSIER_FILE_NAME;

use crate::settings::{load_settings, save_settings};
use crate::state::{AppState, EscapeOutcome};
use crate::theme;
use crate::views::{self, HeaderActions, NewsletterAction, Starfield};

/// Main application struct
pub struct VcBriefApp {
    state: AppState,
    starfield: Starfield,
}

impl VcBriefApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, ConfigurationError> {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings = load_settings();
        tracing::info!(
            dark_mode = settings.display.dark_mode,
            reduced_motion = settings.display.reduced_motion,
            "Loaded settings"
        );
        cc.egui_ctx
            .set_visuals(theme::visuals(settings.display.dark_mode));

        let content = vcb_model::content()?;
        let now = Instant::now();
        let state = AppState::new(content, settings, desktop_session_store(), now)?;
        tracing::info!(
            intro = state.splash.phase().label(),
            tab = state.tabs.active().id(),
            "Dossier ready"
        );
        Ok(Self {
            state,
            starfield: Starfield::new(now),
        })
    }
}

impl eframe::App for VcBriefApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.splash.tick(now);
        self.state.newsletter.export.poll();

        self.handle_shortcuts(ctx, now);

        // Header with tab bar
        let mut actions = HeaderActions::default();
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            actions = views::header(ui, &mut self.state);
        });
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            views::footer(ui, &self.state);
        });

        // The dossier is always laid out, even under the intro.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(self.state.tabs.active().id())
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(theme::spacing::SM);
                    views::panels::show_active(ui, &mut self.state);
                });
        });

        views::case_dialog(ctx, &mut self.state);
        views::competitor_dialog(ctx, &mut self.state);

        if actions.open_newsletter && self.state.newsletter.open() {
            self.start_export(ctx);
        }
        match views::newsletter_window(ctx, &mut self.state) {
            NewsletterAction::None => {}
            NewsletterAction::Retry => self.start_export(ctx),
            NewsletterAction::Saved => {
                let directory = self.state.newsletter.saved_directory().map(Path::to_path_buf);
                self.remember_directory(directory);
            }
        }

        if actions.print_tab {
            self.print_active_tab();
        }

        if actions.settings_changed {
            ctx.set_visuals(theme::visuals(self.state.settings.display.dark_mode));
            self.persist_settings();
        }

        if self.state.splash.is_visible()
            && let Some(trigger) = views::splash_overlay(
                ctx,
                &self.state.splash,
                &self.state.content.brand,
                &self.starfield,
                now,
            )
        {
            self.state.splash.trigger_exit(trigger, now);
        }

        self.schedule_repaint(ctx, now);
    }
}

impl VcBriefApp {
    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context, now: Instant) {
        let (escape, left, right) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if escape {
            let outcome = self.state.handle_escape(now);
            if outcome != EscapeOutcome::Ignored {
                tracing::debug!(?outcome, "Escape handled");
            }
        }

        let typing = ctx.wants_keyboard_input();
        if left {
            self.state.cycle_tab(false, typing);
        }
        if right {
            self.state.cycle_tab(true, typing);
        }
    }

    fn start_export(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.state
            .newsletter
            .export
            .start_with(move || ctx.request_repaint());
    }

    /// Asks where to save, then prints the active tab there.
    fn print_active_tab(&mut self) {
        let file_name = format!(
            "{}_{}",
            DOSSIER_FILE_NAME.trim_end_matches(".pdf"),
            self.state.tabs.active().id()
        );
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(format!("{file_name}.pdf"))
            .add_filter("PDF", &["pdf"]);
        if let Some(dir) = &self.state.settings.export.last_directory {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        let directory = path.parent().map(Path::to_path_buf);
        if self.state.print_active_tab(path) {
            self.remember_directory(directory);
        }
    }

    fn remember_directory(&mut self, directory: Option<PathBuf>) {
        if directory.is_some() && directory != self.state.settings.export.last_directory {
            self.state.settings.export.last_directory = directory;
            self.persist_settings();
        }
    }

    fn persist_settings(&self) {
        if let Err(e) = save_settings(&self.state.settings) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }

    /// Keeps frames coming while something moves, and wakes for the next deadline.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let splash = &self.state.splash;
        if splash.is_animating(now) {
            ctx.request_repaint();
        } else if let Some(delay) = splash.next_wakeup(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
