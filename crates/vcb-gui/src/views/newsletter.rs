//! Investor update window: text preview plus the PDF download.

use egui::{Context, RichText};
use egui_phosphor::regular as icons;

use vcb_report::{NEWSLETTER_FILE_NAME, render_text, snapshot, write_pdf};

use crate::state::{AppState, SaveOutcome};
use crate::theme::{colors, spacing};

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterAction {
    None,
    Retry,
    Saved,
}

pub fn newsletter_window(ctx: &Context, state: &mut AppState) -> NewsletterAction {
    if !state.newsletter.open {
        return NewsletterAction::None;
    }
    if state.newsletter.preview.is_none() {
        state.newsletter.preview = Some(match snapshot() {
            Ok(snapshot) => render_text(snapshot),
            Err(err) => err.user_message(),
        });
    }

    let mut action = NewsletterAction::None;
    let mut open = true;
    egui::Window::new(format!("{} Investor Update", icons::NEWSPAPER))
        .id(egui::Id::new("newsletter"))
        .open(&mut open)
        .collapsible(false)
        .default_size([680.0, 620.0])
        .show(ctx, |ui| {
            let ready = state.newsletter.export.is_ready();
            let error = state.newsletter.export.error().map(str::to_owned);
            ui.horizontal(|ui| {
                if ready {
                    if ui
                        .button(format!("{} Download PDF", icons::DOWNLOAD_SIMPLE))
                        .clicked()
                        && save_pdf(state)
                    {
                        action = NewsletterAction::Saved;
                    }
                } else if let Some(message) = error {
                    ui.label(
                        RichText::new(format!("{} {message}", icons::WARNING))
                            .color(colors::DANGER),
                    );
                    if ui.button("Try again").clicked() {
                        action = NewsletterAction::Retry;
                    }
                } else {
                    ui.spinner();
                    ui.label("Preparing PDF…");
                }
            });
            match &state.newsletter.last_save {
                Some(SaveOutcome::Saved(path)) => {
                    ui.label(
                        RichText::new(format!("Saved to {}", path.display()))
                            .small()
                            .color(colors::SUCCESS),
                    );
                }
                Some(SaveOutcome::Failed(message)) => {
                    ui.label(RichText::new(message).small().color(colors::DANGER));
                }
                None => {}
            }
            ui.add_space(spacing::SM);
            ui.separator();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(preview) = &state.newsletter.preview {
                        ui.label(RichText::new(preview).monospace());
                    }
                });
        });
    if !open {
        state.newsletter.close();
    }
    action
}

/// Asks for a location and writes the prepared bytes. Returns `true` when written.
fn save_pdf(state: &mut AppState) -> bool {
    let Some(bytes) = state.newsletter.export.bytes() else {
        return false;
    };
    let mut dialog = rfd::FileDialog::new()
        .set_file_name(NEWSLETTER_FILE_NAME)
        .add_filter("PDF", &["pdf"]);
    if let Some(dir) = &state.settings.export.last_directory {
        dialog = dialog.set_directory(dir);
    }
    let Some(path) = dialog.save_file() else {
        return false;
    };
    match write_pdf(&path, bytes) {
        Ok(()) => {
            state.newsletter.record_save(SaveOutcome::Saved(path));
            true
        }
        Err(err) => {
            state.newsletter.record_save(SaveOutcome::Failed(err.to_string()));
            false
        }
    }
}
