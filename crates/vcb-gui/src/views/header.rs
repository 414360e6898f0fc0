//! Brand header, tab bar and footer.

use chrono::Datelike;
use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use crate::state::{AppState, SaveOutcome};
use crate::theme::{colors, spacing};
use crate::views::widgets::tag;

/// Actions the header asks the app to perform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderActions {
    pub open_newsletter: bool,
    /// Print the active tab to a PDF.
    pub print_tab: bool,
    pub settings_changed: bool,
}

pub fn header(ui: &mut Ui, state: &mut AppState) -> HeaderActions {
    let mut actions = HeaderActions::default();
    let content = state.content;
    let brand = &content.brand;

    ui.add_space(spacing::SM);
    ui.horizontal(|ui| {
        ui.label(RichText::new(&brand.company).size(22.0).strong().color(colors::NAVY));
        ui.label(RichText::new(&brand.product).size(22.0).strong());
        tag(ui, &format!("{} {}", icons::LOCK, brand.confidentiality), colors::GOLD);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button(icons::GEAR, |ui| {
                let display = &mut state.settings.display;
                actions.settings_changed |= ui
                    .checkbox(&mut display.dark_mode, "Dark mode")
                    .changed();
                actions.settings_changed |= ui
                    .checkbox(&mut display.reduced_motion, "Reduce motion")
                    .on_hover_text("Applies from the next launch")
                    .changed();
                actions.settings_changed |= ui
                    .checkbox(&mut state.settings.intro.always_show, "Play intro on every launch")
                    .changed();
            });
            if ui
                .button(format!("{} Investor Update", icons::NEWSPAPER))
                .clicked()
            {
                actions.open_newsletter = true;
            }
            if ui
                .button(format!("{} Print / PDF", icons::PRINTER))
                .on_hover_text("Save the current tab as a PDF")
                .clicked()
            {
                actions.print_tab = true;
            }
            print_status(ui, state.last_print.as_ref());
        });
    });
    ui.label(RichText::new(&brand.tagline).weak());
    ui.add_space(spacing::SM);

    tab_bar(ui, state);
    ui.add_space(spacing::XS);
    actions
}

fn print_status(ui: &mut Ui, outcome: Option<&SaveOutcome>) {
    match outcome {
        Some(SaveOutcome::Saved(path)) => {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            let text = RichText::new(format!("{} {name}", icons::CHECK)).small().weak();
            ui.label(text).on_hover_text(path.display().to_string());
        }
        Some(SaveOutcome::Failed(message)) => {
            let text = RichText::new(format!("{} Print failed", icons::WARNING))
                .small()
                .color(colors::DANGER);
            ui.label(text).on_hover_text(message);
        }
        None => {}
    }
}

fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for spec in state.tabs.tabs() {
            let selected = state.tabs.is_active(spec.id);
            if ui
                .selectable_label(selected, RichText::new(&spec.label).size(15.0))
                .clicked()
            {
                clicked = Some(spec.id);
            }
        }
    });
    if let Some(tab) = clicked {
        state.select_tab(tab);
    }
}

pub fn footer(ui: &mut Ui, state: &AppState) {
    let brand = &state.content.brand;
    let year = chrono::Local::now().year();
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("© {year} {}", brand.company)).small().weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(&brand.footer_note).small().weak());
        });
    });
}
