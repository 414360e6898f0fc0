//! Detail dialogs for legal cases and competitors.
//!
//! The dialogs hold only a key; the record is looked up again every frame.

use egui::{Context, RichText};
use egui_phosphor::regular as icons;

use crate::state::AppState;
use crate::theme::{colors, spacing};
use crate::views::widgets::{bullets, external_link, tag};

const DIALOG_WIDTH: f32 = 560.0;

pub fn case_dialog(ctx: &Context, state: &mut AppState) {
    if !state.case_dialog.is_open() {
        return;
    }
    let Some(case) = state.open_case() else {
        // No record with this key any more.
        state.case_dialog.close();
        return;
    };
    let mut open = true;
    egui::Window::new(case.title.as_str())
        .id(egui::Id::new("case-dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(DIALOG_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                tag(ui, &case.jurisdiction, colors::NAVY);
                tag(ui, case.status.label(), colors::TEAL);
                ui.label(RichText::new(format!("{} · {}", case.court, case.date)).weak());
            });
            ui.label(RichText::new(&case.citation).small().weak());
            ui.add_space(spacing::SM);

            ui.label(RichText::new("Summary").strong());
            ui.label(&case.summary);
            ui.add_space(spacing::SM);

            ui.label(RichText::new("Why it matters").strong());
            ui.label(&case.relevance);
            ui.add_space(spacing::SM);

            ui.label(RichText::new("Key points").strong());
            bullets(ui, &case.key_points);
            ui.add_space(spacing::SM);

            ui.horizontal(|ui| {
                external_link(ui, "Open case", &case.url);
            });
        });
    if !open {
        state.case_dialog.close();
    }
}

pub fn competitor_dialog(ctx: &Context, state: &mut AppState) {
    if !state.competitor_dialog.is_open() {
        return;
    }
    let Some(competitor) = state.open_competitor() else {
        state.competitor_dialog.close();
        return;
    };
    let mut open = true;
    egui::Window::new(competitor.name.as_str())
        .id(egui::Id::new("competitor-dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(DIALOG_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            tag(ui, &competitor.focus, colors::NAVY);
            ui.add_space(spacing::SM);
            ui.columns(2, |columns| {
                columns[0].label(
                    RichText::new(format!("{} Strengths", icons::THUMBS_UP))
                        .strong()
                        .color(colors::SUCCESS),
                );
                bullets(&mut columns[0], &competitor.strengths);
                columns[1].label(
                    RichText::new(format!("{} Weaknesses", icons::THUMBS_DOWN))
                        .strong()
                        .color(colors::DANGER),
                );
                bullets(&mut columns[1], &competitor.weaknesses);
            });
            ui.add_space(spacing::SM);
            ui.label(RichText::new("The gap we fill").strong());
            ui.label(&competitor.gap);
            ui.add_space(spacing::SM);
            external_link(ui, "Visit website", &competitor.url);
        });
    if !open {
        state.competitor_dialog.close();
    }
}
