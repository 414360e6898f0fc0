//! Market and Why We Win panels.

use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use vcb_core::{DetailDialog, SearchQuery, filter_records, format_currency_compact, format_number};
use vcb_model::{CompetitionSection, MarketSection};

use crate::theme::{colors, spacing};
use crate::views::widgets::{
    bullets, card, card_title, empty_state, search_box, section_header, sources, tag,
};

fn market_tile(ui: &mut Ui, label: &str, value: u64, caption: &str) {
    card(ui, |ui| {
        ui.label(RichText::new(label).strong().color(colors::TEAL));
        ui.label(
            RichText::new(format_currency_compact(value as f64))
                .size(28.0)
                .strong(),
        );
        ui.label(RichText::new(caption).small().weak());
    });
}

pub fn market(ui: &mut Ui, market: &MarketSection) {
    section_header(ui, &market.title, &market.subtitle);

    ui.columns(3, |columns| {
        market_tile(&mut columns[0], "TAM", market.tam, "Every U.S. K-12 school");
        market_tile(&mut columns[1], "SAM", market.sam, "Schools in mandate states");
        market_tile(&mut columns[2], "SOM", market.som, "Reachable within five years");
    });
    ui.add_space(spacing::SM);
    ui.label(
        RichText::new(format!(
            "{} schools nationwide · {} mandated across {} states",
            format_number(market.total_schools as f64),
            format_number(market.mandated_schools as f64),
            market.mandated_states
        ))
        .weak(),
    );

    ui.add_space(spacing::MD);
    ui.columns(market.buyers.len().max(1), |columns| {
        for (column, buyer) in columns.iter_mut().zip(&market.buyers) {
            card(column, |ui| {
                card_title(ui, icons::USERS, &buyer.title);
                ui.label(&buyer.description);
                bullets(ui, &buyer.pain_points);
            });
        }
    });

    ui.add_space(spacing::MD);
    card(ui, |ui| {
        card_title(ui, icons::CALENDAR, "Budget cycles");
        ui.label(&market.budget_cycles);
    });

    ui.add_space(spacing::MD);
    ui.columns(2, |columns| {
        card(&mut columns[0], |ui| {
            card_title(ui, icons::ROCKET_LAUNCH, "Traction");
            let traction = &market.traction;
            egui::Grid::new("traction").num_columns(2).show(ui, |ui| {
                for (label, value) in [
                    ("Districts", &traction.districts),
                    ("Students served", &traction.students_served),
                    ("States", &traction.states_served),
                    ("Pipeline", &traction.pipeline),
                ] {
                    ui.label(RichText::new(label).weak());
                    ui.label(RichText::new(value).strong());
                    ui.end_row();
                }
            });
        });
        card(&mut columns[1], |ui| {
            card_title(ui, icons::CLOCK, "Why now");
            bullets(ui, &market.why_now);
        });
    });

    ui.add_space(spacing::MD);
    card(ui, |ui| {
        card_title(ui, icons::TREND_UP, "Growth drivers");
        for driver in &market.growth_drivers {
            ui.label(RichText::new(&driver.title).strong());
            ui.label(RichText::new(&driver.description).small());
            ui.add_space(spacing::XS);
        }
        ui.add_space(spacing::SM);
        ui.label(RichText::new(&market.outlook).italics());
    });
}

pub fn competition(
    ui: &mut Ui,
    competition: &CompetitionSection,
    search: &mut String,
    dialog: &mut DetailDialog<String>,
) {
    section_header(ui, &competition.title, &competition.subtitle);
    ui.label(&competition.positioning);
    ui.add_space(spacing::MD);

    search_box(ui, search, "Search competitors, strengths, weaknesses…");
    ui.add_space(spacing::SM);
    let query = SearchQuery::parse(search);
    let matches = filter_records(&query, &competition.competitors);
    if matches.is_empty() {
        empty_state(ui, search.trim());
    }
    for competitor in matches {
        let clicked = card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&competitor.name).strong().size(16.0));
                tag(ui, &competitor.focus, colors::NAVY);
            });
            ui.label(
                RichText::new(format!("{} Gap: {}", icons::WARNING_CIRCLE, competitor.gap))
                    .color(colors::DANGER),
            );
            ui.button(format!("{} Compare", icons::INFO)).clicked()
        });
        if clicked {
            tracing::debug!(competitor = %competitor.name, "Opening competitor details");
            dialog.open(competitor.name.clone());
        }
        ui.add_space(spacing::XS);
    }

    ui.add_space(spacing::MD);
    card(ui, |ui| {
        card_title(ui, icons::CASTLE_TURRET, "Our moat");
        bullets(ui, &competition.moat);
    });
    if let Some(quote) = &competition.quote {
        ui.add_space(spacing::MD);
        card(ui, |ui| {
            ui.label(
                RichText::new(format!("\u{201c}{}\u{201d}", quote.text))
                    .italics()
                    .size(16.0),
            );
            ui.label(RichText::new(format!("- {}", quote.attribution)).weak());
        });
    }
    sources(ui, &competition.sources);
}
