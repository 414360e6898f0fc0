//! Mandates and Legal Cases panels, both searchable.

use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use vcb_core::{DetailDialog, SearchQuery, filter_records};
use vcb_model::{CaseStatus, LegalSection, MandatesSection};

use crate::theme::{colors, spacing};
use crate::views::widgets::{
    bullets, card, card_title, empty_state, external_link, search_box, section_header, sources,
    tag,
};

pub fn mandates(ui: &mut Ui, mandates: &MandatesSection, search: &mut String) {
    section_header(ui, &mandates.title, &mandates.subtitle);
    ui.label(&mandates.overview);
    ui.add_space(spacing::SM);
    ui.label(RichText::new(&mandates.trendline).strong().color(colors::TEAL));
    ui.add_space(spacing::MD);

    search_box(ui, search, "Search states, years, statutes…");
    ui.add_space(spacing::SM);
    let query = SearchQuery::parse(search);
    let matches = filter_records(&query, &mandates.states);
    if matches.is_empty() {
        empty_state(ui, search.trim());
    }
    for mandate in matches {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&mandate.state).strong().size(16.0));
                tag(ui, &mandate.year.to_string(), colors::TEAL);
                ui.label(RichText::new(&mandate.statute).weak());
            });
            if let Some(act) = &mandate.act {
                ui.label(RichText::new(act).italics());
            }
            if let Some(significance) = &mandate.significance {
                ui.label(RichText::new(significance).small());
            }
            bullets(ui, &mandate.requirements);
        });
        ui.add_space(spacing::XS);
    }

    ui.add_space(spacing::MD);
    for bill in &mandates.california {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                card_title(ui, icons::SCROLL, &format!("{} ({})", bill.bill, bill.year));
                tag(ui, &bill.status, colors::GOLD);
            });
            ui.label(&bill.summary);
            if let Some(deadline) = &bill.deadline {
                ui.label(RichText::new(format!("Deadline: {deadline}")).strong());
            }
            egui::Grid::new(("bill-requirements", &bill.bill))
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.label(RichText::new("Requirement").strong());
                    ui.label(RichText::new("How we meet it").strong());
                    ui.end_row();
                    for mapping in &bill.requirements {
                        ui.label(&mapping.requirement);
                        ui.label(&mapping.solution);
                        ui.end_row();
                    }
                });
            external_link(ui, "Read the bill", &bill.url);
        });
        ui.add_space(spacing::XS);
    }

    ui.add_space(spacing::MD);
    card(ui, |ui| {
        card_title(ui, icons::BANK, "Federal guidance");
        for guidance in &mandates.federal_guidance {
            ui.label(RichText::new(format!("{}: {}", guidance.agency, guidance.title)).strong());
            ui.label(RichText::new(&guidance.description).small());
            if let Some(url) = &guidance.url {
                external_link(ui, "Source", url);
            }
            ui.add_space(spacing::XS);
        }
    });
    sources(ui, &mandates.sources);
}

fn status_color(status: CaseStatus) -> egui::Color32 {
    match status {
        CaseStatus::Precedential => colors::DANGER,
        CaseStatus::NonPrecedential => colors::TEAL,
        CaseStatus::Pending => colors::GOLD,
    }
}

pub fn cases(
    ui: &mut Ui,
    legal: &LegalSection,
    search: &mut String,
    dialog: &mut DetailDialog<String>,
) {
    section_header(
        ui,
        "Legal Cases",
        "Precedent and regulation shaping the duty of care in schools",
    );
    search_box(ui, search, "Search cases by title, court, citation, tag…");
    ui.add_space(spacing::SM);

    let query = SearchQuery::parse(search);
    let matches = filter_records(&query, &legal.cases);
    if matches.is_empty() {
        empty_state(ui, search.trim());
    }
    for case in matches {
        let response = card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icons::GAVEL).color(colors::NAVY));
                ui.label(RichText::new(&case.title).strong().size(16.0));
                tag(ui, &case.jurisdiction, colors::NAVY);
                tag(ui, case.status.label(), status_color(case.status));
            });
            ui.label(
                RichText::new(format!("{} · {} · {}", case.court, case.date, case.citation))
                    .weak(),
            );
            ui.label(&case.summary);
            ui.horizontal_wrapped(|ui| {
                for label in &case.tags {
                    tag(ui, label, colors::TEAL);
                }
            });
            ui.button(format!("{} Details", icons::INFO))
        });
        if response.clicked() {
            tracing::debug!(case = %case.id, "Opening case details");
            dialog.open(case.id.clone());
        }
        ui.add_space(spacing::XS);
    }

    ui.add_space(spacing::MD);
    ui.label(RichText::new("Regulations").strong().size(18.0));
    for regulation in &legal.regulations {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&regulation.title).strong());
                tag(ui, regulation.kind.label(), colors::NAVY);
                tag(ui, regulation.status.label(), colors::TEAL);
            });
            ui.label(RichText::new(&regulation.jurisdiction).weak());
            ui.label(&regulation.summary);
            bullets(ui, &regulation.implications);
            if let Some(date) = &regulation.effective_date {
                ui.label(RichText::new(format!("Effective {date}")).small());
            }
            external_link(ui, "Source", &regulation.url);
        });
        ui.add_space(spacing::XS);
    }
}
