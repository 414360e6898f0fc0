//! The Crisis, Impact and The Solution panels.

use egui::{RichText, Ui, vec2};
use egui_phosphor::regular as icons;

use vcb_core::{format_currency_compact, format_number};
use vcb_model::{CrisisSection, ImpactSection, SolutionSection};

use crate::theme::{colors, spacing};
use crate::views::widgets::{
    bar_chart, bullets, card, card_title, section_header, sources, stat_row,
};

const CHART_SIZE: egui::Vec2 = vec2(420.0, 180.0);

pub fn crisis(ui: &mut Ui, crisis: &CrisisSection) {
    section_header(ui, &crisis.title, &crisis.subtitle);
    ui.label(&crisis.overview);
    ui.add_space(spacing::MD);
    stat_row(ui, &crisis.key_stats);
    ui.add_space(spacing::MD);

    ui.columns(2, |columns| {
        card(&mut columns[0], |ui| {
            card_title(ui, icons::TREND_UP, "Youth suicide rate per 100k");
            let labels: Vec<String> = crisis
                .suicide_rates
                .iter()
                .map(|point| point.year.to_string())
                .collect();
            let values: Vec<f64> = crisis.suicide_rates.iter().map(|point| point.rate).collect();
            bar_chart(ui, &labels, &values, colors::DANGER, CHART_SIZE, |value| {
                format!("{value:.1}")
            });
        });
        card(&mut columns[1], |ui| {
            card_title(ui, icons::WARNING, "K-12 shooting incidents");
            let labels: Vec<String> = crisis
                .school_shootings
                .iter()
                .map(|point| point.year.to_string())
                .collect();
            let values: Vec<f64> = crisis
                .school_shootings
                .iter()
                .map(|point| f64::from(point.incidents))
                .collect();
            bar_chart(ui, &labels, &values, colors::NAVY, CHART_SIZE, format_number);
        });
    });

    ui.add_space(spacing::MD);
    let thread = &crisis.common_thread;
    card(ui, |ui| {
        card_title(ui, icons::LINK, &thread.title);
        ui.label(&thread.description);
        ui.add_space(spacing::XS);
        ui.label(RichText::new(&thread.result).strong().color(colors::DANGER));
    });
    sources(ui, &crisis.sources);
}

pub fn impact(ui: &mut Ui, impact: &ImpactSection) {
    section_header(ui, &impact.title, &impact.subtitle);

    ui.columns(impact.forces.len().max(1), |columns| {
        for (column, force) in columns.iter_mut().zip(&impact.forces) {
            card(column, |ui| {
                card_title(ui, icons::LIGHTNING, &force.title);
                ui.label(RichText::new(&force.subtitle).weak());
                ui.add_space(spacing::XS);
                ui.label(&force.description);
                ui.add_space(spacing::XS);
                bullets(ui, &force.key_points);
            });
        }
    });

    ui.add_space(spacing::MD);
    ui.columns(2, |columns| {
        card(&mut columns[0], |ui| {
            card_title(ui, icons::SCALES, "Settlements");
            egui::Grid::new("settlements")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    for settlement in &impact.settlements {
                        ui.label(RichText::new(&settlement.case_name).strong());
                        ui.label(format!("{} · {}", settlement.location, settlement.year));
                        ui.label(
                            RichText::new(format_currency_compact(settlement.amount as f64))
                                .color(colors::DANGER),
                        );
                        ui.end_row();
                    }
                });
        });
        card(&mut columns[1], |ui| {
            card_title(ui, icons::MAP_TRIFOLD, "States mandating threat assessment");
            let labels: Vec<String> = impact
                .mandate_adoption
                .iter()
                .map(|point| point.year.to_string())
                .collect();
            let values: Vec<f64> = impact
                .mandate_adoption
                .iter()
                .map(|point| f64::from(point.states))
                .collect();
            bar_chart(ui, &labels, &values, colors::TEAL, CHART_SIZE, format_number);
            for point in &impact.mandate_adoption {
                ui.label(RichText::new(format!("{}: {}", point.year, point.label)).small());
            }
        });
    });

    ui.add_space(spacing::MD);
    card(ui, |ui| {
        ui.label(RichText::new(&impact.convergence).strong());
    });
    sources(ui, &impact.sources);
}

pub fn solution(ui: &mut Ui, solution: &SolutionSection) {
    section_header(ui, &solution.title, &solution.subtitle);
    ui.label(&solution.overview);
    ui.add_space(spacing::SM);
    ui.label(RichText::new(&solution.mission).italics().color(colors::TEAL));
    ui.add_space(spacing::MD);

    card(ui, |ui| {
        card_title(ui, icons::SWAP, "What it replaces");
        egui::Grid::new("replacements")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                for item in &solution.replaces {
                    ui.label(RichText::new(&item.legacy).strikethrough().weak());
                    ui.label(icons::ARROW_RIGHT);
                    ui.label(RichText::new(&item.replacement).strong());
                    ui.end_row();
                }
            });
    });

    ui.add_space(spacing::MD);
    ui.columns(solution.capabilities.len().max(1), |columns| {
        for (column, group) in columns.iter_mut().zip(&solution.capabilities) {
            card(column, |ui| {
                card_title(ui, icons::SHIELD_CHECK, &group.category);
                for feature in &group.features {
                    ui.label(RichText::new(&feature.title).strong());
                    ui.label(RichText::new(&feature.description).small());
                    ui.add_space(spacing::XS);
                }
            });
        }
    });
    sources(ui, &solution.sources);
}
