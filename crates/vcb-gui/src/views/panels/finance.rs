//! Financials, The Vision and Appendix panels.

use egui::{RichText, Ui, vec2};
use egui_phosphor::regular as icons;

use vcb_core::{
    format_currency, format_currency_compact, format_number, format_percentage,
    format_signed_percentage,
};
use vcb_model::{AppendixLink, FinancialsSection, FundingSection};

use crate::theme::{colors, spacing};
use crate::views::widgets::{bar_chart, bullets, card, card_title, external_link, section_header};

pub fn financials(ui: &mut Ui, financials: &FinancialsSection) {
    section_header(ui, &financials.title, &financials.subtitle);

    card(ui, |ui| {
        card_title(ui, icons::CHART_BAR, "Monthly recurring revenue");
        let labels: Vec<String> = financials
            .mrr
            .iter()
            .map(|point| point.month.split_whitespace().next().unwrap_or_default().to_string())
            .collect();
        let values: Vec<f64> = financials.mrr.iter().map(|point| point.mrr as f64).collect();
        let width = ui.available_width().max(320.0);
        bar_chart(
            ui,
            &labels,
            &values,
            colors::TEAL,
            vec2(width, 200.0),
            format_currency_compact,
        );
    });

    ui.add_space(spacing::MD);
    card(ui, |ui| {
        card_title(ui, icons::TABLE, "Fiscal years");
        egui::Grid::new("fiscal-years")
            .num_columns(7)
            .striped(true)
            .show(ui, |ui| {
                for header in [
                    "Year", "Revenue", "Growth", "Customers", "Gross margin", "Net income",
                    "Net margin",
                ] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();
                for year in &financials.fiscal_years {
                    ui.label(&year.year);
                    ui.label(format_currency(year.revenue as f64));
                    ui.label(year.growth.map_or_else(|| "-".to_string(), format_signed_percentage));
                    ui.label(format_number(f64::from(year.customers)));
                    ui.label(format_percentage(year.gross_margin, 1));
                    let net = RichText::new(format_currency(year.net_income as f64));
                    ui.label(if year.net_income < 0 {
                        net.color(colors::DANGER)
                    } else {
                        net.color(colors::SUCCESS)
                    });
                    ui.label(format_percentage(year.net_margin, 1));
                    ui.end_row();
                }
            });
    });

    ui.add_space(spacing::MD);
    ui.columns(2, |columns| {
        card(&mut columns[0], |ui| {
            card_title(ui, icons::FLAG, "Milestones");
            for milestone in &financials.milestones {
                let icon = if milestone.achieved {
                    icons::CHECK_CIRCLE
                } else {
                    icons::CIRCLE
                };
                let mut title = RichText::new(format!(
                    "{icon} Month {}: {}",
                    milestone.month, milestone.label
                ))
                .strong();
                if milestone.highlight {
                    title = title.color(colors::SUCCESS);
                }
                ui.label(title);
                ui.label(
                    RichText::new(format!("{} · {}", milestone.description, milestone.metric))
                        .small(),
                );
            }
        });
        card(&mut columns[1], |ui| {
            card_title(ui, icons::TREND_UP, "Path to profitability");
            match financials.first_profitable_month() {
                Some(point) => {
                    ui.label(
                        RichText::new(format!(
                            "First profitable month: {} ({})",
                            point.month,
                            format_currency(point.net_income as f64)
                        ))
                        .strong()
                        .color(colors::SUCCESS),
                    );
                }
                None => {
                    ui.label("No profitable month in the projection.");
                }
            }
            if let (Some(first), Some(last)) =
                (financials.profitability.first(), financials.profitability.last())
            {
                ui.label(format!(
                    "{}: {}  →  {}: {}",
                    first.month,
                    format_currency(first.net_income as f64),
                    last.month,
                    format_currency(last.net_income as f64)
                ));
            }
        });
    });
}

pub fn funding(ui: &mut Ui, funding: &FundingSection) {
    section_header(ui, "The Vision", &funding.vision);
    ui.label(RichText::new(&funding.mission).italics().color(colors::TEAL));
    ui.add_space(spacing::MD);

    card(ui, |ui| {
        ui.label(
            RichText::new(format!(
                "Raising {} · {}",
                format_currency_compact(funding.amount as f64),
                funding.stage
            ))
            .size(24.0)
            .strong(),
        );
    });

    ui.add_space(spacing::MD);
    card(ui, |ui| {
        card_title(ui, icons::COINS, "Use of funds");
        for item in &funding.use_of_funds {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&item.category).strong());
                ui.label(format_currency_compact(item.amount as f64));
                ui.label(RichText::new(format_percentage(item.percentage, 0)).weak());
            });
            ui.add(
                egui::ProgressBar::new((item.percentage / 100.0) as f32)
                    .fill(colors::NAVY)
                    .desired_height(6.0),
            );
            ui.label(RichText::new(&item.description).small());
            ui.add_space(spacing::XS);
        }
    });

    ui.add_space(spacing::MD);
    let opportunity = &funding.opportunity;
    card(ui, |ui| {
        card_title(ui, icons::COMPASS, "The opportunity");
        egui::Grid::new("opportunity").num_columns(2).show(ui, |ui| {
            for (label, value) in [
                ("Today", &opportunity.current),
                ("Trend", &opportunity.trend),
                ("Future", &opportunity.future),
                ("Advantage", &opportunity.advantage),
            ] {
                ui.label(RichText::new(label).weak());
                ui.label(value);
                ui.end_row();
            }
        });
    });

    ui.add_space(spacing::MD);
    ui.columns(2, |columns| {
        card(&mut columns[0], |ui| {
            card_title(ui, icons::HEART, "The moral case");
            ui.label(&funding.moral_case);
        });
        card(&mut columns[1], |ui| {
            card_title(ui, icons::CURRENCY_DOLLAR, "The financial case");
            ui.label(&funding.financial_case);
        });
    });

    ui.add_space(spacing::MD);
    let contact = &funding.contact;
    card(ui, |ui| {
        card_title(ui, icons::ENVELOPE, "Contact");
        ui.label(RichText::new(format!("{}, {}", contact.name, contact.role)).strong());
        ui.hyperlink_to(&contact.email, format!("mailto:{}", contact.email));
        if let Some(phone) = &contact.phone {
            ui.label(phone);
        }
    });
}

pub fn appendix(ui: &mut Ui, links: &[AppendixLink]) {
    section_header(ui, "Appendix", "Reference material and further reading");
    card(ui, |ui| {
        for link in links {
            external_link(ui, &link.title, &link.url);
        }
    });
    ui.add_space(spacing::MD);
    bullets(
        ui,
        &["All projections are management estimates and unaudited."],
    );
}
