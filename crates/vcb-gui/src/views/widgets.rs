//! Small building blocks shared by the panels.

use egui::{Align2, Color32, FontId, Rect, RichText, Sense, Ui, pos2, vec2};
use egui_phosphor::regular as icons;

use vcb_core::BarChartGeometry;
use vcb_model::{Source, Stat};

use crate::theme::{colors, spacing, trend_color};

pub fn section_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.add_space(spacing::SM);
    ui.heading(RichText::new(title).size(26.0).strong());
    ui.label(RichText::new(subtitle).weak());
    ui.add_space(spacing::MD);
}

pub fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn card_title(ui: &mut Ui, icon: &str, title: &str) {
    ui.label(RichText::new(format!("{icon} {title}")).strong().size(16.0));
    ui.add_space(spacing::XS);
}

pub fn stat_tile(ui: &mut Ui, stat: &Stat) {
    card(ui, |ui| {
        ui.label(
            RichText::new(&stat.value)
                .size(24.0)
                .strong()
                .color(trend_color(stat.trend)),
        );
        ui.label(RichText::new(&stat.label).strong());
        if let Some(description) = &stat.description {
            ui.label(RichText::new(description).weak().small());
        }
    });
}

/// A row of equal-width stat tiles.
pub fn stat_row(ui: &mut Ui, stats: &[Stat]) {
    if stats.is_empty() {
        return;
    }
    ui.columns(stats.len(), |columns| {
        for (column, stat) in columns.iter_mut().zip(stats) {
            stat_tile(column, stat);
        }
    });
}

pub fn bullets<S: AsRef<str>>(ui: &mut Ui, items: &[S]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(icons::CARET_RIGHT).color(colors::TEAL));
            ui.label(item.as_ref());
        });
    }
}

pub fn tag(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.15))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

/// Search field with a leading icon. Returns whether the text changed.
pub fn search_box(ui: &mut Ui, text: &mut String, hint: &str) -> bool {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icons::MAGNIFYING_GLASS).weak());
        let changed = ui
            .add(
                egui::TextEdit::singleline(text)
                    .hint_text(hint)
                    .desired_width(320.0),
            )
            .changed();
        if !text.is_empty() && ui.small_button(icons::X).on_hover_text("Clear").clicked() {
            text.clear();
            return true;
        }
        changed
    })
    .inner
}

pub fn empty_state(ui: &mut Ui, query: &str) {
    ui.add_space(spacing::LG);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(icons::MAGNIFYING_GLASS_MINUS).size(28.0).weak());
        ui.label(RichText::new(format!("No results for \u{201c}{query}\u{201d}")).weak());
    });
    ui.add_space(spacing::LG);
}

pub fn sources(ui: &mut Ui, sources: &[Source]) {
    if sources.is_empty() {
        return;
    }
    ui.add_space(spacing::MD);
    ui.label(RichText::new("Sources").small().strong());
    for source in sources {
        ui.horizontal_wrapped(|ui| {
            match &source.url {
                Some(url) => {
                    ui.hyperlink_to(RichText::new(&source.title).small(), url);
                }
                None => {
                    ui.label(RichText::new(&source.title).small());
                }
            }
            if let Some(note) = &source.note {
                ui.label(RichText::new(note).small().weak());
            }
        });
    }
}

pub fn external_link(ui: &mut Ui, label: &str, url: &str) {
    ui.hyperlink_to(format!("{} {label}", icons::ARROW_SQUARE_OUT), url);
}

/// Labelled bar chart drawn with the shared chart geometry.
pub fn bar_chart(
    ui: &mut Ui,
    labels: &[String],
    values: &[f64],
    color: Color32,
    size: egui::Vec2,
    format_value: impl Fn(f64) -> String,
) {
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let geometry = BarChartGeometry::new(size.x, size.y);
    let origin = rect.min;
    let text_color = ui.visuals().weak_text_color();
    let label_font = FontId::proportional(10.0);

    for ((bar, value), label) in geometry.bars(values).iter().zip(values).zip(labels) {
        let bar_rect = Rect::from_min_size(
            pos2(origin.x + bar.x, origin.y + bar.y),
            vec2(bar.width, bar.height),
        );
        painter.rect_filled(bar_rect, 2.0, color);
        painter.text(
            pos2(origin.x + bar.center_x, bar_rect.top() - 2.0),
            Align2::CENTER_BOTTOM,
            format_value(*value),
            label_font.clone(),
            text_color,
        );
        painter.text(
            pos2(origin.x + bar.center_x, origin.y + geometry.axis_label_y()),
            Align2::CENTER_BOTTOM,
            label,
            label_font.clone(),
            text_color,
        );
    }
}
