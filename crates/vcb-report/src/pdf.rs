//! PDF backend: draws a [`DocumentLayout`] with the built-in Helvetica fonts.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
    Polygon, Rgb,
};

use crate::error::{ReportError, Result};
use crate::layout::{
    Block, DocumentLayout, FilledRect, FontWeight, PAGE_HEIGHT, PAGE_WIDTH, Rule, TextRun,
};
use crate::palette::Rgb8;

const LAYER: &str = "Layer 1";

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// Layout y (top origin) to PDF y (bottom origin).
fn flip(y: f32) -> Mm {
    mm(PAGE_HEIGHT - y)
}

fn color(rgb: Rgb8) -> Color {
    let (r, g, b) = rgb.unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Built-in fonts only cover Latin-1; map the typographic marks we use.
fn printable(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{2014}' | '\u{2013}' => '-',
            '\u{2022}' => '|',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            ch if ch.is_ascii() => ch,
            _ => '?',
        })
        .collect()
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn draw_rect(layer: &PdfLayerReference, rect: &FilledRect) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let (left, right) = (mm(rect.x), mm(rect.x + rect.width));
    let (top, bottom) = (flip(rect.y), flip(rect.y + rect.height));
    layer.set_fill_color(color(rect.color));
    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(left, bottom), false),
            (Point::new(right, bottom), false),
            (Point::new(right, top), false),
            (Point::new(left, top), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

fn draw_rule(layer: &PdfLayerReference, rule: &Rule) {
    layer.set_outline_color(color(rule.color));
    layer.set_outline_thickness(rule.thickness);
    layer.add_line(Line {
        points: vec![
            (Point::new(mm(rule.x1), flip(rule.y1)), false),
            (Point::new(mm(rule.x2), flip(rule.y2)), false),
        ],
        is_closed: false,
    });
}

fn draw_text(layer: &PdfLayerReference, fonts: &Fonts, run: &TextRun) {
    layer.set_fill_color(color(run.color));
    layer.use_text(
        printable(&run.text),
        run.size,
        mm(run.left()),
        flip(run.y),
        fonts.get(run.weight),
    );
}

/// Renders the layout to PDF bytes.
pub fn render_pdf(layout: &DocumentLayout) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(layout.title.as_str(), mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER);
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(ReportError::pdf)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(ReportError::pdf)?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), LAYER);
            doc.get_page(page_index).get_layer(layer_index)
        };
        for block in &page.blocks {
            match block {
                Block::Rect(rect) => draw_rect(&layer, rect),
                Block::Rule(rule) => draw_rule(&layer, rule),
                Block::Text(run) => draw_text(&layer, &fonts, run),
            }
        }
    }

    let bytes = doc.save_to_bytes().map_err(ReportError::pdf)?;
    tracing::debug!(pages = layout.pages.len(), bytes = bytes.len(), "Rendered PDF");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typographic_marks_become_ascii() {
        assert_eq!(
            printable("districts\u{2014}our best • month"),
            "districts-our best | month"
        );
        assert_eq!(printable("California\u{2019}s"), "California's");
    }

    #[test]
    fn flip_maps_top_to_page_height() {
        assert!((flip(0.0).0 - mm(PAGE_HEIGHT).0).abs() < 1e-4);
        assert!(flip(PAGE_HEIGHT).0.abs() < 1e-4);
    }
}
