//! US-Letter page layout shared by the newsletter and the dossier.
//!
//! Positions are in points with the origin at the top-left corner of the
//! page. The PDF backend flips them onto its bottom-left coordinate space.

use vcb_core::{BarChartGeometry, format_currency, format_number};

use crate::palette::{self, Rgb8};
use crate::snapshot::{ChartSeries, NewsletterSnapshot, TractionTable};

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 40.0;
pub(crate) const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
pub(crate) const FOOTER_Y: f32 = PAGE_HEIGHT - 28.0;

/// Average advance of a Helvetica glyph, as a fraction of the font size.
const REGULAR_ADVANCE: f32 = 0.50;
const BOLD_ADVANCE: f32 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A single line of text. `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgb8,
    pub align: Align,
    pub text: String,
}

impl TextRun {
    /// Left edge after alignment.
    pub fn left(&self) -> f32 {
        let width = text_width(&self.text, self.size, self.weight);
        match self.align {
            Align::Left => self.x,
            Align::Center => self.x - width / 2.0,
            Align::Right => self.x - width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub thickness: f32,
    pub color: Rgb8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(TextRun),
    Rect(FilledRect),
    Rule(Rule),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    /// All text on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|run| run.text.contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub title: String,
    pub pages: Vec<Page>,
}

/// Estimated width of `text` in points.
pub fn text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    let advance = match weight {
        FontWeight::Regular => REGULAR_ADVANCE,
        FontWeight::Bold => BOLD_ADVANCE,
    };
    text.chars().count() as f32 * size * advance
}

/// A styled fragment of a wrapped line, offset from the line start.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub offset: f32,
    pub weight: FontWeight,
    pub text: String,
}

/// Greedy word wrap over runs of differing weight.
pub fn wrap_runs(runs: &[(&str, FontWeight)], max_width: f32, size: f32) -> Vec<Vec<Span>> {
    let space = text_width(" ", size, FontWeight::Regular);
    let mut lines: Vec<Vec<Span>> = Vec::new();
    let mut line: Vec<Span> = Vec::new();
    let mut cursor = 0.0_f32;

    for (text, weight) in runs {
        for word in text.split_whitespace() {
            let width = text_width(word, size, *weight);
            let gap = if line.is_empty() { 0.0 } else { space };
            if !line.is_empty() && cursor + gap + width > max_width {
                lines.push(std::mem::take(&mut line));
                cursor = 0.0;
            }
            let gap = if line.is_empty() { 0.0 } else { space };
            match line.last_mut() {
                Some(last) if last.weight == *weight => {
                    last.text.push(' ');
                    last.text.push_str(word);
                }
                _ => line.push(Span {
                    offset: cursor,
                    weight: *weight,
                    text: if gap > 0.0 {
                        format!(" {word}")
                    } else {
                        word.to_string()
                    },
                }),
            }
            cursor += gap + width;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Wraps plain text into lines.
pub fn wrap_text(text: &str, max_width: f32, size: f32, weight: FontWeight) -> Vec<String> {
    wrap_runs(&[(text, weight)], max_width, size)
        .into_iter()
        .map(|spans| spans.into_iter().map(|span| span.text).collect())
        .collect()
}

/// Font size, weight and color of a text run.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Style {
    pub(crate) size: f32,
    pub(crate) weight: FontWeight,
    pub(crate) color: Rgb8,
}

pub(crate) const fn style(size: f32, weight: FontWeight, color: Rgb8) -> Style {
    Style {
        size,
        weight,
        color,
    }
}

pub(crate) const BODY: Style = style(9.5, FontWeight::Regular, palette::TEXT);
pub(crate) const FOOTNOTE: Style = style(7.0, FontWeight::Regular, palette::GRAY);
pub(crate) const SECTION_TITLE: Style = style(12.0, FontWeight::Bold, palette::SECONDARY);
const CHART_TITLE: Style = style(9.0, FontWeight::Bold, palette::SECONDARY);
const AXIS_LABEL: Style = style(6.0, FontWeight::Regular, palette::GRAY);
const VALUE_LABEL: Style = style(6.0, FontWeight::Regular, palette::PRIMARY);
const TABLE_HEADER: Style = style(8.0, FontWeight::Bold, palette::WHITE);
const METRIC_VALUE: Style = style(18.0, FontWeight::Bold, palette::PRIMARY);
const METRIC_LABEL: Style = style(8.0, FontWeight::Regular, palette::GRAY);

/// Draws top-down on one page, tracking the next free baseline.
pub(crate) struct PageWriter {
    pub(crate) page: Page,
    pub(crate) y: f32,
}

impl PageWriter {
    pub(crate) fn new() -> Self {
        Self {
            page: Page::default(),
            y: MARGIN,
        }
    }

    pub(crate) fn text(&mut self, x: f32, y: f32, style: Style, align: Align, text: &str) {
        self.page.blocks.push(Block::Text(TextRun {
            x,
            y,
            size: style.size,
            weight: style.weight,
            color: style.color,
            align,
            text: text.to_string(),
        }));
    }

    pub(crate) fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb8) {
        self.page.blocks.push(Block::Rect(FilledRect {
            x,
            y,
            width,
            height,
            color,
        }));
    }

    pub(crate) fn rule(&mut self, y: f32, thickness: f32, color: Rgb8) {
        self.page.blocks.push(Block::Rule(Rule {
            x1: MARGIN,
            y1: y,
            x2: PAGE_WIDTH - MARGIN,
            y2: y,
            thickness,
            color,
        }));
    }

    /// Writes wrapped runs starting at `x`, advancing the cursor.
    fn paragraph(&mut self, x: f32, width: f32, body: Style, runs: &[(&str, FontWeight)]) {
        let leading = body.size * 1.4;
        for line in wrap_runs(runs, width, body.size) {
            self.y += leading;
            for span in line {
                let run_style = style(body.size, span.weight, body.color);
                self.text(x + span.offset, self.y, run_style, Align::Left, &span.text);
            }
        }
    }

    pub(crate) fn section_title(&mut self, title: &str) {
        self.y += 24.0;
        self.text(MARGIN, self.y, SECTION_TITLE, Align::Left, title);
        self.y += 4.0;
    }

    fn bullet(&mut self, runs: &[(&str, FontWeight)]) {
        let size = 8.5;
        self.y += 4.0;
        let top = self.y;
        self.rect(MARGIN + 2.0, top + size * 1.4 - 4.5, 3.0, 3.0, palette::ACCENT);
        let body = style(size, FontWeight::Regular, palette::TEXT);
        self.paragraph(MARGIN + 12.0, CONTENT_WIDTH - 12.0, body, runs);
    }

    pub(crate) fn footer(&mut self, footer: &str, number: usize, count: usize) {
        self.rule(FOOTER_Y - 12.0, 0.5, palette::PANEL);
        self.text(PAGE_WIDTH / 2.0, FOOTER_Y, FOOTNOTE, Align::Center, footer);
        let page_number = format!("{number} / {count}");
        self.text(PAGE_WIDTH - MARGIN, FOOTER_Y, FOOTNOTE, Align::Right, &page_number);
    }
}

fn header(writer: &mut PageWriter, snapshot: &NewsletterSnapshot) {
    let top = writer.y;
    let right = PAGE_WIDTH - MARGIN;
    let company = style(20.0, FontWeight::Bold, palette::PRIMARY);
    let issue = style(14.0, FontWeight::Bold, palette::SECONDARY);
    let date = style(10.0, FontWeight::Regular, palette::GRAY);
    writer.text(MARGIN, top + 20.0, company, Align::Left, &snapshot.company);
    writer.text(right, top + 14.0, issue, Align::Right, &snapshot.issue.label);
    writer.text(right, top + 28.0, date, Align::Right, &snapshot.issue.date);
    writer.y = top + 40.0;
    writer.rule(writer.y, 2.0, palette::ACCENT);
    writer.y += 6.0;
}

fn metrics(writer: &mut PageWriter, snapshot: &NewsletterSnapshot) {
    let count = snapshot.metrics.len().max(1) as f32;
    let gap = 10.0;
    let width = (CONTENT_WIDTH - gap * (count - 1.0)) / count;
    let top = writer.y + 14.0;
    let height = 50.0;
    for (index, metric) in snapshot.metrics.iter().enumerate() {
        let x = MARGIN + index as f32 * (width + gap);
        let center = x + width / 2.0;
        writer.rect(x, top, width, height, palette::PANEL);
        writer.text(center, top + 24.0, METRIC_VALUE, Align::Center, &metric.value);
        writer.text(center, top + 40.0, METRIC_LABEL, Align::Center, &metric.label);
    }
    writer.y = top + height;
}

/// Column widths of the traction table.
const TABLE_COLUMNS: [f32; 5] = [50.0, 210.0, 80.0, 96.0, 96.0];
const ROW_HEIGHT: f32 = 16.0;

fn traction_table(writer: &mut PageWriter, table: &TractionTable) {
    writer.section_title(&table.title);
    let mut top = writer.y + 6.0;

    writer.rect(MARGIN, top, CONTENT_WIDTH, ROW_HEIGHT, palette::PRIMARY);
    let mut x = MARGIN;
    for (label, width) in TractionTable::COLUMNS.iter().zip(TABLE_COLUMNS) {
        writer.text(x + 6.0, top + 11.0, TABLE_HEADER, Align::Left, label);
        x += width;
    }
    top += ROW_HEIGHT;

    for (index, row) in table.rows.iter().enumerate() {
        if index % 2 == 1 {
            writer.rect(MARGIN, top, CONTENT_WIDTH, ROW_HEIGHT, palette::ROW_ALT);
        }
        let cells = [
            (row.month.clone(), FontWeight::Bold),
            (row.customer.clone(), FontWeight::Regular),
            (format_number(f64::from(row.districts)), FontWeight::Regular),
            (format_number(row.students as f64), FontWeight::Regular),
            (format_currency(row.acv as f64), FontWeight::Regular),
        ];
        let mut x = MARGIN;
        for ((text, weight), width) in cells.iter().zip(TABLE_COLUMNS) {
            let cell = style(8.0, *weight, palette::PRIMARY);
            writer.text(x + 6.0, top + 11.0, cell, Align::Left, text);
            x += width;
        }
        top += ROW_HEIGHT;
    }
    writer.y = top;
}

fn mini_chart(writer: &mut PageWriter, x: f32, top: f32, labels: &[String], series: &ChartSeries) {
    writer.text(x, top + 9.0, CHART_TITLE, Align::Left, &series.title);
    let origin_y = top + 14.0;
    let geometry = BarChartGeometry::mini();
    let color = series.color.rgb();
    for (bar, value) in geometry.bars(&series.values).iter().zip(&series.values) {
        writer.rect(x + bar.x, origin_y + bar.y, bar.width, bar.height, color);
        let label = series.value_format.apply(*value);
        let label_y = origin_y + bar.y - 2.0;
        writer.text(x + bar.center_x, label_y, VALUE_LABEL, Align::Center, &label);
    }
    for (bar, label) in geometry.bars(&series.values).iter().zip(labels) {
        let label_y = origin_y + geometry.axis_label_y();
        writer.text(x + bar.center_x, label_y, AXIS_LABEL, Align::Center, label);
    }
}

fn chart_grid(writer: &mut PageWriter, snapshot: &NewsletterSnapshot) {
    let geometry = BarChartGeometry::mini();
    let cell_height = geometry.height + 24.0;
    let column_x = [MARGIN, MARGIN + CONTENT_WIDTH / 2.0 + 8.0];
    let top = writer.y + 14.0;
    for (index, series) in snapshot.charts.series.iter().enumerate() {
        let x = column_x[index % 2];
        let y = top + (index / 2) as f32 * cell_height;
        mini_chart(writer, x, y, &snapshot.charts.labels, series);
    }
    let rows = snapshot.charts.series.len().div_ceil(2) as f32;
    writer.y = top + rows * cell_height;
}

/// Lays out the snapshot on two pages, breaking before the outlook.
pub fn compose(snapshot: &NewsletterSnapshot) -> DocumentLayout {
    let mut first = PageWriter::new();
    header(&mut first, snapshot);
    let title = style(18.0, FontWeight::Bold, palette::PRIMARY);
    first.paragraph(MARGIN, CONTENT_WIDTH, title, &[(snapshot.title.as_str(), FontWeight::Bold)]);
    first.y += 16.0;
    let subtitle = style(11.0, FontWeight::Regular, palette::SECONDARY);
    first.text(MARGIN, first.y, subtitle, Align::Left, &snapshot.subtitle);
    metrics(&mut first, snapshot);
    traction_table(&mut first, &snapshot.traction);
    chart_grid(&mut first, snapshot);
    first.section_title(&snapshot.highlights.title);
    for bullet in &snapshot.highlights.bullets {
        let lead = format!("{}:", bullet.lead);
        first.bullet(&[
            (lead.as_str(), FontWeight::Bold),
            (bullet.text.as_str(), FontWeight::Regular),
        ]);
    }
    if first.y > FOOTER_Y - 20.0 {
        tracing::warn!(bottom = first.y, "Newsletter first page overflows into the footer");
    }

    let mut second = PageWriter::new();
    second.y -= 24.0;
    let outlook = &snapshot.outlook;
    second.section_title(&outlook.title);
    second.paragraph(MARGIN, CONTENT_WIDTH, BODY, &[(outlook.intro.as_str(), FontWeight::Regular)]);
    for item in &outlook.bullets {
        second.bullet(&[(item.as_str(), FontWeight::Regular)]);
    }
    second.y += 6.0;
    let closing = [(outlook.closing.as_str(), FontWeight::Regular)];
    second.paragraph(MARGIN, CONTENT_WIDTH, BODY, &closing);

    second.y += 36.0;
    let name = style(11.0, FontWeight::Bold, palette::PRIMARY);
    let role = style(9.0, FontWeight::Regular, palette::GRAY);
    second.text(MARGIN, second.y, name, Align::Left, &snapshot.signature.name);
    second.y += 14.0;
    second.text(MARGIN, second.y, role, Align::Left, &snapshot.signature.title);

    let mut writers = [first, second];
    let count = writers.len();
    for (index, writer) in writers.iter_mut().enumerate() {
        writer.footer(&snapshot.footer, index + 1, count);
    }

    DocumentLayout {
        title: format!("{} {}", snapshot.issue.label, snapshot.issue.date),
        pages: writers.into_iter().map(|writer| writer.page).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::snapshot;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("one two three four five six", 40.0, 10.0, FontWeight::Regular);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 10.0, FontWeight::Regular) <= 40.0 + 1e-3, "{line}");
        }
        assert_eq!(lines.join(" "), "one two three four five six");
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_text("a supercalifragilistic b", 30.0, 10.0, FontWeight::Regular);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn bold_lead_stays_on_first_line() {
        let lines = wrap_runs(
            &[("Lead:", FontWeight::Bold), ("rest of the text", FontWeight::Regular)],
            500.0,
            9.0,
        );
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][0].weight, FontWeight::Bold);
        assert_eq!(lines[0][0].text, "Lead:");
        assert_eq!(lines[0][1].text, " rest of the text");
        assert!(lines[0][1].offset > 0.0);
    }

    #[test]
    fn two_pages_with_break_before_outlook() {
        let layout = compose(snapshot().unwrap());
        assert_eq!(layout.pages.len(), 2);
        assert!(layout.pages[0].contains_text("What This Means"));
        assert!(!layout.pages[0].contains_text("Looking Ahead"));
        assert!(layout.pages[1].contains_text("Looking Ahead"));
        assert!(layout.pages[1].contains_text("Adam Bangerter"));
    }

    #[test]
    fn first_page_stays_above_footer() {
        let layout = compose(snapshot().unwrap());
        let footer_top = FOOTER_Y - 12.0;
        for run in layout.pages[0].texts() {
            if run.text.contains("Confidential") || run.text.contains(" / ") {
                continue;
            }
            assert!(run.y < footer_top, "{} at {}", run.text, run.y);
        }
    }

    #[test]
    fn table_rows_alternate_shading() {
        let layout = compose(snapshot().unwrap());
        let shaded = layout.pages[0]
            .blocks
            .iter()
            .filter(|block| matches!(block, Block::Rect(rect) if rect.color == palette::ROW_ALT))
            .count();
        assert_eq!(shaded, 2);
    }

    #[test]
    fn chart_value_labels_use_series_format() {
        let layout = compose(snapshot().unwrap());
        let page = &layout.pages[0];
        assert!(page.texts().any(|run| run.text == "12.4"));
        assert!(page.texts().any(|run| run.text == "$48"));
        assert!(page.texts().any(|run| run.text == "$12,500"));
    }

    #[test]
    fn every_page_has_a_footer() {
        let layout = compose(snapshot().unwrap());
        for (index, page) in layout.pages.iter().enumerate() {
            assert!(page.contains_text("Private Investor Materials"));
            assert!(page.contains_text(&format!("{} / 2", index + 1)));
        }
    }
}
