//! Terminal tables for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{SearchHit, SectionCount, TabRow, ValidationReport};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn section_table(sections: &[SectionCount]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Collection"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total = 0usize;
    for row in sections {
        total += row.records;
        table.add_row(vec![
            Cell::new(row.section),
            Cell::new(row.collection),
            Cell::new(row.records),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn problem_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Path"), header_cell("Problem")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, problem) in report.problems.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&problem.path).fg(Color::Yellow),
            Cell::new(&problem.message),
        ]);
    }
    table
}

pub fn search_table(hits: &[SearchHit]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Id"), header_cell("Title"), header_cell("Detail")]);
    apply_table_style(&mut table);
    for hit in hits {
        table.add_row(vec![
            Cell::new(&hit.id).fg(Color::Cyan),
            Cell::new(&hit.title),
            Cell::new(&hit.detail),
        ]);
    }
    table
}

pub fn print_validation(report: &ValidationReport) {
    println!("Content: {}", report.source);
    if report.is_valid() {
        println!("{}", section_table(&report.sections));
        println!("Content is valid.");
    } else {
        println!("{}", problem_table(report));
        println!("{} problem(s) found.", report.problems.len());
    }
}

pub fn print_search(query: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No results for \"{query}\"");
    } else {
        println!("{}", search_table(hits));
        println!("{} match(es).", hits.len());
    }
}

/// One line per tab, the initial tab marked with `*`.
pub fn tab_lines(rows: &[TabRow]) -> String {
    let width = rows.iter().map(|row| row.id.len()).max().unwrap_or(0);
    rows.iter()
        .map(|row| {
            let marker = if row.initial { '*' } else { ' ' };
            format!("{marker} {:<width$}  {}", row.id, row.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
