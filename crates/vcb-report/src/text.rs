//! Plain-text rendition of the newsletter for terminal preview.

use std::fmt::Write;

use vcb_core::{format_currency, format_number};

use crate::snapshot::{NewsletterSnapshot, TractionTable};

const WIDTH: usize = 78;

fn wrap(out: &mut String, indent: &str, text: &str) {
    let indent_width = indent.chars().count();
    let mut line = String::new();
    let mut line_width = 0;
    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if !line.is_empty() && indent_width + line_width + 1 + word_width > WIDTH {
            let _ = writeln!(out, "{indent}{line}");
            line.clear();
            line_width = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() {
        let _ = writeln!(out, "{indent}{line}");
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.chars().count()));
}

/// Renders the snapshot as wrapped plain text.
pub fn render_text(snapshot: &NewsletterSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} | {} | {}",
        snapshot.company, snapshot.issue.label, snapshot.issue.date
    );
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    wrap(&mut out, "", &snapshot.title);
    let _ = writeln!(out, "{}\n", snapshot.subtitle);

    for metric in &snapshot.metrics {
        let _ = writeln!(out, "  {:>10}  {}", metric.value, metric.label);
    }

    heading(&mut out, &snapshot.traction.title);
    let [month, customer, districts, students, acv] = TractionTable::COLUMNS;
    let _ = writeln!(
        out,
        "{month:<6}{customer:<24}{districts:>10}{students:>10}{acv:>10}"
    );
    for row in &snapshot.traction.rows {
        let _ = writeln!(
            out,
            "{:<6}{:<24}{:>10}{:>10}{:>10}",
            row.month,
            row.customer,
            row.districts,
            format_number(row.students as f64),
            format_currency(row.acv as f64),
        );
    }

    heading(&mut out, "Growth");
    for series in &snapshot.charts.series {
        let points: Vec<String> = snapshot
            .charts
            .labels
            .iter()
            .zip(&series.values)
            .map(|(label, value)| format!("{label} {}", series.value_format.apply(*value)))
            .collect();
        let _ = writeln!(out, "{}: {}", series.title, points.join(", "));
    }

    heading(&mut out, &snapshot.highlights.title);
    for bullet in &snapshot.highlights.bullets {
        wrap(&mut out, "  ", &format!("* {}: {}", bullet.lead, bullet.text));
    }

    let outlook = &snapshot.outlook;
    heading(&mut out, &outlook.title);
    wrap(&mut out, "", &outlook.intro);
    for item in &outlook.bullets {
        wrap(&mut out, "  ", &format!("* {item}"));
    }
    wrap(&mut out, "", &outlook.closing);

    let _ = writeln!(out, "\n{}\n{}", snapshot.signature.name, snapshot.signature.title);
    let _ = writeln!(out, "\n{}", snapshot.footer);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::snapshot;

    #[test]
    fn preview_carries_every_section() {
        let text = render_text(snapshot().unwrap());
        for needle in [
            "December 2025",
            "Traction Highlights",
            "Glenn County, CA",
            "$26,000",
            "ACV ($K): Sep $13, Oct $20, Nov $25, Dec $48, Total $106",
            "What This Means",
            "Looking Ahead",
            "Adam Bangerter",
        ] {
            assert!(text.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn wrap_counts_characters_not_bytes() {
        // 75 columns, but over 100 bytes.
        let text = vec!["a→b"; 19].join(" ");
        let mut out = String::new();
        wrap(&mut out, "", &text);
        assert_eq!(out.lines().count(), 1, "{out}");
        assert_eq!(out.trim_end().chars().count(), 19 * 4 - 1);
    }

    #[test]
    fn lines_fit_the_terminal() {
        let text = render_text(snapshot().unwrap());
        for line in text.lines() {
            // A single word longer than the width is allowed to overflow.
            if line.split_whitespace().count() > 1 {
                assert!(line.chars().count() <= WIDTH, "{line}");
            }
        }
    }
}
