//! Number formatting for cards, tables and charts.
//!
//! All functions are total: non-finite input renders as [`NOT_AVAILABLE`].

/// Rendering of NaN and infinities.
pub const NOT_AVAILABLE: &str = "n/a";

/// Inserts `,` every three digits of an unsigned digit string.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Sign prefix for a value that is still negative after rounding.
fn sign(value: f64) -> &'static str {
    if value.round() < 0.0 { "-" } else { "" }
}

/// en-US grouping, rounded to a whole number: `56300.0` → `56,300`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{}{}", sign(value), group_digits(&format!("{:.0}", value.abs().round())))
}

/// Whole-dollar currency: `-21317.0` → `-$21,317`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{}${}", sign(value), group_digits(&format!("{:.0}", value.abs().round())))
}

const COMPACT_UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// One decimal at most, trailing `.0` dropped.
fn trim_one_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// Abbreviated currency: `$11M`, `$152.5M`, `$105.5K`, `$950`.
pub fn format_currency_compact(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let magnitude = value.abs();
    let prefix = format!("{}$", sign(value));
    for (position, (scale, suffix)) in COMPACT_UNITS.iter().enumerate() {
        if magnitude < *scale {
            continue;
        }
        let scaled = magnitude / scale;
        // 999_960 would otherwise print as "$1000K".
        if position > 0 && (scaled * 10.0).round() >= 10_000.0 {
            let (larger_scale, larger_suffix) = COMPACT_UNITS[position - 1];
            return format!(
                "{prefix}{}{larger_suffix}",
                trim_one_decimal(magnitude / larger_scale)
            );
        }
        return format!("{prefix}{}{suffix}", trim_one_decimal(scaled));
    }
    if magnitude.round() >= 1000.0 {
        return format!("{prefix}1K");
    }
    format!("{prefix}{:.0}", magnitude.round())
}

/// Fixed decimals with a percent sign: `(39.24, 1)` → `39.2%`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    // Half away from zero; a rounded `-0.0` prints without a sign.
    let factor = 10_f64.powi(decimals.min(15) as i32);
    let rounded = (value * factor).round() / factor;
    let rounded = if !rounded.is_finite() {
        value
    } else if rounded == 0.0 {
        0.0
    } else {
        rounded
    };
    format!("{rounded:.decimals$}%")
}

/// Whole percent with an explicit sign for growth figures: `+603%`.
pub fn format_signed_percentage(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let rounded = value.round();
    if rounded > 0.0 {
        format!("+{rounded:.0}%")
    } else if rounded < 0.0 {
        format!("{rounded:.0}%")
    } else {
        "0%".to_string()
    }
}
