//! The fixed data snapshot behind the December 2025 newsletter.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use vcb_model::{ConfigurationError, Problems};

use crate::palette::BrandColor;

const NEWSLETTER_JSON: &str = include_str!("../data/newsletter.json");

static SNAPSHOT: OnceLock<NewsletterSnapshot> = OnceLock::new();

/// Allowed gap between a chart's "Total" bar and the sum of its months.
const TOTAL_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewsletterSnapshot {
    pub company: String,
    pub issue: Issue,
    pub title: String,
    pub subtitle: String,
    pub metrics: Vec<Metric>,
    pub traction: TractionTable,
    pub charts: ChartGrid,
    pub highlights: Highlights,
    pub outlook: Outlook,
    pub signature: Signature,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Issue {
    pub label: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TractionTable {
    pub title: String,
    pub rows: Vec<TractionRow>,
}

/// One signed customer. Money in US dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TractionRow {
    pub month: String,
    pub customer: String,
    pub districts: u32,
    pub students: u64,
    pub acv: u64,
}

impl TractionTable {
    pub const COLUMNS: [&'static str; 5] = ["Month", "Customer", "Districts", "Students", "ACV"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartGrid {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartSeries {
    pub title: String,
    pub values: Vec<f64>,
    pub color: BrandColor,
    pub value_format: ValueFormat,
}

/// How a bar's value label is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueFormat {
    /// Shortest decimal form: `29`, `12.5`.
    Plain,
    /// Always one decimal: `12.4`, `20.0`.
    OneDecimal,
    /// Whole dollars: `$48`, `$106`.
    Dollars,
}

impl ValueFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            Self::Plain if value.fract() == 0.0 => format!("{value:.0}"),
            Self::Plain => value.to_string(),
            Self::OneDecimal => format!("{value:.1}"),
            Self::Dollars => format!("${:.0}", value.round()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Highlights {
    pub title: String,
    pub bullets: Vec<LeadBullet>,
}

/// A bullet whose opening phrase is set in bold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LeadBullet {
    pub lead: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Outlook {
    pub title: String,
    pub intro: String,
    pub bullets: Vec<String>,
    pub closing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Signature {
    pub name: String,
    pub title: String,
}

impl NewsletterSnapshot {
    /// Parses and validates a snapshot.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|source| ConfigurationError::Parse { source })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut problems = Problems::new();
        problems.require_text("company", &self.company);
        problems.require_text("issue.date", &self.issue.date);
        problems.require_text("title", &self.title);
        problems.require_non_empty("metrics", &self.metrics);
        problems.require_non_empty("traction.rows", &self.traction.rows);
        for (index, row) in self.traction.rows.iter().enumerate() {
            problems.require_text(format!("traction.rows[{index}].customer"), &row.customer);
        }

        let labels = &self.charts.labels;
        let has_total = labels.last().is_some_and(|label| label == "Total");
        for (index, series) in self.charts.series.iter().enumerate() {
            let path = format!("charts.series[{index}]");
            if series.values.len() != labels.len() {
                problems.push(
                    &path,
                    format!(
                        "{} values for {} labels",
                        series.values.len(),
                        labels.len()
                    ),
                );
                continue;
            }
            if let Some((total, months)) = series.values.split_last()
                && has_total
            {
                let sum: f64 = months.iter().sum();
                if (sum - total).abs() > TOTAL_TOLERANCE {
                    problems.push(&path, format!("total {total} does not equal {sum}"));
                }
            }
        }

        problems.require_non_empty("highlights.bullets", &self.highlights.bullets);
        problems.require_text("outlook.title", &self.outlook.title);
        problems.require_text("signature.name", &self.signature.name);
        problems.finish()
    }

    pub fn total_districts(&self) -> u32 {
        self.traction.rows.iter().map(|row| row.districts).sum()
    }

    pub fn total_students(&self) -> u64 {
        self.traction.rows.iter().map(|row| row.students).sum()
    }

    pub fn total_acv(&self) -> u64 {
        self.traction.rows.iter().map(|row| row.acv).sum()
    }
}

/// The embedded snapshot, parsed on first use.
pub fn snapshot() -> Result<&'static NewsletterSnapshot, ConfigurationError> {
    if let Some(snapshot) = SNAPSHOT.get() {
        return Ok(snapshot);
    }
    let parsed = NewsletterSnapshot::from_json_str(NEWSLETTER_JSON)?;
    Ok(SNAPSHOT.get_or_init(|| parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_snapshot_is_valid() {
        let snapshot = snapshot().unwrap();
        assert_eq!(snapshot.issue.date, "December 2025");
        assert_eq!(snapshot.traction.rows.len(), 5);
        assert_eq!(snapshot.charts.series.len(), 4);
    }

    #[test]
    fn table_totals_match_headline_metrics() {
        let snapshot = snapshot().unwrap();
        assert_eq!(snapshot.total_districts(), 29);
        assert_eq!(snapshot.total_students(), 56_300);
        assert_eq!(snapshot.total_acv(), 105_500);
    }

    #[test]
    fn value_formats() {
        assert_eq!(ValueFormat::Plain.apply(29.0), "29");
        assert_eq!(ValueFormat::Plain.apply(12.5), "12.5");
        assert_eq!(ValueFormat::OneDecimal.apply(20.0), "20.0");
        assert_eq!(ValueFormat::OneDecimal.apply(12.4), "12.4");
        assert_eq!(ValueFormat::Dollars.apply(48.0), "$48");
        assert_eq!(ValueFormat::Dollars.apply(12.5), "$13");
    }

    #[test]
    fn inconsistent_total_is_reported() {
        let mut snapshot = snapshot().unwrap().clone();
        snapshot.charts.series[0].values[4] = 30.0;
        let err = snapshot.validate().unwrap_err();
        assert_eq!(err.problems().len(), 1);
        assert_eq!(err.problems()[0].path, "charts.series[0]");
    }

    #[test]
    fn short_series_is_reported() {
        let mut snapshot = snapshot().unwrap().clone();
        snapshot.charts.series[1].values.pop();
        assert!(snapshot.validate().is_err());
    }
}
