//! Load-time validation of the content document.
//!
//! Every rule runs and every finding is collected, so a broken document
//! reports all of its problems at once.

use std::collections::HashSet;

use crate::document::{ContentDocument, Source};
use crate::error::{ConfigurationError, Problem, Result};

/// Tolerance applied to the use-of-funds percentage total.
pub const FUNDS_TOLERANCE: f64 = 0.5;

/// Collects validation problems under dotted paths.
#[derive(Debug, Default)]
pub struct Problems {
    found: Vec<Problem>,
}

impl Problems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.found.push(Problem::new(path, message));
    }

    /// Flags blank (empty or whitespace-only) required text.
    pub fn require_text(&mut self, path: impl Into<String>, value: &str) {
        if value.trim().is_empty() {
            self.push(path, "must not be blank");
        }
    }

    /// Flags links that are not absolute http(s) URLs.
    pub fn require_url(&mut self, path: impl Into<String>, value: &str) {
        if !(value.starts_with("http://") || value.starts_with("https://")) {
            self.push(path, format!("'{value}' is not an http(s) URL"));
        }
    }

    pub fn require_non_empty<T>(&mut self, path: impl Into<String>, items: &[T]) {
        if items.is_empty() {
            self.push(path, "must contain at least one entry");
        }
    }

    /// Flags keys that appear more than once, in input order.
    pub fn require_unique<'a>(&mut self, path: &str, keys: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for (index, key) in keys.into_iter().enumerate() {
            if !seen.insert(key) {
                self.push(format!("{path}[{index}]"), format!("duplicate id '{key}'"));
            }
        }
    }

    /// Flags a series whose keys do not strictly increase.
    pub fn require_increasing(&mut self, path: &str, keys: impl IntoIterator<Item = u32>) {
        let mut previous: Option<u32> = None;
        for (index, key) in keys.into_iter().enumerate() {
            if let Some(prev) = previous
                && key <= prev
            {
                self.push(
                    format!("{path}[{index}]"),
                    format!("{key} does not follow {prev} in increasing order"),
                );
            }
            previous = Some(key);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    /// Converts the collected findings into a result.
    pub fn finish(self) -> Result<()> {
        if self.found.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::Invalid {
                problems: self.found,
            })
        }
    }
}

fn check_sources(problems: &mut Problems, path: &str, sources: &[Source]) {
    for (index, source) in sources.iter().enumerate() {
        problems.require_text(format!("{path}[{index}].title"), &source.title);
        if let Some(url) = &source.url {
            problems.require_url(format!("{path}[{index}].url"), url);
        }
    }
}

/// Validates a parsed document against every content rule.
pub fn validate_document(doc: &ContentDocument) -> Result<()> {
    let mut problems = Problems::new();

    let brand = &doc.brand;
    problems.require_text("brand.company", &brand.company);
    problems.require_text("brand.product", &brand.product);
    problems.require_text("brand.confidentiality", &brand.confidentiality);

    let crisis = &doc.crisis;
    problems.require_text("crisis.title", &crisis.title);
    problems.require_text("crisis.overview", &crisis.overview);
    for (index, stat) in crisis.key_stats.iter().enumerate() {
        problems.require_text(format!("crisis.keyStats[{index}].label"), &stat.label);
        problems.require_text(format!("crisis.keyStats[{index}].value"), &stat.value);
    }
    problems.require_increasing(
        "crisis.suicideRates",
        crisis.suicide_rates.iter().map(|point| u32::from(point.year)),
    );
    problems.require_increasing(
        "crisis.schoolShootings",
        crisis.school_shootings.iter().map(|point| u32::from(point.year)),
    );
    check_sources(&mut problems, "crisis.sources", &crisis.sources);

    let impact = &doc.impact;
    problems.require_text("impact.title", &impact.title);
    problems.require_unique("impact.forces", impact.forces.iter().map(|force| force.id.as_str()));
    for (index, force) in impact.forces.iter().enumerate() {
        problems.require_text(format!("impact.forces[{index}].title"), &force.title);
    }
    problems.require_increasing(
        "impact.mandateAdoption",
        impact.mandate_adoption.iter().map(|point| u32::from(point.year)),
    );
    check_sources(&mut problems, "impact.sources", &impact.sources);

    let solution = &doc.solution;
    problems.require_text("solution.title", &solution.title);
    problems.require_text("solution.mission", &solution.mission);
    check_sources(&mut problems, "solution.sources", &solution.sources);

    let mandates = &doc.mandates;
    problems.require_text("mandates.title", &mandates.title);
    problems.require_non_empty("mandates.states", &mandates.states);
    problems.require_unique(
        "mandates.states",
        mandates.states.iter().map(|mandate| mandate.state.as_str()),
    );
    for (index, mandate) in mandates.states.iter().enumerate() {
        problems.require_text(format!("mandates.states[{index}].state"), &mandate.state);
        problems.require_text(format!("mandates.states[{index}].statute"), &mandate.statute);
    }
    for (index, bill) in mandates.california.iter().enumerate() {
        problems.require_text(format!("mandates.california[{index}].bill"), &bill.bill);
        problems.require_url(format!("mandates.california[{index}].url"), &bill.url);
    }
    for (index, guidance) in mandates.federal_guidance.iter().enumerate() {
        if let Some(url) = &guidance.url {
            problems.require_url(format!("mandates.federalGuidance[{index}].url"), url);
        }
    }
    check_sources(&mut problems, "mandates.sources", &mandates.sources);

    let legal = &doc.legal;
    problems.require_non_empty("legal.cases", &legal.cases);
    problems.require_unique("legal.cases", legal.cases.iter().map(|case| case.id.as_str()));
    for (index, case) in legal.cases.iter().enumerate() {
        problems.require_text(format!("legal.cases[{index}].id"), &case.id);
        problems.require_text(format!("legal.cases[{index}].title"), &case.title);
        problems.require_text(format!("legal.cases[{index}].citation"), &case.citation);
        problems.require_url(format!("legal.cases[{index}].url"), &case.url);
    }
    problems.require_unique(
        "legal.regulations",
        legal.regulations.iter().map(|regulation| regulation.id.as_str()),
    );
    for (index, regulation) in legal.regulations.iter().enumerate() {
        problems.require_text(format!("legal.regulations[{index}].title"), &regulation.title);
        problems.require_url(format!("legal.regulations[{index}].url"), &regulation.url);
    }

    let market = &doc.market;
    problems.require_text("market.title", &market.title);
    if market.som > market.sam || market.sam > market.tam {
        problems.push("market", "expected SOM <= SAM <= TAM");
    }

    let competition = &doc.competition;
    problems.require_non_empty("competition.competitors", &competition.competitors);
    problems.require_unique(
        "competition.competitors",
        competition.competitors.iter().map(|competitor| competitor.name.as_str()),
    );
    for (index, competitor) in competition.competitors.iter().enumerate() {
        problems.require_text(format!("competition.competitors[{index}].name"), &competitor.name);
        problems.require_url(format!("competition.competitors[{index}].url"), &competitor.url);
    }
    check_sources(&mut problems, "competition.sources", &competition.sources);

    let financials = &doc.financials;
    problems.require_increasing(
        "financials.mrr",
        financials.mrr.iter().map(|point| point.month_number),
    );
    problems.require_increasing(
        "financials.profitability",
        financials.profitability.iter().map(|point| point.month_number),
    );
    problems.require_increasing(
        "financials.milestones",
        financials.milestones.iter().map(|milestone| milestone.month),
    );

    let funding = &doc.funding;
    problems.require_text("funding.stage", &funding.stage);
    problems.require_text("funding.contact.email", &funding.contact.email);
    let total: f64 = funding.use_of_funds.iter().map(|item| item.percentage).sum();
    if (total - 100.0).abs() > FUNDS_TOLERANCE {
        problems.push(
            "funding.useOfFunds",
            format!("percentages sum to {total}, expected 100"),
        );
    }

    for (index, link) in doc.appendix.iter().enumerate() {
        problems.require_text(format!("appendix[{index}].title"), &link.title);
        problems.require_url(format!("appendix[{index}].url"), &link.url);
    }

    if !problems.is_empty() {
        tracing::warn!(count = problems.len(), "Content document failed validation");
    }
    problems.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increasing_series_accepts_gaps() {
        let mut problems = Problems::new();
        problems.require_increasing("series", [2013, 2018, 2020, 2023]);
        assert!(problems.is_empty());
    }

    #[test]
    fn repeated_key_breaks_increasing_series() {
        let mut problems = Problems::new();
        problems.require_increasing("series", [1, 2, 2, 3]);
        let err = problems.finish().unwrap_err();
        assert_eq!(err.problems().len(), 1);
        assert_eq!(err.problems()[0].path, "series[2]");
    }

    #[test]
    fn duplicate_reported_at_second_occurrence() {
        let mut problems = Problems::new();
        problems.require_unique("cases", ["a", "b", "a"]);
        let err = problems.finish().unwrap_err();
        assert_eq!(err.problems()[0].to_string(), "cases[2]: duplicate id 'a'");
    }

    #[test]
    fn url_rule_rejects_relative_and_other_schemes() {
        let mut problems = Problems::new();
        problems.require_url("a", "/glossary");
        problems.require_url("b", "ftp://example.org");
        problems.require_url("c", "https://example.org");
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn whitespace_only_text_is_blank() {
        let mut problems = Problems::new();
        problems.require_text("title", "   ");
        assert_eq!(problems.len(), 1);
    }
}
