//! Text fields exposed to the search box of each searchable panel.

use std::borrow::Cow;

use crate::legal::{LegalCase, Regulation, StateMandate};
use crate::market::Competitor;

/// A record with a fixed, ordered set of human-readable fields.
///
/// The joined text is deterministic for a given record, so filtering the
/// same collection twice with the same query always agrees.
pub trait SearchableRecord {
    /// Fields eligible for matching, in display order.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// All fields joined with a single space.
    fn search_text(&self) -> String {
        self.search_fields().join(" ")
    }
}

impl SearchableRecord for LegalCase {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.jurisdiction.as_str()),
            Cow::Borrowed(self.court.as_str()),
            Cow::Borrowed(self.date.as_str()),
            Cow::Borrowed(self.citation.as_str()),
        ];
        fields.extend(self.tags.iter().map(|tag| Cow::Borrowed(tag.as_str())));
        fields
    }
}

impl SearchableRecord for Regulation {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.jurisdiction.as_str()),
            Cow::Borrowed(self.kind.label()),
            Cow::Borrowed(self.status.label()),
        ];
        fields.extend(self.implications.iter().map(|item| Cow::Borrowed(item.as_str())));
        fields
    }
}

impl SearchableRecord for StateMandate {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.state.as_str()),
            Cow::Owned(self.year.to_string()),
            Cow::Borrowed(self.statute.as_str()),
        ];
        if let Some(act) = &self.act {
            fields.push(Cow::Borrowed(act.as_str()));
        }
        fields
    }
}

impl SearchableRecord for Competitor {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.focus.as_str()),
        ];
        fields.extend(self.strengths.iter().map(|item| Cow::Borrowed(item.as_str())));
        fields.extend(self.weaknesses.iter().map(|item| Cow::Borrowed(item.as_str())));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legal::CaseStatus;

    fn case(tags: &[&str]) -> LegalCase {
        LegalCase {
            id: "ca-doe-2023-001".to_string(),
            title: "Doe v. District".to_string(),
            jurisdiction: "CA".to_string(),
            court: "Cal. Ct. App.".to_string(),
            date: "2023-11-14".to_string(),
            citation: "123 Cal.App.5th 456".to_string(),
            status: CaseStatus::Precedential,
            url: "https://example.org".to_string(),
            summary: "Summary".to_string(),
            relevance: "Relevance".to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            key_points: vec![],
        }
    }

    #[test]
    fn case_text_joins_fields_in_order() {
        let text = case(&["duty-of-care", "privacy"]).search_text();
        assert_eq!(
            text,
            "Doe v. District CA Cal. Ct. App. 2023-11-14 123 Cal.App.5th 456 duty-of-care privacy"
        );
    }

    #[test]
    fn summary_is_not_searchable() {
        let text = case(&[]).search_text();
        assert!(!text.contains("Summary"));
    }

    #[test]
    fn mandate_text_includes_year_and_optional_act() {
        let mandate = StateMandate {
            state: "Florida".to_string(),
            year: 2018,
            statute: "Fla. Admin. Code 6A-1.0018".to_string(),
            act: Some("Public Safety Act".to_string()),
            significance: None,
            requirements: vec![],
        };
        assert_eq!(
            mandate.search_text(),
            "Florida 2018 Fla. Admin. Code 6A-1.0018 Public Safety Act"
        );
    }
}
