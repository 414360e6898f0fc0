//! Case-insensitive substring search over searchable records.
//!
//! Filtering is recomputed on every keystroke. At dossier scale there is
//! nothing to index.

use vcb_model::SearchableRecord;

/// A trimmed, lower-cased query. Empty means "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The normalized needle.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches<T: SearchableRecord + ?Sized>(&self, record: &T) -> bool {
        self.is_empty() || record.search_text().to_lowercase().contains(&self.needle)
    }
}

/// Records whose joined text contains the query, in input order.
pub fn filter_records<'a, T: SearchableRecord>(query: &SearchQuery, records: &'a [T]) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|record| query.matches(*record)).collect()
}

/// Parses `raw` and filters in one call.
pub fn filter<'a, T: SearchableRecord>(raw: &str, records: &'a [T]) -> Vec<&'a T> {
    filter_records(&SearchQuery::parse(raw), records)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        fields: Vec<String>,
    }

    impl SearchableRecord for Record {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            self.fields.iter().map(|field| Cow::Borrowed(field.as_str())).collect()
        }
    }

    fn record(fields: &[&str]) -> Record {
        Record {
            fields: fields.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn privacy_matches_only_the_tagged_case() {
        let cases = vec![
            record(&["Doe v. District", "CA", "duty-of-care", "records", "privacy"]),
            record(&["Other v. Board", "TX", "statute"]),
        ];
        let found = filter("privacy", &cases);
        assert_eq!(found, vec![&cases[0]]);
    }

    #[test]
    fn query_is_trimmed_and_case_folded() {
        let cases = vec![record(&["Doe v. District"])];
        assert_eq!(filter("  DOE  ", &cases).len(), 1);
        assert_eq!(SearchQuery::parse("  DOE  ").as_str(), "doe");
    }

    #[test]
    fn whitespace_query_returns_everything() {
        let cases = vec![record(&["a"]), record(&["b"])];
        assert_eq!(filter(" \t ", &cases).len(), 2);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let cases = vec![record(&["a"])];
        assert!(filter("zzz", &cases).is_empty());
    }

    #[test]
    fn match_may_span_field_boundary() {
        let cases = vec![record(&["Cal.", "Ct. App."])];
        assert_eq!(filter("cal. ct", &cases).len(), 1);
    }

    fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(
            prop::collection::vec("[a-zA-Z -]{0,12}", 1..4).prop_map(|fields| Record { fields }),
            0..12,
        )
    }

    proptest! {
        #[test]
        fn empty_query_is_identity(records in records_strategy()) {
            let found = filter("", &records);
            prop_assert_eq!(found.len(), records.len());
            for (found, original) in found.iter().zip(&records) {
                prop_assert!(std::ptr::eq(*found, original));
            }
        }

        #[test]
        fn result_is_exactly_the_matching_subsequence(
            records in records_strategy(),
            raw in "[a-zA-Z ]{0,4}",
        ) {
            let needle = raw.trim().to_lowercase();
            let found = filter(&raw, &records);
            let expected: Vec<&Record> = records
                .iter()
                .filter(|record| record.search_text().to_lowercase().contains(&needle))
                .collect();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn filtering_is_idempotent(records in records_strategy(), raw in "[a-z]{0,3}") {
            let query = SearchQuery::parse(&raw);
            let once: Vec<Record> = filter_records(&query, &records).into_iter().cloned().collect();
            let twice: Vec<Record> = filter_records(&query, &once).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }
    }
}
