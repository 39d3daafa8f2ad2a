use std::collections::BTreeMap;

use tracing::debug;

use super::field::Filterable;
use super::query::{FilterQuery, ALL};

/// A prepared filter pass: lowered search text plus the active dimensions.
#[derive(Debug, Clone)]
pub struct ListFilter<'f> {
    needle: Option<String>,
    search_fields: &'f [&'f str],
    categories: Vec<(&'f str, &'f str)>,
}

impl<'f> ListFilter<'f> {
    pub fn new(
        query: &str,
        search_fields: &'f [&'f str],
        category_filters: impl IntoIterator<Item = (&'f str, &'f str)>,
    ) -> Self {
        // Whitespace-only queries are searched literally.
        let needle = if query.is_empty() || search_fields.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        };

        let categories = category_filters
            .into_iter()
            .filter(|(_, value)| *value != ALL)
            .collect();

        Self {
            needle,
            search_fields,
            categories,
        }
    }

    pub fn from_query(query: &'f FilterQuery, search_fields: &'f [&'f str]) -> Self {
        Self::new(&query.q, search_fields, query.active_categories())
    }

    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        self.matches_text(record) && self.matches_categories(record)
    }

    fn matches_text<R: Filterable>(&self, record: &R) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => self
                .search_fields
                .iter()
                .any(|name| record.field(name).contains_folded(needle)),
        }
    }

    fn matches_categories<R: Filterable>(&self, record: &R) -> bool {
        self.categories
            .iter()
            .all(|(dimension, value)| record.field(dimension).equals(value))
    }

    /// Matching records in their original relative order.
    pub fn apply<'r, R: Filterable>(&self, records: &'r [R]) -> Vec<&'r R> {
        let matched: Vec<&R> = records.iter().filter(|record| self.matches(*record)).collect();
        debug!(
            total = records.len(),
            matched = matched.len(),
            active_categories = self.categories.len(),
            searching = self.needle.is_some(),
            "filter pass complete"
        );
        matched
    }
}

/// Filters `records` by free text over `search_fields` and exact category selections.
pub fn filter_records<'r, R: Filterable>(
    records: &'r [R],
    query: &str,
    search_fields: &[&str],
    category_filters: &BTreeMap<String, String>,
) -> Vec<&'r R> {
    let filter = ListFilter::new(
        query,
        search_fields,
        category_filters
            .iter()
            .map(|(dimension, value)| (dimension.as_str(), value.as_str())),
    );
    filter.apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::fixtures::{candidates, jobs, Row};

    const JOB_FIELDS: &[&str] = &["title", "department"];
    const CANDIDATE_FIELDS: &[&str] = &["name", "position", "skills"];

    fn ids<R: Filterable>(records: &[R]) -> Vec<String> {
        records.iter().map(|record| record.record_id().to_string()).collect()
    }

    fn categories(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(dimension, value)| (dimension.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_and_all_categories_return_everything() {
        let rows = jobs();
        let matched = filter_records(
            &rows,
            "",
            JOB_FIELDS,
            &categories(&[("status", ALL), ("department", ALL)]),
        );
        assert_eq!(ids(&matched), ids(&rows));
    }

    #[test]
    fn text_search_matches_any_listed_field() {
        let rows = jobs();
        let matched = filter_records(&rows, "designer", JOB_FIELDS, &categories(&[("status", ALL)]));
        assert_eq!(ids(&matched), vec!["2"]);

        let matched = filter_records(&rows, "engineering", JOB_FIELDS, &BTreeMap::new());
        assert_eq!(ids(&matched), vec!["1", "4"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let rows = candidates();
        let upper = filter_records(&rows, "ALEX", CANDIDATE_FIELDS, &BTreeMap::new());
        let lower = filter_records(&rows, "alex", CANDIDATE_FIELDS, &BTreeMap::new());
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&upper), vec!["1"]);
    }

    #[test]
    fn skills_match_when_scalar_fields_do_not() {
        let rows = candidates();
        let matched = filter_records(&rows, "React", CANDIDATE_FIELDS, &BTreeMap::new());
        assert_eq!(ids(&matched), vec!["1"]);
        assert!(!rows[0].text("name").to_lowercase().contains("react"));
    }

    #[test]
    fn categories_combine_with_and() {
        let rows = jobs();
        let matched = filter_records(
            &rows,
            "",
            JOB_FIELDS,
            &categories(&[("status", "active"), ("department", "Engineering")]),
        );
        assert_eq!(ids(&matched), vec!["1", "4"]);

        let matched = filter_records(
            &rows,
            "",
            JOB_FIELDS,
            &categories(&[("status", "draft"), ("department", "Engineering")]),
        );
        assert!(matched.is_empty());
    }

    #[test]
    fn category_match_is_exact() {
        let rows = jobs();
        let matched = filter_records(&rows, "", JOB_FIELDS, &categories(&[("department", "engineering")]));
        assert!(matched.is_empty());
        let matched = filter_records(&rows, "", JOB_FIELDS, &categories(&[("department", "Engin")]));
        assert!(matched.is_empty());
    }

    #[test]
    fn single_dimension_is_sound_and_complete() {
        let rows = jobs();
        let matched = filter_records(&rows, "", JOB_FIELDS, &categories(&[("status", "active")]));
        assert!(matched.iter().all(|row| row.text("status") == "active"));
        let expected = rows.iter().filter(|row| row.text("status") == "active").count();
        assert_eq!(matched.len(), expected);
    }

    #[test]
    fn result_preserves_source_order() {
        let rows = jobs();
        let matched = filter_records(&rows, "e", JOB_FIELDS, &BTreeMap::new());
        let positions: Vec<usize> = matched
            .iter()
            .map(|row| {
                rows.iter()
                    .position(|candidate| candidate.record_id() == row.record_id())
                    .expect("row comes from source")
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn filtering_twice_matches_filtering_once() {
        let rows = candidates();
        let selection = categories(&[("status", "interview")]);
        let once = filter_records(&rows, "design", CANDIDATE_FIELDS, &selection);
        let twice = filter_records(&once, "design", CANDIDATE_FIELDS, &selection);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn whitespace_query_is_matched_literally() {
        let rows = vec![
            Row::new("a").with("title", "Recruiter"),
            Row::new("b").with("title", "Talent Partner"),
        ];
        let matched = filter_records(&rows, " ", &["title"], &BTreeMap::new());
        assert_eq!(ids(&matched), vec!["b"]);
    }

    #[test]
    fn no_search_fields_disables_text_predicate() {
        let rows = jobs();
        let matched = filter_records(&rows, "no such text", &[], &categories(&[("status", "closed")]));
        assert_eq!(ids(&matched), vec!["5"]);
    }

    #[test]
    fn missing_fields_are_non_matches() {
        let rows = vec![
            Row::new("a").with("title", "Recruiter"),
            Row::new("b").with("title", "Recruiter").with("status", "active"),
        ];
        let matched = filter_records(&rows, "recruit", &["title", "nickname"], &categories(&[("status", "active")]));
        assert_eq!(ids(&matched), vec!["b"]);

        let matched = filter_records(&rows, "x", &["nickname"], &BTreeMap::new());
        assert!(matched.is_empty());
    }

    #[test]
    fn from_query_uses_active_selections() {
        let rows = jobs();
        let query = FilterQuery::new("ENG").with_category("status", "active");
        let matched = ListFilter::from_query(&query, JOB_FIELDS).apply(&rows);
        assert_eq!(ids(&matched), vec!["1", "4"]);
    }
}
