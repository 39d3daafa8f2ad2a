use serde::Serialize;

use super::field::Filterable;
use super::query::ALL;

/// Badge entry: a selectable value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Ordered badge counts, always led by the [`ALL`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts(Vec<CategoryCount>);

impl CategoryCounts {
    fn with_total(total: usize) -> Self {
        Self(vec![CategoryCount {
            value: ALL.to_string(),
            count: total,
        }])
    }

    pub fn get(&self, value: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.count)
    }

    pub fn all(&self) -> usize {
        self.0.first().map(|entry| entry.count).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryCount> {
        self.0.iter()
    }

    /// Counts excluding the [`ALL`] entry.
    pub fn categories(&self) -> &[CategoryCount] {
        &self.0[1..]
    }

    fn slot(&mut self, value: &str) -> &mut usize {
        let index = match self.0.iter().position(|entry| entry.value == value) {
            Some(index) => index,
            None => {
                self.0.push(CategoryCount {
                    value: value.to_string(),
                    count: 0,
                });
                self.0.len() - 1
            }
        };
        &mut self.0[index].count
    }

    fn tally<R: Filterable>(&mut self, records: &[R], dimension: &str) {
        for record in records {
            for value in record.field(dimension).values() {
                // The sentinel is never a selectable value.
                if value != ALL {
                    *self.slot(value) += 1;
                }
            }
        }
    }
}

/// Counts per value of `dimension` over the whole collection, in first-occurrence order.
pub fn count_by_category<R: Filterable>(records: &[R], dimension: &str) -> CategoryCounts {
    let mut counts = CategoryCounts::with_total(records.len());
    counts.tally(records, dimension);
    counts
}

/// Like [`count_by_category`], seeded with a fixed enumeration so absent values report zero.
///
/// Values present in the collection but outside `known` are appended after it.
pub fn count_by_category_over<R: Filterable>(
    records: &[R],
    dimension: &str,
    known: &[&str],
) -> CategoryCounts {
    let mut counts = CategoryCounts::with_total(records.len());
    for value in known {
        if *value != ALL {
            counts.slot(value);
        }
    }
    counts.tally(records, dimension);
    counts
}

/// Distinct values of `dimension` in first-occurrence order, without case folding.
pub fn distinct_values<R: Filterable>(records: &[R], dimension: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        for value in record.field(dimension).values() {
            if !values.iter().any(|existing| existing == value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::fixtures::{candidates, jobs, Row};

    #[test]
    fn all_entry_equals_collection_length() {
        let rows = jobs();
        let counts = count_by_category(&rows, "status");
        assert_eq!(counts.all(), rows.len());
        assert_eq!(counts.get(ALL), Some(rows.len()));
        assert_eq!(counts.iter().next().map(|entry| entry.value.as_str()), Some(ALL));
    }

    #[test]
    fn counts_partition_the_collection() {
        let rows = jobs();
        let counts = count_by_category(&rows, "status");
        let sum: usize = counts.categories().iter().map(|entry| entry.count).sum();
        assert_eq!(sum, rows.len());
        assert_eq!(counts.get("active"), Some(4));
        assert_eq!(counts.get("draft"), Some(1));
        assert_eq!(counts.get("closed"), Some(1));
    }

    #[test]
    fn known_values_report_zero_when_absent() {
        let rows = vec![
            Row::new("1")
                .with("title", "Senior Frontend Developer")
                .with("department", "Engineering")
                .with("status", "active"),
            Row::new("2")
                .with("title", "UX Designer")
                .with("department", "Design")
                .with("status", "draft"),
        ];
        let counts = count_by_category_over(&rows, "status", &["active", "draft", "closed"]);
        let pairs: Vec<(&str, usize)> = counts
            .iter()
            .map(|entry| (entry.value.as_str(), entry.count))
            .collect();
        assert_eq!(pairs, vec![("all", 2), ("active", 1), ("draft", 1), ("closed", 0)]);
    }

    #[test]
    fn unknown_values_follow_the_enumeration() {
        let rows = vec![
            Row::new("1").with("status", "archived"),
            Row::new("2").with("status", "active"),
        ];
        let counts = count_by_category_over(&rows, "status", &["active", "closed"]);
        let order: Vec<&str> = counts.iter().map(|entry| entry.value.as_str()).collect();
        assert_eq!(order, vec!["all", "active", "closed", "archived"]);
    }

    #[test]
    fn records_without_the_dimension_count_only_toward_all() {
        let rows = vec![Row::new("1").with("status", "active"), Row::new("2")];
        let counts = count_by_category(&rows, "status");
        assert_eq!(counts.all(), 2);
        assert_eq!(counts.get("active"), Some(1));
        assert_eq!(counts.categories().len(), 1);
    }

    #[test]
    fn distinct_values_keep_first_occurrence_order() {
        let rows = jobs();
        assert_eq!(
            distinct_values(&rows, "department"),
            vec!["Engineering", "Design", "Product", "Marketing", "Analytics"]
        );
    }

    #[test]
    fn distinct_values_do_not_fold_case() {
        let rows = vec![
            Row::new("1").with("type", "Phone Screening"),
            Row::new("2").with("type", "phone screening"),
            Row::new("3").with("type", "Phone Screening"),
        ];
        assert_eq!(
            distinct_values(&rows, "type"),
            vec!["Phone Screening", "phone screening"]
        );
    }

    #[test]
    fn list_dimensions_flatten_elements() {
        let rows = candidates();
        let skills = distinct_values(&rows, "skills");
        assert_eq!(skills.len(), 9);
        assert_eq!(skills.first().map(String::as_str), Some("React"));
    }

    #[test]
    fn empty_collection_counts_zero() {
        let rows: Vec<Row> = Vec::new();
        let counts = count_by_category_over(&rows, "status", &["active"]);
        assert_eq!(counts.all(), 0);
        assert_eq!(counts.get("active"), Some(0));
        assert!(distinct_values(&rows, "status").is_empty());
    }
}
