use std::collections::BTreeMap;

use serde::Serialize;

use crate::filter::{
    count_by_category_over, distinct_values, CategoryCounts, FilterQuery, Filterable, ListFilter,
};

/// Per-record-type wiring for a filterable list page.
pub trait Listing: Filterable + Serialize {
    const COLLECTION: &'static str;
    /// Fields the search box is matched against, in order.
    const SEARCH_FIELDS: &'static [&'static str];
    /// Dimensions a query may select on.
    const FILTER_DIMENSIONS: &'static [&'static str];
    /// Dimension rendered as count chips.
    const BADGE_DIMENSION: &'static str;
    /// Dimensions whose dropdown options come from the data itself.
    const OPTION_DIMENSIONS: &'static [&'static str];

    /// Fixed enumeration for the badge dimension.
    fn badge_values() -> Vec<&'static str>;

    fn summary_line(&self) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{collection} cannot be filtered by '{dimension}'")]
    UnknownDimension {
        collection: &'static str,
        dimension: String,
    },
}

/// Everything a list page renders for one filter state.
///
/// `T` is the row type; boards hand out `&R` and callers may map the rows
/// into richer views with [`BoardSnapshot::map_records`].
#[derive(Debug, Serialize)]
pub struct BoardSnapshot<T> {
    pub collection: &'static str,
    pub total: usize,
    pub showing: usize,
    pub badge_dimension: &'static str,
    pub badges: CategoryCounts,
    pub options: BTreeMap<&'static str, Vec<String>>,
    pub records: Vec<T>,
}

impl<T> BoardSnapshot<T> {
    pub fn map_records<U>(self, f: impl FnMut(T) -> U) -> BoardSnapshot<U> {
        BoardSnapshot {
            collection: self.collection,
            total: self.total,
            showing: self.showing,
            badge_dimension: self.badge_dimension,
            badges: self.badges,
            options: self.options,
            records: self.records.into_iter().map(f).collect(),
        }
    }
}

/// An immutable collection plus the derived badge counts and options.
///
/// Counts and options never depend on the active query, so they are computed
/// once when the board is built.
#[derive(Debug, Clone)]
pub struct ListBoard<R> {
    records: Vec<R>,
    badges: CategoryCounts,
    options: BTreeMap<&'static str, Vec<String>>,
}

impl<R: Listing> ListBoard<R> {
    pub fn new(records: Vec<R>) -> Self {
        let badges = count_by_category_over(&records, R::BADGE_DIMENSION, &R::badge_values());
        let options = R::OPTION_DIMENSIONS
            .iter()
            .map(|dimension| (*dimension, distinct_values(&records, dimension)))
            .collect();

        Self {
            records,
            badges,
            options,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn badges(&self) -> &CategoryCounts {
        &self.badges
    }

    pub fn options(&self, dimension: &str) -> Option<&[String]> {
        self.options.get(dimension).map(Vec::as_slice)
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.record_id() == id)
    }

    /// Records matching `query`, in source order.
    pub fn search(&self, query: &FilterQuery) -> Result<Vec<&R>, BoardError> {
        self.validate(query)?;
        if query.is_identity() {
            return Ok(self.records.iter().collect());
        }
        Ok(ListFilter::from_query(query, R::SEARCH_FIELDS).apply(&self.records))
    }

    pub fn snapshot(&self, query: &FilterQuery) -> Result<BoardSnapshot<&R>, BoardError> {
        let records = self.search(query)?;
        Ok(BoardSnapshot {
            collection: R::COLLECTION,
            total: self.records.len(),
            showing: records.len(),
            badge_dimension: R::BADGE_DIMENSION,
            badges: self.badges.clone(),
            options: self.options.clone(),
            records,
        })
    }

    fn validate(&self, query: &FilterQuery) -> Result<(), BoardError> {
        match query
            .categories
            .keys()
            .find(|dimension| !R::FILTER_DIMENSIONS.contains(&dimension.as_str()))
        {
            Some(dimension) => Err(BoardError::UnknownDimension {
                collection: R::COLLECTION,
                dimension: dimension.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ALL;
    use crate::tracking::{seed, Job};
    use chrono::{TimeZone, Utc};

    fn board() -> ListBoard<Job> {
        let now = Utc
            .with_ymd_and_hms(2025, 10, 6, 9, 0, 0)
            .single()
            .expect("valid instant");
        ListBoard::new(seed::jobs(now))
    }

    #[test]
    fn identity_query_returns_every_record_in_order() {
        let board = board();
        let query = FilterQuery::default().with_category("status", ALL);
        let ids: Vec<&str> = board
            .search(&query)
            .expect("valid query")
            .into_iter()
            .map(|job| job.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn mapped_snapshot_keeps_counts() {
        let board = board();
        let snapshot = board
            .snapshot(&FilterQuery::new("engineer"))
            .expect("valid query")
            .map_records(|job| job.title.clone());
        assert_eq!(snapshot.total, 6);
        assert_eq!(snapshot.showing, snapshot.records.len());
        assert_eq!(snapshot.badges.all(), 6);
        assert_eq!(
            snapshot.records,
            vec!["Senior Frontend Developer".to_string(), "Backend Engineer".to_string()]
        );
    }

    #[test]
    fn empty_board_has_zero_badges() {
        let board: ListBoard<Job> = ListBoard::new(Vec::new());
        assert!(board.is_empty());
        assert_eq!(board.badges().get("active"), Some(0));
        let snapshot = board.snapshot(&FilterQuery::default()).expect("valid query");
        assert_eq!(snapshot.showing, 0);
    }
}
