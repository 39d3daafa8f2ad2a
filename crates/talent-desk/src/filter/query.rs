use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel selection that disables a category dimension.
pub const ALL: &str = "all";

/// Ephemeral list state: the search box plus one selection per dimension.
///
/// Deserializes from a flat query string such as `q=react&status=new`; every
/// key other than `q` is treated as a dimension selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub q: String,
    #[serde(flatten)]
    pub categories: BTreeMap<String, String>,
}

impl FilterQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            categories: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, dimension: impl Into<String>, value: impl Into<String>) -> Self {
        self.categories.insert(dimension.into(), value.into());
        self
    }

    /// Selected value for `dimension`, defaulting to [`ALL`].
    pub fn selection(&self, dimension: &str) -> &str {
        self.categories
            .get(dimension)
            .map(String::as_str)
            .unwrap_or(ALL)
    }

    /// Dimensions with a selection other than [`ALL`].
    pub fn active_categories(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .filter(|(_, value)| value.as_str() != ALL)
            .map(|(dimension, value)| (dimension.as_str(), value.as_str()))
    }

    pub fn is_identity(&self) -> bool {
        self.q.is_empty() && self.active_categories().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults_to_all() {
        let query = FilterQuery::new("alex").with_category("status", "new");
        assert_eq!(query.selection("status"), "new");
        assert_eq!(query.selection("applied_position"), ALL);
    }

    #[test]
    fn all_selections_are_inactive() {
        let query = FilterQuery::default()
            .with_category("status", ALL)
            .with_category("department", ALL);
        assert!(query.is_identity());
        assert_eq!(query.active_categories().count(), 0);
    }

    #[test]
    fn whitespace_query_is_not_identity() {
        assert!(!FilterQuery::new(" ").is_identity());
    }

    #[test]
    fn deserializes_flat_query_map() {
        let query: FilterQuery = serde_json::from_value(serde_json::json!({
            "q": "designer",
            "status": "all",
            "department": "Design",
        }))
        .expect("query parses");
        assert_eq!(query.q, "designer");
        assert_eq!(query.selection("department"), "Design");
        assert_eq!(query.active_categories().collect::<Vec<_>>(), vec![("department", "Design")]);
    }
}
