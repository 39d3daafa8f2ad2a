/// Borrowed view of a single record field as seen by the filter engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    /// The record has no such field, or the field is unset.
    Missing,
}

impl<'a> FieldValue<'a> {
    /// `needle` must already be lowercased.
    pub fn contains_folded(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(value) => value.to_lowercase().contains(needle),
            FieldValue::List(items) => items
                .iter()
                .any(|item| item.to_lowercase().contains(needle)),
            FieldValue::Missing => false,
        }
    }

    /// Exact, case-sensitive comparison. Lists match when any element does.
    pub fn equals(&self, expected: &str) -> bool {
        match self {
            FieldValue::Text(value) => *value == expected,
            FieldValue::List(items) => items.iter().any(|item| item == expected),
            FieldValue::Missing => false,
        }
    }

    /// Values this field contributes to counts and option lists, in field order.
    pub(crate) fn values(&self) -> Vec<&'a str> {
        match *self {
            FieldValue::Text(value) => vec![value],
            FieldValue::List(items) => {
                let mut seen: Vec<&'a str> = Vec::with_capacity(items.len());
                for item in items {
                    if !seen.contains(&item.as_str()) {
                        seen.push(item.as_str());
                    }
                }
                seen
            }
            FieldValue::Missing => Vec::new(),
        }
    }
}

/// Records expose their searchable and categorical fields by name.
///
/// Unknown names must yield [`FieldValue::Missing`] so heterogeneous
/// collections filter without errors.
pub trait Filterable {
    fn record_id(&self) -> &str;
    fn field(&self, name: &str) -> FieldValue<'_>;
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn record_id(&self) -> &str {
        (**self).record_id()
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_folded_checks_every_list_element() {
        let skills = vec!["Figma".to_string(), "User Research".to_string()];
        let field = FieldValue::List(&skills);
        assert!(field.contains_folded("research"));
        assert!(!field.contains_folded("react"));
    }

    #[test]
    fn missing_never_matches() {
        assert!(!FieldValue::Missing.contains_folded(""));
        assert!(!FieldValue::Missing.equals(""));
        assert!(FieldValue::Missing.values().is_empty());
    }

    #[test]
    fn equals_is_case_sensitive() {
        assert!(FieldValue::Text("Engineering").equals("Engineering"));
        assert!(!FieldValue::Text("Engineering").equals("engineering"));
    }

    #[test]
    fn list_values_skip_repeats() {
        let tags = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(FieldValue::List(&tags).values(), vec!["a", "b"]);
    }
}
