use std::collections::BTreeMap;

use super::field::{FieldValue, Filterable};

/// Loosely typed record so tests can model heterogeneous collections.
#[derive(Debug, Clone, Default)]
pub(crate) struct Row {
    id: String,
    scalars: BTreeMap<String, String>,
    lists: BTreeMap<String, Vec<String>>,
}

impl Row {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn with(mut self, name: &str, value: &str) -> Self {
        self.scalars.insert(name.to_string(), value.to_string());
        self
    }

    pub(crate) fn with_list(mut self, name: &str, values: &[&str]) -> Self {
        self.lists.insert(
            name.to_string(),
            values.iter().map(|value| value.to_string()).collect(),
        );
        self
    }

    pub(crate) fn text(&self, name: &str) -> &str {
        self.scalars.get(name).map(String::as_str).unwrap_or_default()
    }
}

impl Filterable for Row {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        if let Some(value) = self.scalars.get(name) {
            return FieldValue::Text(value);
        }
        match self.lists.get(name) {
            Some(values) => FieldValue::List(values),
            None => FieldValue::Missing,
        }
    }
}

pub(crate) fn jobs() -> Vec<Row> {
    [
        ("1", "Senior Frontend Developer", "Engineering", "active"),
        ("2", "UX Designer", "Design", "active"),
        ("3", "Product Manager", "Product", "draft"),
        ("4", "Backend Engineer", "Engineering", "active"),
        ("5", "Marketing Specialist", "Marketing", "closed"),
        ("6", "Data Scientist", "Analytics", "active"),
    ]
    .into_iter()
    .map(|(id, title, department, status)| {
        Row::new(id)
            .with("title", title)
            .with("department", department)
            .with("status", status)
    })
    .collect()
}

pub(crate) fn candidates() -> Vec<Row> {
    vec![
        Row::new("1")
            .with("name", "Alex Johnson")
            .with("position", "Senior Frontend Developer")
            .with("status", "new")
            .with_list("skills", &["React", "TypeScript", "Node.js"]),
        Row::new("2")
            .with("name", "Sarah Chen")
            .with("position", "UX Designer")
            .with("status", "interview")
            .with_list("skills", &["Figma", "User Research", "Prototyping"]),
        Row::new("3")
            .with("name", "Mike Rodriguez")
            .with("position", "Backend Engineer")
            .with("status", "hired")
            .with_list("skills", &["Python", "Django", "PostgreSQL"]),
    ]
}
