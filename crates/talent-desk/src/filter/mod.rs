//! Text and category filtering over in-memory record collections.
//!
//! Every list page reduces to the same pass: a case-insensitive substring
//! search across a handful of fields, AND-ed with exact-match category
//! selections where the `"all"` sentinel disables a dimension. Badge counts
//! and dropdown options are always computed over the unfiltered collection.

mod counts;
mod engine;
mod field;
mod query;

pub use counts::{
    count_by_category, count_by_category_over, distinct_values, CategoryCount, CategoryCounts,
};
pub use engine::{filter_records, ListFilter};
pub use field::{FieldValue, Filterable};
pub use query::{FilterQuery, ALL};

#[cfg(test)]
pub(crate) mod fixtures;
