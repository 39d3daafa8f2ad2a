use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::board::Listing;
use super::category::CategoryValue;
use crate::filter::{FieldValue, Filterable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Active,
    Draft,
    Closed,
}

impl CategoryValue for JobStatus {
    fn ordered() -> &'static [Self] {
        &[Self::Active, Self::Draft, Self::Closed]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Closed => "closed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Closed => "Closed",
        }
    }
}

/// Hiring priority shown on active postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl CategoryValue for Urgency {
    fn ordered() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low]
    }

    fn key(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
        }
    }
}

/// A job posting on the jobs board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub salary: String,
    pub applicants: u32,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    pub posted_at: DateTime<Utc>,
}

impl Filterable for Job {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => FieldValue::Text(&self.title),
            "department" => FieldValue::Text(&self.department),
            "location" => FieldValue::Text(&self.location),
            "employment_type" => FieldValue::Text(&self.employment_type),
            "status" => FieldValue::Text(self.status.key()),
            "urgency" => self
                .urgency
                .map(|urgency| FieldValue::Text(urgency.key()))
                .unwrap_or(FieldValue::Missing),
            _ => FieldValue::Missing,
        }
    }
}

impl Listing for Job {
    const COLLECTION: &'static str = "jobs";
    const SEARCH_FIELDS: &'static [&'static str] = &["title", "department"];
    const FILTER_DIMENSIONS: &'static [&'static str] = &["status", "department"];
    const BADGE_DIMENSION: &'static str = "status";
    const OPTION_DIMENSIONS: &'static [&'static str] = &["department"];

    fn badge_values() -> Vec<&'static str> {
        JobStatus::keys()
    }

    fn summary_line(&self) -> String {
        format!(
            "{} | {} | {} | {} applicants",
            self.title,
            self.department,
            self.status.label(),
            self.applicants
        )
    }
}
