use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::board::Listing;
use super::category::CategoryValue;
use crate::filter::{FieldValue, Filterable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    NoShow,
}

impl CategoryValue for InterviewStatus {
    fn ordered() -> &'static [Self] {
        &[Self::Scheduled, Self::Completed, Self::NoShow]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::NoShow => "no_show",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::NoShow => "No Show",
        }
    }
}

/// Where an interview falls relative to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewTiming {
    /// More than a day ahead.
    Upcoming,
    /// Within the next 24 hours.
    Today,
    Past,
}

impl InterviewTiming {
    pub fn classify(scheduled_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let ahead = scheduled_at - now;
        if ahead > Duration::hours(24) {
            Self::Upcoming
        } else if ahead > Duration::zero() {
            Self::Today
        } else {
            Self::Past
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Today => "today",
            Self::Past => "past",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    pub candidate: String,
    pub position: String,
    /// Free-form round name, e.g. "Technical Interview".
    #[serde(rename = "type")]
    pub kind: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    pub interviewers: Vec<String>,
    pub status: InterviewStatus,
    pub notes: String,
}

impl Interview {
    pub fn timing(&self, now: DateTime<Utc>) -> InterviewTiming {
        InterviewTiming::classify(self.scheduled_at, now)
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.scheduled_at + Duration::minutes(i64::from(self.duration_minutes))
    }

    pub fn row(&self, now: DateTime<Utc>) -> InterviewRow<'_> {
        InterviewRow {
            interview: self,
            timing: self.timing(now),
            ends_at: self.ends_at(),
        }
    }
}

/// An interview as listed on the schedule, annotated against a reference instant.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewRow<'a> {
    #[serde(flatten)]
    pub interview: &'a Interview,
    pub timing: InterviewTiming,
    pub ends_at: DateTime<Utc>,
}

impl Filterable for Interview {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "candidate" => FieldValue::Text(&self.candidate),
            "position" => FieldValue::Text(&self.position),
            "type" => FieldValue::Text(&self.kind),
            "location" => FieldValue::Text(&self.location),
            "meeting_link" => self
                .meeting_link
                .as_deref()
                .map(FieldValue::Text)
                .unwrap_or(FieldValue::Missing),
            "interviewers" => FieldValue::List(&self.interviewers),
            "status" => FieldValue::Text(self.status.key()),
            "notes" => FieldValue::Text(&self.notes),
            _ => FieldValue::Missing,
        }
    }
}

impl Listing for Interview {
    const COLLECTION: &'static str = "interviews";
    const SEARCH_FIELDS: &'static [&'static str] = &["candidate", "position", "type"];
    const FILTER_DIMENSIONS: &'static [&'static str] = &["status", "type"];
    const BADGE_DIMENSION: &'static str = "status";
    const OPTION_DIMENSIONS: &'static [&'static str] = &["type"];

    fn badge_values() -> Vec<&'static str> {
        InterviewStatus::keys()
    }

    fn summary_line(&self) -> String {
        format!(
            "{} | {} | {} | {} | {} - {} UTC",
            self.candidate,
            self.position,
            self.kind,
            self.status.label(),
            self.scheduled_at.format("%Y-%m-%d %H:%M"),
            self.ends_at().format("%H:%M")
        )
    }
}
