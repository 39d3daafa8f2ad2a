use serde::{Deserialize, Serialize};

use super::board::Listing;
use super::category::CategoryValue;
use crate::filter::{FieldValue, Filterable};

/// Pipeline stage a candidate currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl CategoryValue for CandidateStatus {
    fn ordered() -> &'static [Self] {
        &[
            Self::New,
            Self::Screening,
            Self::Interview,
            Self::Offer,
            Self::Hired,
            Self::Rejected,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Screening => "screening",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Current or most recent role.
    pub position: String,
    pub location: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub status: CandidateStatus,
    pub rating: f32,
    /// Opening the candidate applied for; drives the position dropdown.
    pub applied_position: String,
}

impl Filterable for Candidate {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "phone" => FieldValue::Text(&self.phone),
            "position" => FieldValue::Text(&self.position),
            "location" => FieldValue::Text(&self.location),
            "experience" => FieldValue::Text(&self.experience),
            "skills" => FieldValue::List(&self.skills),
            "status" => FieldValue::Text(self.status.key()),
            "applied_position" => FieldValue::Text(&self.applied_position),
            _ => FieldValue::Missing,
        }
    }
}

impl Listing for Candidate {
    const COLLECTION: &'static str = "candidates";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "position", "skills"];
    const FILTER_DIMENSIONS: &'static [&'static str] = &["status", "applied_position"];
    const BADGE_DIMENSION: &'static str = "status";
    const OPTION_DIMENSIONS: &'static [&'static str] = &["applied_position"];

    fn badge_values() -> Vec<&'static str> {
        CandidateStatus::keys()
    }

    fn summary_line(&self) -> String {
        format!(
            "{} | {} | {} | rating {:.1} | {}",
            self.name,
            self.applied_position,
            self.status.label(),
            self.rating,
            self.skills.join(", ")
        )
    }
}
