use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::candidates::{Candidate, CandidateStatus};
use super::category::CategoryValue;

#[derive(Debug)]
pub enum CandidateImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownStatus { row: usize, value: String },
    DuplicateId { row: usize, id: String },
}

impl std::fmt::Display for CandidateImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateImportError::Io(err) => write!(f, "failed to read candidate export: {}", err),
            CandidateImportError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
            CandidateImportError::UnknownStatus { row, value } => {
                write!(f, "row {row}: unknown candidate status '{value}'")
            }
            CandidateImportError::DuplicateId { row, id } => {
                write!(f, "row {row}: candidate id '{id}' appears more than once")
            }
        }
    }
}

impl std::error::Error for CandidateImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateImportError::Io(err) => Some(err),
            CandidateImportError::Csv(err) => Some(err),
            CandidateImportError::UnknownStatus { .. } | CandidateImportError::DuplicateId { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for CandidateImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CandidateImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a candidate pipeline export.
///
/// Expected header: `id,name,email,phone,position,location,experience,skills,status,rating,applied_position`.
/// Skills are `;`-separated. A blank `applied_position` falls back to `position`.
pub struct CandidateCsvImporter;

impl CandidateCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, CandidateImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let candidates = Self::from_reader(file)?;
        info!(path = %path.display(), count = candidates.len(), "imported candidates");
        Ok(candidates)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates = Vec::new();

        for (index, record) in csv_reader.deserialize::<CandidateRow>().enumerate() {
            // Header is line 1.
            let row = index + 2;
            let candidate = record?.into_candidate(row)?;
            if !seen.insert(candidate.id.clone()) {
                return Err(CandidateImportError::DuplicateId {
                    row,
                    id: candidate.id,
                });
            }
            candidates.push(candidate);
        }

        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    id: String,
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    position: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    experience: String,
    #[serde(default)]
    skills: String,
    status: String,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    applied_position: String,
}

impl CandidateRow {
    fn into_candidate(self, row: usize) -> Result<Candidate, CandidateImportError> {
        let status = CandidateStatus::parse(&self.status).ok_or_else(|| {
            CandidateImportError::UnknownStatus {
                row,
                value: self.status.clone(),
            }
        })?;

        let applied_position = if self.applied_position.is_empty() {
            self.position.clone()
        } else {
            self.applied_position
        };

        Ok(Candidate {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            location: self.location,
            experience: self.experience,
            skills: split_skills(&self.skills),
            status,
            rating: self.rating.unwrap_or_default(),
            applied_position,
        })
    }
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
