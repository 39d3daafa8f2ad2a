use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::board::{ListBoard, Listing};
use super::candidates::Candidate;
use super::dashboard::{ActivityEvent, DashboardSummary};
use super::import::{CandidateCsvImporter, CandidateImportError};
use super::interviews::Interview;
use super::jobs::Job;
use super::messages::{InboxSummary, Message};
use super::reports::{FunnelStage, HiringReport};
use super::seed;
use crate::config::CatalogConfig;

/// The four list collections, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    generated_at: DateTime<Utc>,
    jobs: ListBoard<Job>,
    candidates: ListBoard<Candidate>,
    interviews: ListBoard<Interview>,
    messages: ListBoard<Message>,
    activity: Vec<ActivityEvent>,
    pipeline: Vec<FunnelStage>,
    report: HiringReport,
}

impl Catalog {
    /// Built-in dataset with timestamps relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            generated_at: now,
            jobs: ListBoard::new(seed::jobs(now)),
            candidates: ListBoard::new(seed::candidates()),
            interviews: ListBoard::new(seed::interviews(now)),
            messages: ListBoard::new(seed::messages(now)),
            activity: seed::activity(now),
            pipeline: seed::pipeline(),
            report: HiringReport::standard(),
        }
    }

    pub fn from_config(
        config: &CatalogConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, CandidateImportError> {
        let catalog = Self::seeded(now);
        match &config.candidates_csv {
            Some(path) => Ok(catalog.with_candidates(CandidateCsvImporter::from_path(path)?)),
            None => {
                info!(candidates = catalog.candidates.len(), "using seeded candidates");
                Ok(catalog)
            }
        }
    }

    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = ListBoard::new(candidates);
        if self.candidates.is_empty() {
            warn!("candidate collection is empty");
        }
        self
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn jobs(&self) -> &ListBoard<Job> {
        &self.jobs
    }

    pub fn candidates(&self) -> &ListBoard<Candidate> {
        &self.candidates
    }

    pub fn interviews(&self) -> &ListBoard<Interview> {
        &self.interviews
    }

    pub fn messages(&self) -> &ListBoard<Message> {
        &self.messages
    }

    pub fn inbox_summary(&self) -> InboxSummary {
        InboxSummary::from_messages(self.messages.records())
    }

    pub fn hiring_report(&self) -> &HiringReport {
        &self.report
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::build(
            self.generated_at,
            self.jobs.records(),
            self.candidates.records(),
            self.interviews.records(),
            &self.activity,
            &self.pipeline,
        )
    }
}

/// Record types stored in a [`Catalog`].
pub trait CatalogSection: Listing + Sized {
    fn board(catalog: &Catalog) -> &ListBoard<Self>;
}

impl CatalogSection for Job {
    fn board(catalog: &Catalog) -> &ListBoard<Self> {
        catalog.jobs()
    }
}

impl CatalogSection for Candidate {
    fn board(catalog: &Catalog) -> &ListBoard<Self> {
        catalog.candidates()
    }
}

impl CatalogSection for Interview {
    fn board(catalog: &Catalog) -> &ListBoard<Self> {
        catalog.interviews()
    }
}

impl CatalogSection for Message {
    fn board(catalog: &Catalog) -> &ListBoard<Self> {
        catalog.messages()
    }
}

/// Collection names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Jobs,
    Candidates,
    Interviews,
    Messages,
}

impl Collection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jobs => Job::COLLECTION,
            Self::Candidates => Candidate::COLLECTION,
            Self::Interviews => Interview::COLLECTION,
            Self::Messages => Message::COLLECTION,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "jobs" | "job" => Ok(Self::Jobs),
            "candidates" | "candidate" => Ok(Self::Candidates),
            "interviews" | "interview" => Ok(Self::Interviews),
            "messages" | "message" => Ok(Self::Messages),
            other => Err(format!(
                "unknown collection '{other}' (expected jobs, candidates, interviews or messages)"
            )),
        }
    }
}
