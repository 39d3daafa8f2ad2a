mod board;
pub mod candidates;
mod catalog;
pub mod category;
pub mod dashboard;
mod import;
pub mod interviews;
pub mod jobs;
pub mod messages;
pub mod reports;
mod router;
mod seed;

pub use board::{BoardError, BoardSnapshot, ListBoard, Listing};
pub use candidates::{Candidate, CandidateStatus};
pub use catalog::{Catalog, CatalogSection, Collection};
pub use category::CategoryValue;
pub use dashboard::{ActivityEvent, ActivityKind, DashboardSummary, RecentJob};
pub use import::{CandidateCsvImporter, CandidateImportError};
pub use interviews::{Interview, InterviewRow, InterviewStatus, InterviewTiming};
pub use jobs::{Job, JobStatus, Urgency};
pub use messages::{InboxSummary, Message, MessageKind};
pub use reports::{HeadlineMetrics, HiringReport};
pub use router::catalog_router;
