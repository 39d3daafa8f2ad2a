use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use super::candidates::{Candidate, CandidateStatus};
use super::interviews::{Interview, InterviewTiming};
use super::jobs::{Job, JobStatus};
use super::reports::{funnel_view, percentage, FunnelStage, FunnelStageView};

const RECENT_JOBS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Application,
    Interview,
    Hire,
}

impl ActivityKind {
    /// Verb phrase placed before the position, e.g. "applied for".
    pub const fn action(self) -> &'static str {
        match self {
            Self::Application => "applied for",
            Self::Interview => "completed interview for",
            Self::Hire => "was hired for",
        }
    }
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEvent {
    pub id: String,
    pub kind: ActivityKind,
    pub candidate: String,
    pub position: String,
    pub status: String,
    pub occurred_at: DateTime<Utc>,
}

impl ActivityEvent {
    pub fn headline(&self) -> String {
        format!("{} {} {}", self.candidate, self.kind.action(), self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentJob {
    pub id: String,
    pub title: String,
    pub applicants: u32,
    pub status: JobStatus,
}

/// Headline figures and feeds for the landing page, derived from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub generated_at: DateTime<Utc>,
    pub active_jobs: usize,
    pub total_candidates: usize,
    pub new_applications: usize,
    /// Interviews in the Monday-to-Sunday week containing `generated_at`.
    pub interviews_this_week: usize,
    pub interviews_today: usize,
    /// Share of candidates with status `hired`.
    pub hire_rate_pct: f64,
    pub recent_activity: Vec<ActivityEvent>,
    pub recent_jobs: Vec<RecentJob>,
    pub pipeline: Vec<FunnelStageView>,
}

impl DashboardSummary {
    pub fn build(
        now: DateTime<Utc>,
        jobs: &[Job],
        candidates: &[Candidate],
        interviews: &[Interview],
        activity: &[ActivityEvent],
        pipeline: &[FunnelStage],
    ) -> Self {
        let hired = candidates
            .iter()
            .filter(|candidate| candidate.status == CandidateStatus::Hired)
            .count();
        let (week_start, week_end) = week_bounds(now);

        let mut recent_activity = activity.to_vec();
        recent_activity.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

        let mut recent_jobs: Vec<&Job> = jobs.iter().collect();
        recent_jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));

        Self {
            generated_at: now,
            active_jobs: jobs
                .iter()
                .filter(|job| job.status == JobStatus::Active)
                .count(),
            total_candidates: candidates.len(),
            new_applications: candidates
                .iter()
                .filter(|candidate| candidate.status == CandidateStatus::New)
                .count(),
            interviews_this_week: interviews
                .iter()
                .filter(|interview| {
                    interview.scheduled_at >= week_start && interview.scheduled_at < week_end
                })
                .count(),
            interviews_today: interviews
                .iter()
                .filter(|interview| interview.timing(now) == InterviewTiming::Today)
                .count(),
            hire_rate_pct: percentage(hired as u32, candidates.len() as u32),
            recent_activity,
            recent_jobs: recent_jobs
                .into_iter()
                .take(RECENT_JOBS)
                .map(|job| RecentJob {
                    id: job.id.clone(),
                    title: job.title.clone(),
                    applicants: job.applicants,
                    status: job.status,
                })
                .collect(),
            pipeline: funnel_view(pipeline),
        }
    }
}

fn week_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let monday = now.date_naive() - Duration::days(i64::from(now.weekday().num_days_from_monday()));
    let start = Utc.from_utc_datetime(&monday.and_time(NaiveTime::default()));
    (start, start + Duration::days(7))
}
