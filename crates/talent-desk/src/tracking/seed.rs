use chrono::{DateTime, Duration, Utc};

use super::candidates::{Candidate, CandidateStatus};
use super::dashboard::{ActivityEvent, ActivityKind};
use super::interviews::{Interview, InterviewStatus};
use super::jobs::{Job, JobStatus, Urgency};
use super::messages::{Message, MessageKind};
use super::reports::FunnelStage;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(crate) fn jobs(now: DateTime<Utc>) -> Vec<Job> {
    let job = |id: &str,
               title: &str,
               department: &str,
               location: &str,
               salary: &str,
               applicants: u32,
               status: JobStatus,
               days_ago: i64,
               urgency: Option<Urgency>| Job {
        id: id.to_string(),
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        employment_type: "Full-time".to_string(),
        salary: salary.to_string(),
        applicants,
        status,
        urgency,
        posted_at: now - Duration::days(days_ago),
    };

    vec![
        job(
            "1",
            "Senior Frontend Developer",
            "Engineering",
            "Bangalore, KA",
            "₹15L - ₹20L",
            24,
            JobStatus::Active,
            2,
            Some(Urgency::High),
        ),
        job(
            "2",
            "UX Designer",
            "Design",
            "Mumbai, MH",
            "₹12L - ₹16L",
            18,
            JobStatus::Active,
            3,
            Some(Urgency::Medium),
        ),
        job(
            "3",
            "Product Manager",
            "Product",
            "Remote",
            "₹18L - ₹25L",
            12,
            JobStatus::Draft,
            1,
            None,
        ),
        job(
            "4",
            "Backend Engineer",
            "Engineering",
            "Hyderabad, TG",
            "₹14L - ₹18L",
            31,
            JobStatus::Active,
            5,
            Some(Urgency::Low),
        ),
        job(
            "5",
            "Marketing Specialist",
            "Marketing",
            "Delhi, DL",
            "₹8L - ₹12L",
            8,
            JobStatus::Closed,
            7,
            None,
        ),
        job(
            "6",
            "Data Scientist",
            "Analytics",
            "Pune, MH",
            "₹20L - ₹28L",
            15,
            JobStatus::Active,
            4,
            Some(Urgency::High),
        ),
    ]
}

pub(crate) fn candidates() -> Vec<Candidate> {
    let candidate = |id: &str,
                     name: &str,
                     phone: &str,
                     position: &str,
                     location: &str,
                     experience: &str,
                     skills: &[&str],
                     status: CandidateStatus,
                     rating: f32| Candidate {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
        phone: phone.to_string(),
        position: position.to_string(),
        location: location.to_string(),
        experience: experience.to_string(),
        skills: strings(skills),
        status,
        rating,
        applied_position: position.to_string(),
    };

    vec![
        candidate(
            "1",
            "Alex Johnson",
            "+1 (555) 123-4567",
            "Senior Frontend Developer",
            "San Francisco, CA",
            "5+ years",
            &["React", "TypeScript", "Node.js", "GraphQL", "AWS"],
            CandidateStatus::New,
            4.8,
        ),
        candidate(
            "2",
            "Sarah Chen",
            "+1 (555) 234-5678",
            "UX Designer",
            "New York, NY",
            "4+ years",
            &["Figma", "Adobe Creative Suite", "User Research", "Prototyping"],
            CandidateStatus::Interview,
            4.9,
        ),
        candidate(
            "3",
            "Mike Rodriguez",
            "+1 (555) 345-6789",
            "Backend Engineer",
            "Austin, TX",
            "6+ years",
            &["Python", "Django", "PostgreSQL", "Docker", "Kubernetes"],
            CandidateStatus::Hired,
            4.7,
        ),
        candidate(
            "4",
            "Emma Davis",
            "+1 (555) 456-7890",
            "Product Manager",
            "Remote",
            "7+ years",
            &["Product Strategy", "Agile", "Analytics", "Roadmapping"],
            CandidateStatus::Offer,
            4.6,
        ),
        candidate(
            "5",
            "James Wilson",
            "+1 (555) 567-8901",
            "Data Scientist",
            "Seattle, WA",
            "3+ years",
            &["Python", "R", "Machine Learning", "SQL", "Tableau"],
            CandidateStatus::Screening,
            4.4,
        ),
        candidate(
            "6",
            "Lisa Anderson",
            "+1 (555) 678-9012",
            "Marketing Specialist",
            "Los Angeles, CA",
            "2+ years",
            &["Digital Marketing", "SEO", "Content Strategy", "Analytics"],
            CandidateStatus::Rejected,
            3.8,
        ),
    ]
}

pub(crate) fn interviews(now: DateTime<Utc>) -> Vec<Interview> {
    let interview = |id: &str,
                     candidate: &str,
                     position: &str,
                     kind: &str,
                     offset: Duration,
                     duration_minutes: u32,
                     location: &str,
                     meeting_link: Option<&str>,
                     interviewers: &[&str],
                     status: InterviewStatus,
                     notes: &str| Interview {
        id: id.to_string(),
        candidate: candidate.to_string(),
        position: position.to_string(),
        kind: kind.to_string(),
        scheduled_at: now + offset,
        duration_minutes,
        location: location.to_string(),
        meeting_link: meeting_link.map(str::to_string),
        interviewers: strings(interviewers),
        status,
        notes: notes.to_string(),
    };

    vec![
        interview(
            "1",
            "Priya Sharma",
            "Senior Frontend Developer",
            "Technical Interview",
            Duration::hours(2),
            60,
            "Conference Room A",
            Some("https://zoom.us/j/123456789"),
            &["rahul.gupta@company.com", "neha.singh@company.com"],
            InterviewStatus::Scheduled,
            "Focus on React and TypeScript skills",
        ),
        interview(
            "2",
            "Arjun Patel",
            "UX Designer",
            "Portfolio Review",
            Duration::hours(24),
            45,
            "Remote",
            Some("https://meet.google.com/abc-defg-hij"),
            &["deepika.design@company.com"],
            InterviewStatus::Scheduled,
            "Review portfolio and design thinking process",
        ),
        interview(
            "3",
            "Kavya Reddy",
            "Product Manager",
            "Final Round",
            -Duration::hours(2),
            90,
            "Conference Room B",
            None,
            &["vikram.ceo@company.com", "anita.cto@company.com"],
            InterviewStatus::Completed,
            "Leadership and strategic thinking assessment",
        ),
        interview(
            "4",
            "Rohit Verma",
            "Backend Engineer",
            "Phone Screening",
            -Duration::hours(24),
            30,
            "Remote",
            None,
            &["sneha.hr@company.com"],
            InterviewStatus::Completed,
            "Initial screening - passed",
        ),
        interview(
            "5",
            "Aisha Khan",
            "Data Scientist",
            "Technical Interview",
            Duration::days(3),
            75,
            "Lab Room",
            None,
            &["karan.data@company.com"],
            InterviewStatus::Scheduled,
            "Machine learning and statistics focus",
        ),
        interview(
            "6",
            "Siddharth Jain",
            "Marketing Specialist",
            "Behavioral Interview",
            Duration::hours(1),
            45,
            "Conference Room C",
            None,
            &["ritu.marketing@company.com"],
            InterviewStatus::NoShow,
            "Candidate did not attend",
        ),
    ]
}

pub(crate) fn messages(now: DateTime<Utc>) -> Vec<Message> {
    let message = |id: &str,
                   subject: &str,
                   sender: &str,
                   email: &str,
                   preview: &str,
                   hours_ago: i64,
                   is_read: bool,
                   is_starred: bool,
                   attachments: u32,
                   kind: MessageKind| Message {
        id: id.to_string(),
        subject: subject.to_string(),
        sender: sender.to_string(),
        email: email.to_string(),
        preview: preview.to_string(),
        sent_at: now - Duration::hours(hours_ago),
        is_read,
        is_starred,
        attachments,
        kind,
    };

    vec![
        message(
            "1",
            "Interview Feedback - Sarah Johnson",
            "John Doe",
            "john.doe@company.com",
            "Great technical skills, would recommend moving to final round...",
            2,
            false,
            true,
            1,
            MessageKind::InterviewFeedback,
        ),
        message(
            "2",
            "New Application - Frontend Developer",
            "Mike Chen",
            "mike.chen@email.com",
            "Hi, I'm interested in the Senior Frontend Developer position...",
            4,
            true,
            false,
            2,
            MessageKind::Application,
        ),
        message(
            "3",
            "Interview Reschedule Request",
            "Emily Davis",
            "emily.davis@email.com",
            "Could we reschedule our interview for next week? I have a conflict...",
            24,
            true,
            false,
            0,
            MessageKind::Schedule,
        ),
        message(
            "4",
            "Offer Acceptance - Product Manager",
            "Alex Rivera",
            "alex.rivera@email.com",
            "Thank you for the offer! I'm excited to accept and join the team...",
            48,
            false,
            true,
            0,
            MessageKind::Offer,
        ),
        message(
            "5",
            "Follow-up on UX Designer Position",
            "Jessica Kim",
            "jessica.kim@email.com",
            "I wanted to follow up on my application submitted last week...",
            72,
            true,
            false,
            0,
            MessageKind::Followup,
        ),
    ]
}

pub(crate) fn activity(now: DateTime<Utc>) -> Vec<ActivityEvent> {
    let event = |id: &str,
                 kind: ActivityKind,
                 candidate: &str,
                 position: &str,
                 status: &str,
                 hours_ago: i64| ActivityEvent {
        id: id.to_string(),
        kind,
        candidate: candidate.to_string(),
        position: position.to_string(),
        status: status.to_string(),
        occurred_at: now - Duration::hours(hours_ago),
    };

    vec![
        event(
            "1",
            ActivityKind::Application,
            "Alex Johnson",
            "Senior Frontend Developer",
            "new",
            2,
        ),
        event(
            "2",
            ActivityKind::Interview,
            "Sarah Chen",
            "UX Designer",
            "completed",
            4,
        ),
        event(
            "3",
            ActivityKind::Hire,
            "Mike Rodriguez",
            "Backend Engineer",
            "hired",
            24,
        ),
        event(
            "4",
            ActivityKind::Application,
            "Emma Davis",
            "Product Manager",
            "new",
            48,
        ),
    ]
}

/// Pipeline shown on the landing page, separate from the report funnel.
pub(crate) fn pipeline() -> Vec<FunnelStage> {
    [
        ("Applications", 284),
        ("Screening", 142),
        ("First Interview", 68),
        ("Final Interview", 34),
        ("Offers", 12),
        ("Hired", 8),
    ]
    .into_iter()
    .map(|(stage, count)| FunnelStage {
        stage: stage.to_string(),
        count,
    })
    .collect()
}
