use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::board::Listing;
use super::category::CategoryValue;
use crate::filter::{FieldValue, Filterable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    InterviewFeedback,
    Application,
    Schedule,
    Offer,
    Followup,
}

impl CategoryValue for MessageKind {
    fn ordered() -> &'static [Self] {
        &[
            Self::InterviewFeedback,
            Self::Application,
            Self::Schedule,
            Self::Offer,
            Self::Followup,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::InterviewFeedback => "interview_feedback",
            Self::Application => "application",
            Self::Schedule => "schedule",
            Self::Offer => "offer",
            Self::Followup => "followup",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::InterviewFeedback => "Feedback",
            Self::Application => "Application",
            Self::Schedule => "Schedule",
            Self::Offer => "Offer",
            Self::Followup => "Follow-up",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub subject: String,
    pub sender: String,
    pub email: String,
    pub preview: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
    pub is_starred: bool,
    pub attachments: u32,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

impl Filterable for Message {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "subject" => FieldValue::Text(&self.subject),
            "sender" => FieldValue::Text(&self.sender),
            "email" => FieldValue::Text(&self.email),
            "preview" => FieldValue::Text(&self.preview),
            "type" => FieldValue::Text(self.kind.key()),
            _ => FieldValue::Missing,
        }
    }
}

impl Listing for Message {
    const COLLECTION: &'static str = "messages";
    const SEARCH_FIELDS: &'static [&'static str] = &["subject", "sender", "preview"];
    const FILTER_DIMENSIONS: &'static [&'static str] = &["type"];
    const BADGE_DIMENSION: &'static str = "type";
    const OPTION_DIMENSIONS: &'static [&'static str] = &[];

    fn badge_values() -> Vec<&'static str> {
        MessageKind::keys()
    }

    fn summary_line(&self) -> String {
        let marker = if self.is_read { " " } else { "*" };
        format!(
            "{marker} {} | {} | {}",
            self.sender,
            self.subject,
            self.kind.label()
        )
    }
}

/// Inbox header counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InboxSummary {
    pub total: usize,
    pub unread: usize,
    pub starred: usize,
    pub with_attachments: usize,
}

impl InboxSummary {
    pub fn from_messages(messages: &[Message]) -> Self {
        Self {
            total: messages.len(),
            unread: messages.iter().filter(|message| !message.is_read).count(),
            starred: messages.iter().filter(|message| message.is_starred).count(),
            with_attachments: messages
                .iter()
                .filter(|message| message.attachments > 0)
                .count(),
        }
    }
}
