//! Ticket types
//!
//! A ticket carries its conversation (messages) and internal notes in
//! order. SLA status is not a field: it is derived on read, see
//! [`crate::sla::SlaPolicy::status_of`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::directory::{Client, Department, Employee};
use super::{Channel, ClientId, DepartmentId, EmployeeId, TicketId};
use crate::sla::{SlaPolicy, SlaStatus};

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    New,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Whether the ticket still counts against its SLA deadline.
    pub fn is_open(self) -> bool {
        matches!(self, Self::New | Self::InProgress)
    }
}

impl_domain_status_conversions!(TicketStatus {
    New => "new",
    InProgress => "in-progress",
    Resolved => "resolved",
    Closed => "closed",
});

/// Ticket priority, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl_domain_status_conversions!(TicketPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

/// Who wrote the most recent reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ReplyAuthor {
    Client,
    Agent,
}

/// File attached to a message (metadata only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub size_bytes: u64,
}

/// Author of a ticket message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum MessageAuthor {
    Client(ClientId),
    Agent(EmployeeId),
}

impl MessageAuthor {
    pub fn reply_author(&self) -> ReplyAuthor {
        match self {
            Self::Client(_) => ReplyAuthor::Client,
            Self::Agent(_) => ReplyAuthor::Agent,
        }
    }
}

/// A message in the ticket conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    pub id: String,
    pub author: MessageAuthor,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub channel: Channel,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Content of an internal (agent-only) note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NoteBody {
    Comment { text: String },
    Mention { text: String, mentioned: Vec<EmployeeId> },
    StatusChange { from: TicketStatus, to: TicketStatus },
}

/// Internal note left by an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct InternalNote {
    pub id: String,
    pub author_id: EmployeeId,
    pub created_at: DateTime<Utc>,
    pub body: NoteBody,
}

impl InternalNote {
    /// Employees mentioned by this note, if any.
    pub fn mentions(&self) -> &[EmployeeId] {
        match &self.body {
            NoteBody::Mention { mentioned, .. } => mentioned,
            _ => &[],
        }
    }
}

/// Support ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub subject: String,
    pub content: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub channel: Channel,
    pub client_id: ClientId,
    #[serde(default)]
    pub assignee_ids: Vec<EmployeeId>,
    #[serde(default)]
    pub department_ids: Vec<DepartmentId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_reply_at: DateTime<Utc>,
    pub last_reply_by: ReplyAuthor,
    pub sla_deadline: DateTime<Utc>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub has_attachments: bool,
    #[serde(default)]
    pub internal_notes: Vec<InternalNote>,
    #[serde(default)]
    pub messages: Vec<TicketMessage>,
}

impl Ticket {
    pub fn is_assigned_to(&self, employee: &EmployeeId) -> bool {
        self.assignee_ids.contains(employee)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive match against subject and content.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.subject.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }

    /// Derived SLA status at `now`.
    pub fn sla_status(&self, policy: &SlaPolicy, now: DateTime<Utc>) -> SlaStatus {
        policy.status_of(self, now)
    }
}

/// Ticket together with its derived SLA status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub sla_status: SlaStatus,
}

impl TicketSummary {
    pub fn new(ticket: Ticket, policy: &SlaPolicy, now: DateTime<Utc>) -> Self {
        let sla_status = ticket.sla_status(policy, now);
        Self { ticket, sla_status }
    }
}

/// Ticket with every back-reference resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TicketDetails {
    #[serde(flatten)]
    pub summary: TicketSummary,
    pub client: Client,
    pub assignees: Vec<Employee>,
    pub departments: Vec<Department>,
}
