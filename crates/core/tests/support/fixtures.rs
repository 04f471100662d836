//! Fixture builders for tickets and directory records

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, TimeZone, Utc};
use helpdesk_domain::{
    Channel, Client, ClientId, Department, DepartmentId, Employee, EmployeeId, ReplyAuthor,
    Ticket, TicketId, TicketPriority, TicketStatus, WorkType, WorkTypeId,
};
use rust_decimal::Decimal;

/// Fixed "now" shared by all fixtures
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap()
}

pub fn client(id: &str, name: &str) -> Client {
    Client {
        id: ClientId::new(id),
        name: name.into(),
        email: Some(format!("{id}@example.com")),
        phone: None,
        company: None,
        tags: BTreeSet::new(),
        created_at: now() - Duration::days(90),
        custom_fields: BTreeMap::new(),
    }
}

pub fn employee(id: &str, name: &str) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        full_name: name.into(),
        email: format!("{id}@helpdesk.local"),
        position: "Support engineer".into(),
        department_id: Some(DepartmentId::new("d-support")),
        is_active: true,
    }
}

pub fn department(id: &str, members: &[&str]) -> Department {
    Department {
        id: DepartmentId::new(id),
        name: "Support".into(),
        description: None,
        employee_ids: members.iter().map(|m| EmployeeId::new(*m)).collect(),
        integrations: vec![],
    }
}

pub fn work_type(id: &str, price: Decimal) -> WorkType {
    WorkType {
        id: WorkTypeId::new(id),
        name: format!("{id} work"),
        unit: "ticket".into(),
        price_per_unit: price,
        updated_at: now() - Duration::days(30),
    }
}

/// Builder for tickets relative to [`now`]
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: TicketId::new(id),
                subject: format!("Ticket {id}"),
                content: String::new(),
                status: TicketStatus::New,
                priority: TicketPriority::Medium,
                channel: Channel::Email,
                client_id: ClientId::new("c-1"),
                assignee_ids: vec![],
                department_ids: vec![],
                created_at: now() - Duration::days(1),
                updated_at: now() - Duration::hours(1),
                last_reply_at: now() - Duration::hours(1),
                last_reply_by: ReplyAuthor::Client,
                sla_deadline: now() + Duration::hours(24),
                tags: BTreeSet::new(),
                has_attachments: false,
                internal_notes: vec![],
                messages: vec![],
            },
        }
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.ticket.subject = subject.into();
        self
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.ticket.status = status;
        self
    }

    pub fn priority(mut self, priority: TicketPriority) -> Self {
        self.ticket.priority = priority;
        self
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.ticket.channel = channel;
        self
    }

    pub fn client(mut self, id: &str) -> Self {
        self.ticket.client_id = ClientId::new(id);
        self
    }

    pub fn assignee(mut self, id: &str) -> Self {
        self.ticket.assignee_ids.push(EmployeeId::new(id));
        self
    }

    pub fn department(mut self, id: &str) -> Self {
        self.ticket.department_ids.push(DepartmentId::new(id));
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.ticket.tags.insert(tag.into());
        self
    }

    /// Deadline offset from [`now`]
    pub fn due_in(mut self, offset: Duration) -> Self {
        self.ticket.sla_deadline = now() + offset;
        self
    }

    /// Last update offset before [`now`]
    pub fn updated_ago(mut self, offset: Duration) -> Self {
        self.ticket.updated_at = now() - offset;
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}
