//! Demo data for the in-memory store
//!
//! Timestamps are laid out relative to the `now` passed in, so a freshly
//! started process always shows a mix of good, warning and critical tickets.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use helpdesk_core::PayrollRepository;
use helpdesk_domain::{
    Attachment, Channel, Client, ClientId, CustomFieldValue, Department, DepartmentId, Employee,
    EmployeeId, HelpdeskError, IntegrationDescriptor, InternalNote, MessageAuthor, NoteBody,
    PayPeriod, PayrollSheet, PayrollSheetId, PayrollStatus, ReplyAuthor, Result, Ticket,
    TicketId, TicketMessage, TicketPriority, TicketStatus, WorkType, WorkTypeId,
};
use rust_decimal::Decimal;
use tracing::info;

use super::memory::InMemoryStore;

/// Build a store filled with demo data.
///
/// # Errors
/// Propagates domain validation failures from the payroll fixtures.
pub fn seeded_store(now: DateTime<Utc>) -> Result<InMemoryStore> {
    let store = InMemoryStore::new();
    seed(&store, now)?;
    Ok(store)
}

/// Insert the demo data set into `store`.
///
/// # Errors
/// Propagates domain validation failures from the payroll fixtures.
pub fn seed(store: &InMemoryStore, now: DateTime<Utc>) -> Result<()> {
    for department in departments() {
        store.insert_department(department);
    }
    for employee in employees() {
        store.insert_employee(employee);
    }
    for client in clients(now) {
        store.insert_client(client);
    }
    let work_types = work_types(now);
    for work_type in &work_types {
        store.insert_work_type(work_type.clone());
    }
    for ticket in tickets(now) {
        store.insert_ticket(ticket);
    }
    for sheet in payroll_sheets(&work_types, now)? {
        store.insert_sheet(sheet)?;
    }

    let stats = store.stats();
    info!(
        tickets = stats.tickets,
        clients = stats.clients,
        employees = stats.employees,
        payroll_sheets = stats.payroll_sheets,
        "demo_data_seeded"
    );
    Ok(())
}

fn integration(channel: Channel, display_name: &str, enabled: bool) -> IntegrationDescriptor {
    IntegrationDescriptor { channel, display_name: display_name.into(), enabled }
}

fn departments() -> Vec<Department> {
    vec![
        Department {
            id: DepartmentId::new("dep-support"),
            name: "First-line support".into(),
            description: Some("Inbound requests from every channel".into()),
            employee_ids: vec![EmployeeId::new("emp-1"), EmployeeId::new("emp-2"), EmployeeId::new("emp-3")],
            integrations: vec![
                integration(Channel::Email, "support@helpdesk.local", true),
                integration(Channel::Telegram, "@helpdesk_support_bot", true),
                integration(Channel::WhatsApp, "+1 555 0100", true),
                integration(Channel::Viber, "Helpdesk Support", false),
            ],
        },
        Department {
            id: DepartmentId::new("dep-infra"),
            name: "Infrastructure".into(),
            description: Some("Networks, servers and workstations".into()),
            employee_ids: vec![EmployeeId::new("emp-4"), EmployeeId::new("emp-5")],
            integrations: vec![integration(Channel::Phone, "Infra hotline", true)],
        },
        Department {
            id: DepartmentId::new("dep-billing"),
            name: "Billing".into(),
            description: None,
            employee_ids: vec![EmployeeId::new("emp-6")],
            integrations: vec![integration(Channel::Email, "billing@helpdesk.local", true)],
        },
    ]
}

fn employee(id: &str, name: &str, position: &str, department: &str, active: bool) -> Employee {
    let login = name.split_whitespace().next().unwrap_or(id).to_lowercase();
    Employee {
        id: EmployeeId::new(id),
        full_name: name.into(),
        email: format!("{login}@helpdesk.local"),
        position: position.into(),
        department_id: Some(DepartmentId::new(department)),
        is_active: active,
    }
}

fn employees() -> Vec<Employee> {
    vec![
        employee("emp-1", "Anna Petrova", "Support lead", "dep-support", true),
        employee("emp-2", "Maxim Orlov", "Support engineer", "dep-support", true),
        employee("emp-3", "Elena Sokolova", "Support engineer", "dep-support", true),
        employee("emp-4", "Dmitry Volkov", "System administrator", "dep-infra", true),
        employee("emp-5", "Igor Smirnov", "Network engineer", "dep-infra", false),
        employee("emp-6", "Olga Kuznetsova", "Billing specialist", "dep-billing", true),
    ]
}

fn client(
    id: &str,
    name: &str,
    company: Option<&str>,
    tags: &[&str],
    created_at: DateTime<Utc>,
) -> Client {
    let slug = name.to_lowercase().replace(' ', ".");
    Client {
        id: ClientId::new(id),
        name: name.into(),
        email: Some(format!("{slug}@example.com")),
        phone: None,
        company: company.map(Into::into),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        created_at,
        custom_fields: BTreeMap::new(),
    }
}

fn clients(now: DateTime<Utc>) -> Vec<Client> {
    let mut acme = client("cl-1", "Ivan Ivanov", Some("Acme LLC"), &["vip", "contract"], now - Duration::days(400));
    acme.phone = Some("+1 555 0142".into());
    acme.custom_fields.insert("contractNumber".into(), CustomFieldValue::Text("AC-2023-17".into()));
    acme.custom_fields.insert("seats".into(), CustomFieldValue::Number(Decimal::from(45)));
    acme.custom_fields.insert("onPremise".into(), CustomFieldValue::Flag(true));

    let mut globex =
        client("cl-2", "Maria Sidorova", Some("Globex"), &["contract"], now - Duration::days(200));
    if let Some(renewal) = NaiveDate::from_ymd_opt(now.year() + 1, 1, 15) {
        globex.custom_fields.insert("renewalDate".into(), CustomFieldValue::Date(renewal));
    }

    vec![
        acme,
        globex,
        client("cl-3", "Petr Nikolaev", None, &[], now - Duration::days(30)),
        client("cl-4", "Svetlana Morozova", Some("Initech"), &["trial"], now - Duration::days(12)),
        client("cl-5", "Alexey Fedorov", None, &["vip"], now - Duration::days(3)),
    ]
}

fn work_type(id: &str, name: &str, unit: &str, cents: i64, updated_at: DateTime<Utc>) -> WorkType {
    WorkType {
        id: WorkTypeId::new(id),
        name: name.into(),
        unit: unit.into(),
        price_per_unit: Decimal::new(cents, 2),
        updated_at,
    }
}

fn work_types(now: DateTime<Utc>) -> Vec<WorkType> {
    let since = now - Duration::days(60);
    vec![
        work_type("wt-reply", "Ticket reply", "ticket", 25_000, since),
        work_type("wt-call", "Phone consultation", "call", 50_000, since),
        work_type("wt-onsite", "On-site visit", "visit", 250_000, since),
        work_type("wt-hour", "Engineering time", "hour", 120_000, since),
    ]
}

/// Shape of one demo ticket; expanded by [`build_ticket`]
struct TicketSeed {
    id: &'static str,
    subject: &'static str,
    content: &'static str,
    status: TicketStatus,
    priority: TicketPriority,
    channel: Channel,
    client: &'static str,
    assignees: &'static [&'static str],
    departments: &'static [&'static str],
    tags: &'static [&'static str],
    opened_ago: Duration,
    updated_ago: Duration,
    due_in: Duration,
    last_reply_by: ReplyAuthor,
}

fn build_ticket(seed: TicketSeed, now: DateTime<Utc>) -> Ticket {
    let created_at = now - seed.opened_ago;
    let updated_at = now - seed.updated_ago;
    let client_id = ClientId::new(seed.client);
    let assignee_ids: Vec<EmployeeId> = seed.assignees.iter().map(|a| EmployeeId::new(*a)).collect();

    let mut messages = vec![TicketMessage {
        id: format!("{}-m1", seed.id),
        author: MessageAuthor::Client(client_id.clone()),
        body: seed.content.into(),
        sent_at: created_at,
        channel: seed.channel,
        attachments: vec![],
    }];
    if seed.last_reply_by == ReplyAuthor::Agent {
        if let Some(agent) = assignee_ids.first() {
            messages.push(TicketMessage {
                id: format!("{}-m2", seed.id),
                author: MessageAuthor::Agent(agent.clone()),
                body: "Thanks, we are looking into it.".into(),
                sent_at: updated_at,
                channel: seed.channel,
                attachments: vec![],
            });
        }
    }

    Ticket {
        id: TicketId::new(seed.id),
        subject: seed.subject.into(),
        content: seed.content.into(),
        status: seed.status,
        priority: seed.priority,
        channel: seed.channel,
        client_id,
        assignee_ids,
        department_ids: seed.departments.iter().map(|d| DepartmentId::new(*d)).collect(),
        created_at,
        updated_at,
        last_reply_at: updated_at,
        last_reply_by: seed.last_reply_by,
        sla_deadline: now + seed.due_in,
        tags: seed.tags.iter().map(|t| (*t).to_string()).collect::<BTreeSet<_>>(),
        has_attachments: false,
        internal_notes: vec![],
        messages,
    }
}

fn tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    let seeds = [
        TicketSeed {
            id: "TCK-1001",
            subject: "VPN disconnects every hour",
            content: "Since Monday the VPN client drops the connection roughly every hour.",
            status: TicketStatus::InProgress,
            priority: TicketPriority::High,
            channel: Channel::Email,
            client: "cl-1",
            assignees: &["emp-4"],
            departments: &["dep-infra"],
            tags: &["network", "vpn"],
            opened_ago: Duration::hours(30),
            updated_ago: Duration::hours(2),
            due_in: Duration::hours(3),
            last_reply_by: ReplyAuthor::Agent,
        },
        TicketSeed {
            id: "TCK-1002",
            subject: "Invoice for March is missing",
            content: "We did not receive the invoice for March, please resend it.",
            status: TicketStatus::New,
            priority: TicketPriority::Medium,
            channel: Channel::Telegram,
            client: "cl-2",
            assignees: &[],
            departments: &["dep-billing"],
            tags: &["billing"],
            opened_ago: Duration::hours(5),
            updated_ago: Duration::hours(5),
            due_in: Duration::hours(19),
            last_reply_by: ReplyAuthor::Client,
        },
        TicketSeed {
            id: "TCK-1003",
            subject: "Mail server is down",
            content: "Nobody in the office can send or receive email.",
            status: TicketStatus::InProgress,
            priority: TicketPriority::Critical,
            channel: Channel::Phone,
            client: "cl-1",
            assignees: &["emp-4", "emp-1"],
            departments: &["dep-infra", "dep-support"],
            tags: &["email", "outage"],
            opened_ago: Duration::hours(6),
            updated_ago: Duration::minutes(20),
            due_in: Duration::minutes(-45),
            last_reply_by: ReplyAuthor::Agent,
        },
        TicketSeed {
            id: "TCK-1004",
            subject: "Printer on the second floor jams",
            content: "The HP printer near the kitchen jams on every duplex job.",
            status: TicketStatus::New,
            priority: TicketPriority::Low,
            channel: Channel::Web,
            client: "cl-3",
            assignees: &["emp-2"],
            departments: &["dep-support"],
            tags: &["hardware"],
            opened_ago: Duration::hours(2),
            updated_ago: Duration::hours(2),
            due_in: Duration::hours(46),
            last_reply_by: ReplyAuthor::Client,
        },
        TicketSeed {
            id: "TCK-1005",
            subject: "Need access to the CRM",
            content: "New sales manager starts tomorrow and needs a CRM account.",
            status: TicketStatus::Resolved,
            priority: TicketPriority::Medium,
            channel: Channel::Chat,
            client: "cl-4",
            assignees: &["emp-3"],
            departments: &["dep-support"],
            tags: &["access"],
            opened_ago: Duration::days(3),
            updated_ago: Duration::days(1),
            due_in: Duration::days(-1),
            last_reply_by: ReplyAuthor::Agent,
        },
        TicketSeed {
            id: "TCK-1006",
            subject: "WhatsApp notifications are delayed",
            content: "Order notifications arrive with a delay of up to 30 minutes.",
            status: TicketStatus::New,
            priority: TicketPriority::High,
            channel: Channel::WhatsApp,
            client: "cl-5",
            assignees: &["emp-2", "emp-3"],
            departments: &["dep-support"],
            tags: &["integration"],
            opened_ago: Duration::hours(1),
            updated_ago: Duration::minutes(50),
            due_in: Duration::minutes(90),
            last_reply_by: ReplyAuthor::Client,
        },
        TicketSeed {
            id: "TCK-1007",
            subject: "Password reset for the accounting workstation",
            content: "The accountant forgot the Windows password.",
            status: TicketStatus::Closed,
            priority: TicketPriority::Low,
            channel: Channel::Viber,
            client: "cl-2",
            assignees: &["emp-1"],
            departments: &["dep-support"],
            tags: &["access"],
            opened_ago: Duration::days(10),
            updated_ago: Duration::days(9),
            due_in: Duration::days(-9),
            last_reply_by: ReplyAuthor::Agent,
        },
        TicketSeed {
            id: "TCK-1008",
            subject: "Slow file share",
            content: "Opening files on the shared drive takes more than a minute.",
            status: TicketStatus::InProgress,
            priority: TicketPriority::Medium,
            channel: Channel::Email,
            client: "cl-4",
            assignees: &["emp-4"],
            departments: &["dep-infra"],
            tags: &["network", "storage"],
            opened_ago: Duration::days(2),
            updated_ago: Duration::hours(7),
            due_in: Duration::hours(26),
            last_reply_by: ReplyAuthor::Client,
        },
    ];

    let mut tickets: Vec<Ticket> = seeds.into_iter().map(|seed| build_ticket(seed, now)).collect();

    if let Some(outage) = tickets.iter_mut().find(|t| t.id.as_str() == "TCK-1003") {
        outage.has_attachments = true;
        if let Some(first) = outage.messages.first_mut() {
            first.attachments.push(Attachment { name: "bounce.eml".into(), size_bytes: 18_432 });
        }
        outage.internal_notes = vec![
            InternalNote {
                id: "TCK-1003-n1".into(),
                author_id: EmployeeId::new("emp-1"),
                created_at: now - Duration::hours(5),
                body: NoteBody::StatusChange { from: TicketStatus::New, to: TicketStatus::InProgress },
            },
            InternalNote {
                id: "TCK-1003-n2".into(),
                author_id: EmployeeId::new("emp-1"),
                created_at: now - Duration::hours(4),
                body: NoteBody::Mention {
                    text: "@Dmitry please check the MX records".into(),
                    mentioned: vec![EmployeeId::new("emp-4")],
                },
            },
            InternalNote {
                id: "TCK-1003-n3".into(),
                author_id: EmployeeId::new("emp-4"),
                created_at: now - Duration::minutes(20),
                body: NoteBody::Comment { text: "Disk on the relay is full, cleaning up.".into() },
            },
        ];
    }

    tickets
}

fn payroll_sheets(work_types: &[WorkType], now: DateTime<Utc>) -> Result<Vec<PayrollSheet>> {
    let find = |id: &str| {
        work_types
            .iter()
            .find(|w| w.id.as_str() == id)
            .ok_or_else(|| HelpdeskError::not_found("work type", id))
    };

    let this_month = month_start(now.date_naive())?;
    let last_month = month_start(this_month - Duration::days(1))?;

    let mut previous = PayrollSheet::new(
        PayrollSheetId::new("ps-emp-1-prev"),
        EmployeeId::new("emp-1"),
        PayPeriod::new(last_month, this_month)?,
        now - Duration::days(3),
    )
    .with_comment("Regular monthly statement");
    previous.add_item(find("wt-reply")?, Decimal::from(10), now - Duration::days(3))?;
    previous.add_item(find("wt-call")?, Decimal::from(8), now - Duration::days(3))?;
    previous.transition_status(PayrollStatus::Approved, now - Duration::days(1))?;

    let next_month = next_month_start(this_month)?;
    let mut current = PayrollSheet::new(
        PayrollSheetId::new("ps-emp-4-cur"),
        EmployeeId::new("emp-4"),
        PayPeriod::new(this_month, next_month)?,
        now - Duration::hours(6),
    );
    current.add_item(find("wt-onsite")?, Decimal::from(2), now - Duration::hours(6))?;
    current.add_item(find("wt-hour")?, Decimal::new(65, 1), now - Duration::hours(1))?;

    Ok(vec![previous, current])
}

fn month_start(date: NaiveDate) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .ok_or_else(|| HelpdeskError::Internal(format!("no first day for month of {date}")))
}

fn next_month_start(first: NaiveDate) -> Result<NaiveDate> {
    let (year, month) = if first.month() == 12 { (first.year() + 1, 1) } else { (first.year(), first.month() + 1) };
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| HelpdeskError::Internal(format!("no month after {first}")))
}
