//! Ticket queries - derived SLA status, filtering and detail lookup

use std::sync::Arc;

use helpdesk_domain::{
    Channel, ClientId, EmployeeId, HelpdeskError, Result, SlaOverview, SlaPolicy, SlaStatus,
    Ticket, TicketDetails, TicketId, TicketPriority, TicketStatus, TicketSummary,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ports::TicketRepository;
use crate::clock::Clock;
use crate::directory::ports::{ClientRepository, DepartmentRepository, EmployeeRepository};

/// Criteria for listing tickets. Every field is optional; set fields are
/// combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub channel: Option<Channel>,
    pub client_id: Option<ClientId>,
    pub assignee_id: Option<EmployeeId>,
    pub tag: Option<String>,
    pub sla_status: Option<SlaStatus>,
    /// Case-insensitive search over subject and content
    pub search: Option<String>,
}

impl TicketFilter {
    fn accepts(&self, summary: &TicketSummary) -> bool {
        let ticket = &summary.ticket;
        self.status.map_or(true, |s| ticket.status == s)
            && self.priority.map_or(true, |p| ticket.priority == p)
            && self.channel.map_or(true, |c| ticket.channel == c)
            && self.client_id.as_ref().map_or(true, |c| &ticket.client_id == c)
            && self.assignee_id.as_ref().map_or(true, |e| ticket.is_assigned_to(e))
            && self.tag.as_deref().map_or(true, |t| ticket.has_tag(t))
            && self.sla_status.map_or(true, |s| summary.sla_status == s)
            && self.search.as_deref().map_or(true, |q| ticket.matches_text(q))
    }
}

/// Ticket query service
pub struct TicketService {
    tickets: Arc<dyn TicketRepository>,
    clients: Arc<dyn ClientRepository>,
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
    clock: Arc<dyn Clock>,
    policy: SlaPolicy,
}

impl TicketService {
    /// Create a service using the default SLA policy
    pub fn new(
        tickets: Arc<dyn TicketRepository>,
        clients: Arc<dyn ClientRepository>,
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { tickets, clients, employees, departments, clock, policy: SlaPolicy::default() }
    }

    pub fn with_policy(mut self, policy: SlaPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &SlaPolicy {
        &self.policy
    }

    /// Tickets matching `filter`, most recently updated first.
    pub fn list(&self, filter: &TicketFilter) -> Result<Vec<TicketSummary>> {
        let now = self.clock.now();
        let mut summaries: Vec<_> = self
            .tickets
            .list_tickets()?
            .into_iter()
            .map(|ticket| TicketSummary::new(ticket, &self.policy, now))
            .filter(|summary| filter.accepts(summary))
            .collect();
        summaries.sort_by(|a, b| {
            b.ticket.updated_at.cmp(&a.ticket.updated_at).then_with(|| a.ticket.id.cmp(&b.ticket.id))
        });
        debug!(count = summaries.len(), ?filter, "tickets_listed");
        Ok(summaries)
    }

    /// Ticket with client, assignees and departments resolved.
    ///
    /// # Errors
    /// `NotFound` when the ticket or any record it references is missing.
    pub fn details(&self, id: &TicketId) -> Result<TicketDetails> {
        let ticket = self.find(id)?;
        let client = self
            .clients
            .find_client(&ticket.client_id)?
            .ok_or_else(|| HelpdeskError::not_found("client", &ticket.client_id))?;
        let assignees = ticket
            .assignee_ids
            .iter()
            .map(|eid| {
                self.employees
                    .find_employee(eid)?
                    .ok_or_else(|| HelpdeskError::not_found("employee", eid))
            })
            .collect::<Result<Vec<_>>>()?;
        let departments = ticket
            .department_ids
            .iter()
            .map(|did| {
                self.departments
                    .find_department(did)?
                    .ok_or_else(|| HelpdeskError::not_found("department", did))
            })
            .collect::<Result<Vec<_>>>()?;

        let summary = TicketSummary::new(ticket, &self.policy, self.clock.now());
        Ok(TicketDetails { summary, client, assignees, departments })
    }

    /// Counts of open tickets per SLA status.
    pub fn sla_overview(&self) -> Result<SlaOverview> {
        let now = self.clock.now();
        let mut overview = SlaOverview::default();
        for ticket in self.tickets.list_tickets()?.iter().filter(|t| t.status.is_open()) {
            overview.record(self.policy.status_of(ticket, now));
        }
        Ok(overview)
    }

    fn find(&self, id: &TicketId) -> Result<Ticket> {
        self.tickets.find_ticket(id)?.ok_or_else(|| HelpdeskError::not_found("ticket", id))
    }
}
