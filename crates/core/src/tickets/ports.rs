//! Port interfaces for tickets

use helpdesk_domain::{Result, Ticket, TicketId};

/// Read access to tickets
pub trait TicketRepository: Send + Sync {
    fn list_tickets(&self) -> Result<Vec<Ticket>>;

    fn find_ticket(&self, id: &TicketId) -> Result<Option<Ticket>>;
}
