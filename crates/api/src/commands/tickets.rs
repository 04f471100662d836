//! Ticket queries

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use helpdesk_core::TicketFilter;
use helpdesk_domain::{SlaOverview, TicketDetails, TicketId, TicketSummary};

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::execute_command;

/// `GET /api/tickets?status=open&slaStatus=critical&search=vpn`
pub async fn list_tickets(
    State(ctx): State<Arc<AppContext>>,
    filter: Result<Query<TicketFilter>, QueryRejection>,
) -> ApiResult<Vec<TicketSummary>> {
    let Query(filter) = filter?;
    execute_command("tickets::list", || ctx.tickets.list(&filter)).map(Json)
}

pub async fn get_ticket(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<TicketId>,
) -> ApiResult<TicketDetails> {
    execute_command("tickets::details", || ctx.tickets.details(&id)).map(Json)
}

/// Good/warning/critical counts across open tickets.
pub async fn get_sla_overview(State(ctx): State<Arc<AppContext>>) -> ApiResult<SlaOverview> {
    execute_command("tickets::sla_overview", || ctx.tickets.sla_overview()).map(Json)
}
