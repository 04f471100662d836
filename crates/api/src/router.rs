//! Router assembly
//!
//! `/api/*` is answered by the JSON handlers; everything else goes to the
//! static SPA service. Hardening headers wrap both.

use std::path::Path;
use std::sync::Arc;

use axum::routing::{any, delete, get, post, put};
use axum::{middleware, Router};
use helpdesk_domain::Result;
use helpdesk_infra::http::{security_headers, spa_router};
use tower_http::trace::TraceLayer;

use crate::commands;
use crate::context::AppContext;

/// JSON API routes, without the static fallback.
pub fn api_routes() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/api/health", get(commands::get_app_health))
        // Tickets
        .route("/api/tickets", get(commands::list_tickets))
        .route("/api/tickets/sla-overview", get(commands::get_sla_overview))
        .route("/api/tickets/{id}", get(commands::get_ticket))
        // Directory
        .route("/api/clients", get(commands::list_clients))
        .route("/api/clients/{id}", get(commands::get_client))
        .route("/api/employees", get(commands::list_employees))
        .route("/api/employees/{id}", get(commands::get_employee))
        .route("/api/departments", get(commands::list_departments))
        .route("/api/departments/{id}", get(commands::get_department))
        // Payroll
        .route("/api/work-types", get(commands::list_work_types))
        .route("/api/work-types/{id}/price", put(commands::reprice_work_type))
        .route("/api/payroll/sheets", get(commands::list_sheets).post(commands::create_sheet))
        .route("/api/payroll/sheets/{id}", get(commands::get_sheet))
        .route("/api/payroll/sheets/{id}/items", post(commands::add_item))
        .route("/api/payroll/sheets/{id}/items/{item_id}", delete(commands::remove_item))
        .route("/api/payroll/sheets/{id}/status", post(commands::transition_sheet))
        // Columns
        .route("/api/columns/apply", post(commands::apply_column_command))
        .route("/api/columns/{table}", get(commands::get_columns))
        .route("/api/columns/{table}/reset", post(commands::reset_columns))
        .route("/api", any(commands::api_not_found))
        .route("/api/{*rest}", any(commands::api_not_found))
}

/// Full application router: API, SPA fallback, hardening and request tracing.
///
/// # Errors
/// Returns `HelpdeskError::Config` if the static service cannot be built.
pub fn build_router(ctx: Arc<AppContext>) -> Result<Router> {
    let server = &ctx.config.server;
    let spa: Router = spa_router(Path::new(&server.static_dir), server.asset_max_age_secs)?;

    Ok(api_routes()
        .with_state(ctx)
        .merge(spa)
        .layer(middleware::from_fn(security_headers))
        .layer(TraceLayer::new_for_http()))
}
