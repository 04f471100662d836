//! HTTP handlers - SPA to backend bridge

mod columns;
mod directory;
mod error;
mod health;
mod payroll;
mod tickets;

use axum::http::Uri;
use helpdesk_domain::HelpdeskError;

pub use columns::*;
pub use directory::*;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use health::*;
pub use payroll::*;
pub use tickets::*;

/// JSON 404 for unmatched `/api/*` paths so they never reach the SPA fallback.
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError(HelpdeskError::NotFound(format!("route '{}'", uri.path())))
}
