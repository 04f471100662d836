//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing handlers with
//! timing and logging.

use std::time::Instant;

use helpdesk_domain::Result as DomainResult;

use crate::commands::ApiError;
use crate::utils::logging::log_command_execution;

/// Execute a command with automatic timing and logging
///
/// This helper:
/// - Times command execution
/// - Logs the outcome via tracing, labelled with the error kind on failure
/// - Converts domain errors into [`ApiError`]
///
/// # Example
///
/// ```rust,ignore
/// pub async fn list_clients(State(ctx): State<Arc<AppContext>>) -> ApiResult<Vec<Client>> {
///     execute_command("directory::list_clients", || ctx.directory.clients()).map(Json)
/// }
/// ```
pub fn execute_command<T, F>(command: &str, operation: F) -> Result<T, ApiError>
where
    F: FnOnce() -> DomainResult<T>,
{
    let start = Instant::now();
    let result = operation();
    log_command_execution(command, start.elapsed(), result.as_ref().err().map(|e| e.label()));
    result.map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use helpdesk_domain::HelpdeskError;

    use super::*;

    #[test]
    fn test_success_passes_value_through() {
        let value = execute_command("test::ok", || Ok(7)).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_failure_becomes_api_error() {
        let err = execute_command::<(), _>("test::missing", || {
            Err(HelpdeskError::not_found("ticket", "TCK-0"))
        })
        .unwrap_err();
        assert_eq!(err.0, HelpdeskError::not_found("ticket", "TCK-0"));
    }
}
