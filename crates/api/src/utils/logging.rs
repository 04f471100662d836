use std::time::Duration;

use helpdesk_domain::LoggingConfig;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Calling this twice is
/// harmless; the second install attempt is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(tracing_subscriber::fmt::layer().json().with_current_span(false)).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init()
    };

    if installed.is_ok() {
        info!(level = %config.level, json = config.json, "tracing_initialized");
    }
}

/// Run `f` under a temporary stderr subscriber.
///
/// For work that logs before the configured subscriber exists, such as
/// loading the configuration itself. Honours `RUST_LOG`, else `info`.
pub fn with_bootstrap_tracing<T>(f: impl FnOnce() -> T) -> T {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr));
    tracing::subscriber::with_default(subscriber, f)
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"payroll::add_item"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - Stable error label when the command failed.
///
/// Callers must avoid forwarding request payloads in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&'static str>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "command_execution_failure"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_subscriber_is_active_inside_closure() {
        let (enabled, value) =
            with_bootstrap_tracing(|| (tracing::enabled!(tracing::Level::ERROR), 42));
        assert!(enabled);
        assert_eq!(value, 42);
    }
}
