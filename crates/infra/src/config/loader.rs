//! Configuration loader
//!
//! Builds the application configuration in layers.
//!
//! ## Loading Strategy
//! 1. Start from built-in defaults
//! 2. Merge a config file if one is found (`HELPDESK_CONFIG` or probed paths)
//! 3. Apply environment variable overrides
//! 4. Validate the result
//!
//! ## Environment Variables
//! - `PORT`: Listening port (platform convention)
//! - `HELPDESK_PORT`: Listening port, wins over `PORT`
//! - `HELPDESK_HOST`: Bind address
//! - `HELPDESK_STATIC_DIR`: Directory holding the SPA bundle
//! - `HELPDESK_SLA_WARNING_MINUTES`: Warning window in minutes
//! - `HELPDESK_SLA_CRITICAL_MINUTES`: Critical window in minutes
//! - `HELPDESK_LOG_LEVEL`: Default log filter
//! - `HELPDESK_LOG_JSON`: JSON log output (true/false)
//! - `HELPDESK_CONFIG`: Explicit config file path
//!
//! ## File Locations
//! Without `HELPDESK_CONFIG` the loader probes, in order:
//! 1. `./helpdesk.{toml,json}` and `./config.{toml,json}` (current working
//!    directory)
//! 2. The same names one and two directories up
//! 3. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use helpdesk_domain::{Config, HelpdeskError, Result};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["helpdesk.toml", "helpdesk.json", "config.toml", "config.json"];

/// Load configuration: defaults, then file, then environment.
///
/// A missing config file is not an error; the defaults are used instead.
///
/// # Errors
/// Returns `HelpdeskError::Config` if:
/// - `HELPDESK_CONFIG` points to a missing file
/// - A config file exists but cannot be read or parsed
/// - An environment override has an invalid value
/// - The merged SLA thresholds are inconsistent
pub fn load() -> Result<Config> {
    let explicit = std::env::var("HELPDESK_CONFIG").ok().filter(|p| !p.trim().is_empty());
    let base = match explicit {
        Some(path) => load_from_file(Some(PathBuf::from(path)))?,
        None => match probe_config_paths() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    let config = apply_env_overrides(base)?;
    validate(&config)?;
    tracing::info!(
        bind = %config.server.bind_address(),
        static_dir = %config.server.static_dir,
        "Configuration loaded"
    );
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and fields absent from the file keep their defaults.
///
/// # Errors
/// Returns `HelpdeskError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(HelpdeskError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            HelpdeskError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| HelpdeskError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Apply overrides from the process environment.
///
/// # Errors
/// Returns `HelpdeskError::Config` for unparsable values.
pub fn apply_env_overrides(config: Config) -> Result<Config> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source.
///
/// # Errors
/// Returns `HelpdeskError::Config` for unparsable values.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(host) = var("HELPDESK_HOST") {
        config.server.host = host;
    }
    for key in ["PORT", "HELPDESK_PORT"] {
        if let Some(raw) = var(key) {
            config.server.port = parse_value(key, &raw)?;
        }
    }
    if let Some(dir) = var("HELPDESK_STATIC_DIR") {
        config.server.static_dir = dir;
    }
    if let Some(raw) = var("HELPDESK_SLA_WARNING_MINUTES") {
        config.sla.warning_minutes = parse_value("HELPDESK_SLA_WARNING_MINUTES", &raw)?;
    }
    if let Some(raw) = var("HELPDESK_SLA_CRITICAL_MINUTES") {
        config.sla.critical_minutes = parse_value("HELPDESK_SLA_CRITICAL_MINUTES", &raw)?;
    }
    if let Some(level) = var("HELPDESK_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(raw) = var("HELPDESK_LOG_JSON") {
        config.logging.json = parse_bool(&raw);
    }
    Ok(config)
}

/// Check cross-field constraints the serde layer cannot express.
///
/// # Errors
/// Returns `HelpdeskError::Config` describing the first violation.
pub fn validate(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        return Err(HelpdeskError::Config("server.port must not be 0".into()));
    }
    if config.server.static_dir.trim().is_empty() {
        return Err(HelpdeskError::Config("server.static_dir must not be empty".into()));
    }
    config
        .sla
        .policy()
        .map(|_| ())
        .map_err(|e| HelpdeskError::Config(format!("Invalid SLA thresholds: {e}")))
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `HelpdeskError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(HelpdeskError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.is_file())
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| HelpdeskError::Config(format!("Invalid value for {key}: {e}")))
}

/// Parse a boolean flag
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Anything else reads as `false`.
fn parse_bool(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
