//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT, DEFAULT_SLA_CRITICAL_MINUTES,
    DEFAULT_SLA_WARNING_MINUTES, DEFAULT_STATIC_DIR, ONE_YEAR_SECS,
};
use crate::errors::Result;
use crate::sla::SlaPolicy;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub sla: SlaConfig,
    pub logging: LoggingConfig,
}

/// Static server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built SPA bundle
    pub static_dir: String,
    /// `max-age` applied to static assets
    pub asset_max_age_secs: u64,
}

/// SLA threshold configuration, in minutes of remaining time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaConfig {
    pub warning_minutes: i64,
    pub critical_minutes: i64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl ServerConfig {
    /// Socket address string in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SlaConfig {
    /// Build the validated SLA policy described by this configuration.
    ///
    /// # Errors
    /// Returns `HelpdeskError::Validation` when the windows are negative or
    /// the critical window exceeds the warning window.
    pub fn policy(&self) -> Result<SlaPolicy> {
        SlaPolicy::from_minutes(self.warning_minutes, self.critical_minutes)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            asset_max_age_secs: ONE_YEAR_SECS,
        }
    }
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            warning_minutes: DEFAULT_SLA_WARNING_MINUTES,
            critical_minutes: DEFAULT_SLA_CRITICAL_MINUTES,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
