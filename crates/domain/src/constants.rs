//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const SPA_ENTRY_DOCUMENT: &str = "index.html";
pub const ONE_YEAR_SECS: u64 = 31_536_000;

// SLA thresholds (remaining time until the deadline)
pub const DEFAULT_SLA_WARNING_MINUTES: i64 = 4 * 60;
pub const DEFAULT_SLA_CRITICAL_MINUTES: i64 = 0;

// Column configuration
pub const MIN_COLUMN_WIDTH: u16 = 40;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
