//! SLA status derivation
//!
//! A ticket's SLA status is never stored. It is recomputed from the
//! deadline, the current time and the ticket status every time it is read.
//!
//! Thresholds are expressed as windows of remaining time before the
//! deadline. With the default policy:
//!
//! | remaining            | status     |
//! |----------------------|------------|
//! | `> 4h`               | `good`     |
//! | `0 < remaining ≤ 4h` | `warning`  |
//! | `≤ 0`                | `critical` |

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{DEFAULT_SLA_CRITICAL_MINUTES, DEFAULT_SLA_WARNING_MINUTES};
use crate::errors::{HelpdeskError, Result};
use crate::types::ticket::Ticket;

/// How close a ticket is to breaching its response deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum SlaStatus {
    Good,
    Warning,
    Critical,
}

impl_domain_status_conversions!(SlaStatus {
    Good => "good",
    Warning => "warning",
    Critical => "critical",
});

/// Fixed SLA thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlaPolicy {
    warning_window: Duration,
    critical_window: Duration,
}

impl SlaPolicy {
    /// Create a policy from explicit windows.
    ///
    /// # Errors
    /// Returns `HelpdeskError::Validation` if either window is negative or
    /// the critical window is wider than the warning window.
    pub fn new(warning_window: Duration, critical_window: Duration) -> Result<Self> {
        if warning_window < Duration::zero() || critical_window < Duration::zero() {
            return Err(HelpdeskError::Validation("SLA windows must not be negative".into()));
        }
        if critical_window > warning_window {
            return Err(HelpdeskError::Validation(format!(
                "SLA critical window ({}m) exceeds warning window ({}m)",
                critical_window.num_minutes(),
                warning_window.num_minutes()
            )));
        }
        Ok(Self { warning_window, critical_window })
    }

    /// Create a policy from minute counts.
    ///
    /// # Errors
    /// Same as [`SlaPolicy::new`], plus `HelpdeskError::Validation` when a
    /// minute count does not fit in a `Duration`.
    pub fn from_minutes(warning_minutes: i64, critical_minutes: i64) -> Result<Self> {
        Self::new(
            minutes_window("warning", warning_minutes)?,
            minutes_window("critical", critical_minutes)?,
        )
    }

    pub fn warning_window(&self) -> Duration {
        self.warning_window
    }

    pub fn critical_window(&self) -> Duration {
        self.critical_window
    }

    /// Classify a deadline relative to `now`. Total over all timestamp pairs.
    pub fn classify(&self, deadline: DateTime<Utc>, now: DateTime<Utc>) -> SlaStatus {
        let remaining = remaining_time(deadline, now);
        if remaining <= self.critical_window {
            SlaStatus::Critical
        } else if remaining <= self.warning_window {
            SlaStatus::Warning
        } else {
            SlaStatus::Good
        }
    }

    /// SLA status of a ticket. Resolved and closed tickets are no longer
    /// measured against their deadline and always report `good`.
    pub fn status_of(&self, ticket: &Ticket, now: DateTime<Utc>) -> SlaStatus {
        if ticket.status.is_open() {
            self.classify(ticket.sla_deadline, now)
        } else {
            SlaStatus::Good
        }
    }
}

impl Default for SlaPolicy {
    fn default() -> Self {
        Self {
            warning_window: Duration::minutes(DEFAULT_SLA_WARNING_MINUTES),
            critical_window: Duration::minutes(DEFAULT_SLA_CRITICAL_MINUTES),
        }
    }
}

fn minutes_window(name: &str, minutes: i64) -> Result<Duration> {
    Duration::try_minutes(minutes).ok_or_else(|| {
        HelpdeskError::Validation(format!("SLA {name} window out of range: {minutes} minutes"))
    })
}

/// Time left until `deadline`; negative once the deadline has passed.
pub fn remaining_time(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    deadline - now
}

/// Classify with the default thresholds.
pub fn classify(deadline: DateTime<Utc>, now: DateTime<Utc>) -> SlaStatus {
    SlaPolicy::default().classify(deadline, now)
}

/// Per-status counters for open tickets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SlaOverview {
    pub good: usize,
    pub warning: usize,
    pub critical: usize,
}

impl SlaOverview {
    pub fn record(&mut self, status: SlaStatus) {
        match status {
            SlaStatus::Good => self.good += 1,
            SlaStatus::Warning => self.warning += 1,
            SlaStatus::Critical => self.critical += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.good + self.warning + self.critical
    }
}
