//! Wall-clock adapter for the core `Clock` port

use chrono::{DateTime, Utc};
use helpdesk_core::Clock;

/// Real system clock. Use this in production wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
