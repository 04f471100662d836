//! Time abstraction for testability
//!
//! Services never read the wall clock directly. Production wiring injects a
//! system clock from the infrastructure layer; tests use [`MockClock`].
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use helpdesk_core::{Clock, MockClock};
//!
//! let clock = MockClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! let start = clock.now();
//! clock.advance(Duration::minutes(5));
//! assert_eq!(clock.now() - start, Duration::minutes(5));
//! ```

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Manually driven clock for deterministic tests
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: Arc::new(Mutex::new(start)) }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.current.lock() = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += by;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}
