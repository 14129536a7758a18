use chrono::{DateTime, Utc};

use crate::core::traits::sources::Clock;

/// Wall clock, truncated to milliseconds so stored timestamps look like
/// `2026-01-10T09:30:12.345Z`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
    }
}
