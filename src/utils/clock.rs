use chrono::{DateTime, TimeZone, Utc};
use std::cell::Cell;

/// Source of "now" for the session tracker and the aggregator, so tests can
/// pin time instead of sleeping.
pub trait Clock {
    fn time(&self) -> DateTime<Utc>;

    /// Current time as Unix seconds, the resolution the store keeps.
    fn timestamp(&self) -> i64 {
        self.time().timestamp()
    }
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[doc(hidden)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn at(ts: i64) -> Self {
        Self { now: Cell::new(ts) }
    }

    pub fn set(&self, ts: i64) {
        self.now.set(ts);
    }

    pub fn advance(&self, secs: i64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn time(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.now.get(), 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn timestamp(&self) -> i64 {
        self.now.get()
    }
}
