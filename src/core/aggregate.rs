//! Worked-time totals over windows.

use crate::core::calculator::Window;
use crate::core::session::SessionTracker;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use crate::utils::clock::Clock;
use chrono::Duration;

/// Read-only totals over the store plus the tracker's running session.
///
/// `now` is sampled once per call so the closed sum and the open-session part
/// agree.
pub struct Aggregator<'a> {
    store: &'a TimeStore,
    session: &'a SessionTracker<'a>,
    clock: &'a dyn Clock,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a TimeStore, session: &'a SessionTracker<'a>, clock: &'a dyn Clock) -> Self {
        Self {
            store,
            session,
            clock,
        }
    }

    /// Closed sessions contained in `window`, plus the running session when it
    /// started inside the window.
    ///
    /// A running session that began before `window.start` adds nothing, and a
    /// closed one crossing either bound is skipped.
    pub fn total_between(&self, window: Window) -> AppResult<Duration> {
        let now = self.clock.timestamp();
        let mut total = sum_closed(&self.store.entries_overlapping(window.start, window.end)?);

        if let Some(since) = self.session.started_at()
            && window.contains(since)
        {
            total += now - since;
        }

        Ok(Duration::seconds(total))
    }

    /// Every closed session plus the running one, whatever its start.
    pub fn total_all(&self) -> AppResult<Duration> {
        let now = self.clock.timestamp();
        let mut total = sum_closed(&self.store.all_closed_entries()?);

        if let Some(since) = self.session.started_at() {
            total += now - since;
        }

        Ok(Duration::seconds(total))
    }
}

fn sum_closed(entries: &[LogEntry]) -> i64 {
    entries.iter().filter_map(LogEntry::duration_secs).sum()
}
