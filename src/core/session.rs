//! Login/logout state machine over the store's active entry.

use crate::core::configuration::Configuration;
use crate::core::notify::{APP_TITLE, Notifier};
use crate::db::pool::TimeStore;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::utils::clock::Clock;
use crate::utils::time::format_timestamp;
use chrono::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn { since: i64 },
}

/// The current work session.
///
/// Built from the store's active entry: a `time_in` already recorded there
/// means a session is running. All collaborators are borrowed, nothing is
/// global.
pub struct SessionTracker<'a> {
    store: &'a TimeStore,
    config: &'a Configuration<'a>,
    clock: &'a dyn Clock,
    notifier: &'a dyn Notifier,
    entry: LogEntry,
    state: SessionState,
    // The in-memory entry was closed by a logout; the next login needs a new one.
    need_new_log: bool,
}

impl<'a> SessionTracker<'a> {
    pub fn new(
        store: &'a TimeStore,
        config: &'a Configuration<'a>,
        clock: &'a dyn Clock,
        notifier: &'a dyn Notifier,
    ) -> AppResult<Self> {
        let entry = store.get_active_log()?;
        let state = match entry.time_in {
            Some(since) => SessionState::LoggedIn { since },
            None => SessionState::LoggedOut,
        };

        Ok(Self {
            store,
            config,
            clock,
            notifier,
            entry,
            state,
            need_new_log: false,
        })
    }

    /// Stamp `time_in` on the active entry.
    ///
    /// Calling it while already logged in re-stamps the start of the running
    /// session.
    pub fn log_in(&mut self) -> AppResult<LogEntry> {
        let now = self.clock.timestamp();
        let body = format!(
            "Logged in at {}",
            format_timestamp(now, self.config.datetime_format()?)?
        );

        if self.need_new_log {
            self.entry = self.store.get_active_log()?;
            self.need_new_log = false;
        }

        self.store.set_time_in(self.entry.id, now)?;
        self.entry = self.store.get_log(self.entry.id)?;
        self.state = SessionState::LoggedIn { since: now };

        self.notifier.notify(APP_TITLE, &body);
        Ok(self.entry.clone())
    }

    /// Stamp `time_out` and close the active entry.
    pub fn log_out(&mut self) -> AppResult<LogEntry> {
        if !self.is_logged_in() {
            return Err(AppError::NotLoggedIn);
        }

        let now = self.clock.timestamp();
        let body = format!(
            "Logged out at {}",
            format_timestamp(now, self.config.datetime_format()?)?
        );

        let id = self.entry.id;
        {
            // time_out and active = 0 land together.
            let tx = self.store.conn.unchecked_transaction()?;
            self.store.set_time_out(id, now)?;
            self.store.deactivate(id)?;
            tx.commit()?;
        }

        self.entry = self.store.get_log(id)?;
        self.state = SessionState::LoggedOut;
        self.need_new_log = true;

        self.notifier.notify(APP_TITLE, &body);
        Ok(self.entry.clone())
    }

    /// Forget the in-memory entry; the next login asks the store for the
    /// active one again. Needed after the rows were deleted underneath us.
    pub fn invalidate(&mut self) {
        self.need_new_log = true;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    pub fn started_at(&self) -> Option<i64> {
        match self.state {
            SessionState::LoggedIn { since } => Some(since),
            SessionState::LoggedOut => None,
        }
    }

    pub fn elapsed_since_login(&self) -> Option<Duration> {
        self.started_at()
            .map(|since| Duration::seconds(self.clock.timestamp() - since))
    }

    pub fn entry(&self) -> &LogEntry {
        &self.entry
    }
}
