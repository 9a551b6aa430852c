use crate::core::session::SessionTracker;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;

/// Outcome of a log reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    pub logged_out: bool,
    pub removed: usize,
}

pub struct ClearLogic;

impl ClearLogic {
    /// Close the running session (if any) and delete every log entry.
    ///
    /// Irreversible; callers confirm with the user first.
    pub fn apply(store: &TimeStore, tracker: &mut SessionTracker) -> AppResult<ClearOutcome> {
        let logged_out = if tracker.is_logged_in() {
            tracker.log_out()?;
            true
        } else {
            false
        };

        let removed = store.clear_all()?;
        tracker.invalidate();
        Ok(ClearOutcome {
            logged_out,
            removed,
        })
    }
}
