use crate::config::Config;
use crate::core::configuration::Configuration;
use crate::core::notify;
use crate::core::session::SessionTracker;
use crate::db::journal;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::clock::DefaultClock;
use crate::utils::time::format_timestamp;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = TimeStore::open(&cfg.database)?;
    let options = Configuration::load(&store)?;
    let notifier = notify::from_name(&cfg.notifications);
    let clock = DefaultClock;

    let mut tracker = SessionTracker::new(&store, &options, &clock, notifier.as_ref())?;

    if tracker.is_logged_in() {
        warning("Already logged in; the session start will be moved to now.");
    }

    let entry = tracker.log_in()?;
    let at = entry.time_in.unwrap_or_default();
    let when = format_timestamp(at, options.datetime_format()?)?;

    success(format!("Session #{} started at {}", entry.id, when));
    journal::record_or_warn(&store, "login", &entry.id.to_string(), &format!("Logged in at {when}"));

    Ok(())
}
