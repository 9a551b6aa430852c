use crate::config::Config;
use crate::core::calculator::target::format_duration;
use crate::core::configuration::Configuration;
use crate::core::notify;
use crate::core::session::SessionTracker;
use crate::db::journal;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::clock::DefaultClock;
use chrono::Duration;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = TimeStore::open(&cfg.database)?;
    let options = Configuration::load(&store)?;
    let notifier = notify::from_name(&cfg.notifications);
    let clock = DefaultClock;

    let mut tracker = SessionTracker::new(&store, &options, &clock, notifier.as_ref())?;
    let entry = tracker.log_out()?;

    let worked = Duration::seconds(entry.duration_secs().unwrap_or_default());
    let worked_txt = format_duration(options.long_time_format()?, worked)?;

    success(format!("Session #{} closed after {}", entry.id, worked_txt));
    journal::record_or_warn(
        &store,
        "logout",
        &entry.id.to_string(),
        &format!("Logged out after {worked_txt}"),
    );

    Ok(())
}
