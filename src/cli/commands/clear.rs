use crate::cli::commands::ask_confirmation;
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::core::configuration::Configuration;
use crate::core::notify;
use crate::core::session::SessionTracker;
use crate::db::journal;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::clock::DefaultClock;

pub fn handle(cfg: &Config) -> AppResult<()> {
    if !ask_confirmation("Delete ALL logged sessions? This action is irreversible.") {
        info("Operation cancelled.");
        return Ok(());
    }

    let store = TimeStore::open(&cfg.database)?;
    let options = Configuration::load(&store)?;
    let notifier = notify::from_name(&cfg.notifications);
    let clock = DefaultClock;

    let mut tracker = SessionTracker::new(&store, &options, &clock, notifier.as_ref())?;
    let outcome = ClearLogic::apply(&store, &mut tracker)?;

    if outcome.logged_out {
        info("The running session was closed first.");
    }
    success(format!("{} log entries deleted.", outcome.removed));
    journal::record_or_warn(
        &store,
        "clear",
        "logs",
        &format!("{} log entries deleted", outcome.removed),
    );

    Ok(())
}
