use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::journal::JournalLogic;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Journal { print: true }) {
        let store = TimeStore::open(&cfg.database)?;
        JournalLogic::print(&store)?;
    }

    Ok(())
}
