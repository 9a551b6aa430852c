use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::Aggregator;
use crate::core::configuration::Configuration;
use crate::core::notify;
use crate::core::report::ReportLogic;
use crate::core::session::SessionTracker;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::utils::clock::DefaultClock;
use crate::utils::date;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { date: date_arg } = cmd {
        let day = match date_arg {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        let store = TimeStore::open(&cfg.database)?;
        let options = Configuration::load(&store)?;
        let notifier = notify::from_name(&cfg.notifications);
        let clock = DefaultClock;

        let tracker = SessionTracker::new(&store, &options, &clock, notifier.as_ref())?;
        let agg = Aggregator::new(&store, &tracker, &clock);

        let report = ReportLogic::for_date(&options, &agg, &Local, day)?;
        ReportLogic::print_date_report(&report, &options)?;
    }

    Ok(())
}
