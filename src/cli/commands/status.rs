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

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = TimeStore::open(&cfg.database)?;
    let options = Configuration::load(&store)?;
    let notifier = notify::from_name(&cfg.notifications);
    let clock = DefaultClock;

    let tracker = SessionTracker::new(&store, &options, &clock, notifier.as_ref())?;
    let agg = Aggregator::new(&store, &tracker, &clock);

    let report = ReportLogic::status(&store, &options, &tracker, &agg, &Local, date::today())?;
    ReportLogic::print_status(&report, &options)
}
