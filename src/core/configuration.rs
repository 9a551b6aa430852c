//! Cached view over the store's option table.

use crate::db::pool::TimeStore;
use crate::errors::{AppError, AppResult};
use crate::utils::time::hours_minutes_to_seconds;
use chrono::Duration;
use std::collections::BTreeMap;

pub const DATETIME_FMT: &str = "datetime_fmt";
pub const TIMESHORT_FMT: &str = "timeshort_fmt";
pub const TIMELONG_FMT: &str = "timelong_fmt";
pub const TARGET_HOURS: &str = "hours";
pub const TARGET_MINUTES: &str = "minutes";

/// In-memory copy of the `config` table.
///
/// Writes go to the store first and the whole cache is reloaded afterwards,
/// so readers never see a value the store does not hold.
pub struct Configuration<'a> {
    store: &'a TimeStore,
    cache: BTreeMap<String, String>,
}

impl<'a> Configuration<'a> {
    pub fn load(store: &'a TimeStore) -> AppResult<Self> {
        let cache = store.all_options()?;
        Ok(Self { store, cache })
    }

    pub fn refresh(&mut self) -> AppResult<()> {
        self.cache = self.store.all_options()?;
        Ok(())
    }

    pub fn get_option(&self, option: &str) -> AppResult<&str> {
        self.cache
            .get(option)
            .map(String::as_str)
            .ok_or_else(|| AppError::OptionNotFound(option.to_string()))
    }

    /// Insert or update, then reload the cache.
    pub fn set_option(&mut self, option: &str, value: &str) -> AppResult<()> {
        if self.cache.contains_key(option) {
            self.store.set_option(option, value)?;
        } else {
            self.store.add_option(option, value)?;
        }
        self.refresh()
    }

    /// Returns whether the option existed.
    pub fn remove_option(&mut self, option: &str) -> AppResult<bool> {
        let removed = self.store.remove_option(option)?;
        self.refresh()?;
        Ok(removed)
    }

    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.cache
    }

    pub fn datetime_format(&self) -> AppResult<&str> {
        self.get_option(DATETIME_FMT)
    }

    pub fn short_time_format(&self) -> AppResult<&str> {
        self.get_option(TIMESHORT_FMT)
    }

    pub fn long_time_format(&self) -> AppResult<&str> {
        self.get_option(TIMELONG_FMT)
    }

    /// Time to work in a month, from the `hours` and `minutes` options.
    pub fn monthly_target(&self) -> AppResult<Duration> {
        let hours = self.get_option(TARGET_HOURS)?;
        let secs = hours_minutes_to_seconds(hours, self.get_option(TARGET_MINUTES)?)?;
        Duration::try_seconds(secs).ok_or_else(|| AppError::InvalidOption {
            option: TARGET_HOURS.to_string(),
            value: hours.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_cached() {
        let store = TimeStore::open_in_memory().unwrap();
        let cfg = Configuration::load(&store).unwrap();
        assert_eq!(cfg.short_time_format().unwrap(), "%02d:%02d");
        assert_eq!(cfg.monthly_target().unwrap(), Duration::hours(160));
    }

    #[test]
    fn set_writes_through_and_refreshes() {
        let store = TimeStore::open_in_memory().unwrap();
        let mut cfg = Configuration::load(&store).unwrap();

        cfg.set_option("hours", "120").unwrap();
        cfg.set_option("minutes", "30").unwrap();
        cfg.set_option("new_key", "value").unwrap();

        assert_eq!(store.get_option("hours").unwrap(), "120");
        assert_eq!(store.get_option("new_key").unwrap(), "value");
        assert_eq!(cfg.get_option("new_key").unwrap(), "value");
        assert_eq!(
            cfg.monthly_target().unwrap(),
            Duration::hours(120) + Duration::minutes(30)
        );
    }

    #[test]
    fn removed_option_is_not_found() {
        let store = TimeStore::open_in_memory().unwrap();
        let mut cfg = Configuration::load(&store).unwrap();

        assert!(cfg.remove_option(DATETIME_FMT).unwrap());
        assert!(matches!(
            cfg.datetime_format(),
            Err(AppError::OptionNotFound(k)) if k == DATETIME_FMT
        ));
        assert!(!cfg.remove_option(DATETIME_FMT).unwrap());
    }

    #[test]
    fn unparsable_target() {
        let store = TimeStore::open_in_memory().unwrap();
        let mut cfg = Configuration::load(&store).unwrap();
        cfg.set_option("hours", "lots").unwrap();
        assert!(matches!(
            cfg.monthly_target(),
            Err(AppError::InvalidOption { .. })
        ));
    }

    #[test]
    fn out_of_range_target_is_an_error() {
        let store = TimeStore::open_in_memory().unwrap();
        let mut cfg = Configuration::load(&store).unwrap();
        for value in ["1e16", "inf"] {
            cfg.set_option("hours", value).unwrap();
            assert!(matches!(
                cfg.monthly_target(),
                Err(AppError::InvalidOption { option, .. }) if option == "hours"
            ));
        }
    }
}
