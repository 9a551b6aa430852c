//! Queries over the `config` option table.

use crate::db::pool::TimeStore;
use crate::errors::{AppError, AppResult};
use crate::models::config_option::ConfigOption;
use rusqlite::{OptionalExtension, params};
use std::collections::BTreeMap;

impl TimeStore {
    pub fn options(&self) -> AppResult<Vec<ConfigOption>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT option, value FROM config ORDER BY option ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(ConfigOption {
                option: row.get(0)?,
                value: row.get(1)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Whole option table as a map, the shape `Configuration` caches.
    pub fn all_options(&self) -> AppResult<BTreeMap<String, String>> {
        Ok(self
            .options()?
            .into_iter()
            .map(|o| (o.option, o.value))
            .collect())
    }

    pub fn get_option(&self, option: &str) -> AppResult<String> {
        self.conn
            .query_row(
                "SELECT value FROM config WHERE option = ?1",
                [option],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| AppError::OptionNotFound(option.to_string()))
    }

    /// Update an existing option.
    pub fn set_option(&self, option: &str, value: &str) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE config SET value = ?1 WHERE option = ?2",
            params![value, option],
        )?;
        if changed == 0 {
            return Err(AppError::OptionNotFound(option.to_string()));
        }
        Ok(())
    }

    /// Insert a new option; fails on a duplicate key.
    pub fn add_option(&self, option: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO config (option, value) VALUES (?1, ?2)",
            params![option, value],
        )?;
        Ok(())
    }

    /// Returns whether a row was removed.
    pub fn remove_option(&self, option: &str) -> AppResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM config WHERE option = ?1", [option])?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_round_trip() {
        let store = TimeStore::open_in_memory().unwrap();
        store.add_option("greeting", "hello").unwrap();
        assert_eq!(store.get_option("greeting").unwrap(), "hello");

        store.set_option("greeting", "ciao").unwrap();
        assert_eq!(store.get_option("greeting").unwrap(), "ciao");
    }

    #[test]
    fn values_with_quotes_are_stored_verbatim() {
        let store = TimeStore::open_in_memory().unwrap();
        let tricky = r#"it's "quoted"; DROP TABLE logs; --"#;
        store.add_option("tricky", tricky).unwrap();
        assert_eq!(store.get_option("tricky").unwrap(), tricky);
        assert!(store.all_closed_entries().is_ok());
    }

    #[test]
    fn missing_option_errors() {
        let store = TimeStore::open_in_memory().unwrap();
        assert!(matches!(
            store.get_option("nope"),
            Err(AppError::OptionNotFound(k)) if k == "nope"
        ));
        assert!(matches!(
            store.set_option("nope", "1"),
            Err(AppError::OptionNotFound(_))
        ));
    }

    #[test]
    fn duplicate_add_is_rejected_and_remove_reports() {
        let store = TimeStore::open_in_memory().unwrap();
        assert!(store.add_option("hours", "10").is_err());

        assert!(store.remove_option("hours").unwrap());
        assert!(!store.remove_option("hours").unwrap());
        assert!(!store.all_options().unwrap().contains_key("hours"));
    }
}
