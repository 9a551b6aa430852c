//! SQLite connection wrapper backing the time store (lightweight, single writer).

use crate::db::initialize::{apply_template, ensure_journal_table};
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Handle on the embedded store: the `logs`, `config` and `journal` tables.
///
/// Every operation borrows the store immutably; `rusqlite::Connection` commits
/// each statement on its own unless a transaction is opened explicitly.
pub struct TimeStore {
    pub conn: Connection,
}

impl TimeStore {
    /// Open the database at `path`.
    ///
    /// A missing file is created (parent directories included) and filled from
    /// the bundled template. An existing file is used as is.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        let fresh = !p.exists();

        if fresh
            && let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(p)?;
        if fresh {
            apply_template(&conn)?;
        }
        ensure_journal_table(&conn)?;

        Ok(Self { conn })
    }

    /// Template-initialized database living only as long as the handle.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        apply_template(&conn)?;
        ensure_journal_table(&conn)?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with the underlying connection.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        func(&self.conn)
    }
}
