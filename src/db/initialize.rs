//! Bundled database template.
//!
//! A new store file gets the two domain tables plus the default display
//! options. Table definitions live only here.

use crate::errors::AppResult;
use rusqlite::{Connection, params};

pub const LOGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS logs (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    time_in   INTEGER,
    time_out  INTEGER,
    active    INTEGER NOT NULL DEFAULT 0
);
"#;

pub const CONFIG_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS config (
    option  TEXT PRIMARY KEY NOT NULL,
    value   TEXT NOT NULL
);
"#;

pub const JOURNAL_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS journal (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    date      TEXT NOT NULL,
    operation TEXT NOT NULL,
    target    TEXT DEFAULT '',
    message   TEXT NOT NULL
);
"#;

/// Options every display routine expects to find.
pub const DEFAULT_OPTIONS: &[(&str, &str)] = &[
    ("datetime_fmt", "%Y-%m-%d %H:%M:%S"),
    ("timeshort_fmt", "%02d:%02d"),
    ("timelong_fmt", "%dh %02dmin"),
    ("hours", "160"),
    ("minutes", "0"),
];

/// Create the schema and seed the default options in one transaction.
pub fn apply_template(conn: &Connection) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(LOGS_TABLE)?;
    tx.execute_batch(CONFIG_TABLE)?;

    {
        let mut stmt =
            tx.prepare("INSERT OR IGNORE INTO config (option, value) VALUES (?1, ?2)")?;
        for (option, value) in DEFAULT_OPTIONS {
            stmt.execute(params![option, value])?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// The journal is not part of the template; older files gain it on open.
pub fn ensure_journal_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(JOURNAL_TABLE)?;
    Ok(())
}
