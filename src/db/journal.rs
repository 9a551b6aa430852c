use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::models::journal_entry::JournalEntry;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `journal` table.
pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO journal (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like [`record`] but never fails the calling command.
pub fn record_or_warn(store: &TimeStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.with_conn(|conn| record(conn, operation, target, message)) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

pub fn load(conn: &Connection) -> AppResult<Vec<JournalEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM journal ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(JournalEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_read_back_in_order() {
        let store = TimeStore::open_in_memory().unwrap();
        record(&store.conn, "login", "1", "Logged in").unwrap();
        record(&store.conn, "logout", "1", "Logged out").unwrap();

        let rows = load(&store.conn).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].operation, "login");
        assert_eq!(rows[1].operation, "logout");
        assert_eq!(rows[1].target, "1");
        assert!(chrono::DateTime::parse_from_rfc3339(&rows[0].date).is_ok());
    }
}
