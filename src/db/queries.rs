//! Queries over the `logs` table.

use crate::db::pool::TimeStore;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use rusqlite::{OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<LogEntry> {
    Ok(LogEntry {
        id: row.get("id")?,
        time_in: row.get("time_in")?,
        time_out: row.get("time_out")?,
        active: row.get::<_, i64>("active")? == 1,
    })
}

impl TimeStore {
    fn query_logs(&self, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<LogEntry>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(args, map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn get_log(&self, id: i64) -> AppResult<LogEntry> {
        self.conn
            .query_row(
                "SELECT id, time_in, time_out, active FROM logs WHERE id = ?1",
                [id],
                map_row,
            )
            .optional()?
            .ok_or(AppError::LogNotFound(id))
    }

    /// Return the single active entry, creating an empty one if none exists.
    ///
    /// Lookup and creation share one transaction. Several active rows are
    /// reported as [`AppError::CorruptState`] and left untouched.
    pub fn get_active_log(&self) -> AppResult<LogEntry> {
        let tx = self.conn.unchecked_transaction()?;

        let mut active = {
            let mut stmt = tx.prepare(
                "SELECT id, time_in, time_out, active FROM logs
                 WHERE active = 1
                 ORDER BY id DESC",
            )?;
            let rows = stmt.query_map([], map_row)?;
            let mut v = Vec::new();
            for r in rows {
                v.push(r?);
            }
            v
        };

        if active.len() > 1 {
            return Err(AppError::CorruptState(active.len()));
        }

        let entry = match active.pop() {
            Some(e) => e,
            None => {
                tx.execute("INSERT INTO logs (active) VALUES (1)", [])?;
                let id = tx.last_insert_rowid();
                tx.query_row(
                    "SELECT id, time_in, time_out, active FROM logs WHERE id = ?1",
                    [id],
                    map_row,
                )?
            }
        };

        tx.commit()?;
        Ok(entry)
    }

    pub fn set_time_in(&self, id: i64, ts: i64) -> AppResult<()> {
        self.update_log("UPDATE logs SET time_in = ?1 WHERE id = ?2", id, ts)
    }

    pub fn set_time_out(&self, id: i64, ts: i64) -> AppResult<()> {
        self.update_log("UPDATE logs SET time_out = ?1 WHERE id = ?2", id, ts)
    }

    pub fn deactivate(&self, id: i64) -> AppResult<()> {
        self.update_log("UPDATE logs SET active = ?1 WHERE id = ?2", id, 0)
    }

    fn update_log(&self, sql: &str, id: i64, value: i64) -> AppResult<()> {
        let changed = self.conn.execute(sql, params![value, id])?;
        if changed == 0 {
            return Err(AppError::LogNotFound(id));
        }
        Ok(())
    }

    /// Closed entries lying entirely inside `[start, end]`.
    ///
    /// Containment, not overlap: a session crossing either bound is left out.
    pub fn entries_overlapping(&self, start: i64, end: i64) -> AppResult<Vec<LogEntry>> {
        self.query_logs(
            "SELECT id, time_in, time_out, active FROM logs
             WHERE time_in >= ?1 AND time_out <= ?2 AND active = 0
             ORDER BY time_in ASC",
            params![start, end],
        )
    }

    pub fn all_closed_entries(&self) -> AppResult<Vec<LogEntry>> {
        self.query_logs(
            "SELECT id, time_in, time_out, active FROM logs
             WHERE active = 0
             ORDER BY id ASC",
            [],
        )
    }

    /// Delete every log entry. Returns the number of rows removed.
    pub fn clear_all(&self) -> AppResult<usize> {
        Ok(self.conn.execute("DELETE FROM logs", [])?)
    }

    pub fn last_time_in(&self) -> AppResult<Option<i64>> {
        Ok(self
            .conn
            .query_row(
                "SELECT time_in FROM logs WHERE time_in IS NOT NULL
                 ORDER BY time_in DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?)
    }

    pub fn last_time_out(&self) -> AppResult<Option<i64>> {
        Ok(self
            .conn
            .query_row(
                "SELECT time_out FROM logs WHERE time_out IS NOT NULL
                 ORDER BY time_out DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?)
    }
}
