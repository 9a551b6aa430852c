use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::format_timestamp;
use rusqlite::OptionalExtension;
use std::fs;

/// Counters shown by `db --info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbStats {
    pub total_entries: i64,
    pub closed_entries: i64,
    pub active_id: Option<i64>,
    pub first_time_in: Option<i64>,
    pub last_time_in: Option<i64>,
}

pub fn collect(store: &TimeStore) -> AppResult<DbStats> {
    let conn = &store.conn;

    let total_entries: i64 = conn.query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;
    let closed_entries: i64 =
        conn.query_row("SELECT COUNT(*) FROM logs WHERE active = 0", [], |row| {
            row.get(0)
        })?;

    // Read-only peek: `get_active_log` would create a row.
    let active_id: Option<i64> = conn
        .query_row(
            "SELECT id FROM logs WHERE active = 1 ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let first_time_in: Option<i64> = conn
        .query_row(
            "SELECT time_in FROM logs WHERE time_in IS NOT NULL ORDER BY time_in ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbStats {
        total_entries,
        closed_entries,
        active_id,
        first_time_in,
        last_time_in: store.last_time_in()?,
    })
}

pub fn print_db_info(store: &TimeStore, db_path: &str, datetime_fmt: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) ENTRIES
    //
    let stats = collect(store)?;
    println!(
        "{}• Log entries:{} {}{}{} ({} closed)",
        CYAN, RESET, GREEN, stats.total_entries, RESET, stats.closed_entries
    );

    let active = stats
        .active_id
        .map(|id| format!("#{id}"))
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Active entry:{} {}", CYAN, RESET, active);

    //
    // 3) RANGE
    //
    let fmt_ts = |ts: Option<i64>| -> AppResult<String> {
        match ts {
            Some(t) => format_timestamp(t, datetime_fmt),
            None => Ok(format!("{GREY}--{RESET}")),
        }
    };

    println!("{}• Logged in range:{}", CYAN, RESET);
    println!("    from: {}", fmt_ts(stats.first_time_in)?);
    println!("    to:   {}", fmt_ts(stats.last_time_in)?);

    println!();
    Ok(())
}
