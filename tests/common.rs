#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::Path;
use std::sync::OnceLock;
use tempfile::TempDir;

/// Home directory shared by every spawned binary, so the developer's own
/// `~/.WorktimeLogger/wl.conf` is never read or written.
fn isolated_home() -> &'static Path {
    static HOME: OnceLock<TempDir> = OnceLock::new();
    HOME.get_or_init(|| tempfile::tempdir().expect("create temp home"))
        .path()
}

pub fn wtl() -> Command {
    let mut cmd = cargo_bin_cmd!("worktimelogger");
    cmd.env("HOME", isolated_home())
        .env("USERPROFILE", isolated_home());
    cmd
}

/// A database path inside a fresh temp dir; keep the `TempDir` alive for the
/// duration of the test.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("wl.sqlite").to_string_lossy().to_string();
    (dir, db_path)
}

/// Initialize the schema through the CLI without touching the settings file.
pub fn init_db(db_path: &str) {
    wtl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Insert a closed session directly, bypassing the clock.
pub fn insert_closed(db_path: &str, time_in: i64, time_out: i64) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO logs (time_in, time_out, active) VALUES (?1, ?2, 0)",
        [time_in, time_out],
    )
    .expect("insert closed session");
}
