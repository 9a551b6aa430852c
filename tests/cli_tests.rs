use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, insert_closed, setup_test_db, wtl};

#[test]
fn test_init_seeds_default_options() {
    let (_dir, db_path) = setup_test_db();

    wtl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    wtl()
        .args(["--db", &db_path, "config", "--get", "hours"])
        .assert()
        .success()
        .stdout(contains("160"));

    wtl()
        .args(["--db", &db_path, "config", "--list"])
        .assert()
        .success()
        .stdout(contains("timeshort_fmt"))
        .stdout(contains("datetime_fmt"));
}

#[test]
fn test_login_status_logout_cycle() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Not logged in"));

    wtl()
        .args(["--db", &db_path, "--test", "login"])
        .assert()
        .success()
        .stdout(contains("Session #1 started"));

    wtl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Logged in since"))
        .stdout(contains("This week"))
        .stdout(contains("This month"));

    wtl()
        .args(["--db", &db_path, "--test", "logout"])
        .assert()
        .success()
        .stdout(contains("Session #1 closed after"));

    wtl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Not logged in"));

    // the next session gets its own row
    wtl()
        .args(["--db", &db_path, "--test", "login"])
        .assert()
        .success()
        .stdout(contains("Session #2 started"));
}

#[test]
fn test_logout_without_login_fails() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl()
        .args(["--db", &db_path, "--test", "logout"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_missing_database_is_created_on_first_use() {
    let (dir, _) = setup_test_db();
    let db_path = dir
        .path()
        .join("nested")
        .join("fresh.sqlite")
        .to_string_lossy()
        .to_string();

    wtl()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Not logged in"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_config_set_get_remove() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl()
        .args(["--db", &db_path, "config", "--set", "hours", "120"])
        .assert()
        .success();

    wtl()
        .args(["--db", &db_path, "config", "--get", "hours"])
        .assert()
        .success()
        .stdout(contains("120"));

    wtl()
        .args(["--db", &db_path, "config", "--set", "theme", "dark"])
        .assert()
        .success();

    wtl()
        .args(["--db", &db_path, "config", "--remove", "theme"])
        .assert()
        .success()
        .stdout(contains("removed"));

    wtl()
        .args(["--db", &db_path, "config", "--get", "theme"])
        .assert()
        .failure()
        .stderr(contains("No option 'theme'"));
}

#[test]
fn test_missing_format_option_is_reported() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl()
        .args(["--db", &db_path, "config", "--remove", "datetime_fmt"])
        .assert()
        .success();

    wtl()
        .args(["--db", &db_path, "--test", "login"])
        .assert()
        .failure()
        .stderr(contains("No option 'datetime_fmt'"));
}

#[test]
fn test_report_for_date() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl()
        .args(["--db", &db_path, "report", "--date", "2026-10-19"])
        .assert()
        .success()
        .stdout(contains("19th Oct"))
        .stdout(contains("Week 43 of 2026"))
        .stdout(contains("Oct 2026"))
        .stdout(contains("Worked"))
        .stdout(contains("Left"));
}

#[test]
fn test_report_rejects_bad_date() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl()
        .args(["--db", &db_path, "report", "--date", "2026-19-10"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_clear_requires_confirmation() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);
    insert_closed(&db_path, 1_000, 4_600);

    wtl()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    wtl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("(1 closed)"));

    wtl()
        .args(["--db", &db_path, "clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("log entries deleted"));

    wtl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("(0 closed)"));
}

#[test]
fn test_corrupt_database_is_reported() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "INSERT INTO logs (active) VALUES (1);
         INSERT INTO logs (active) VALUES (1);",
    )
    .unwrap();
    drop(conn);

    wtl()
        .args(["--db", &db_path, "status"])
        .assert()
        .failure()
        .stderr(contains("Multiple logs are active"));

    wtl()
        .args(["--db", &db_path, "--test", "login"])
        .assert()
        .failure()
        .stderr(contains("corrupted"));
}

#[test]
fn test_journal_records_operations() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl().args(["--db", &db_path, "--test", "login"]).assert().success();
    wtl().args(["--db", &db_path, "--test", "logout"]).assert().success();

    wtl()
        .args(["--db", &db_path, "journal", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("login").and(contains("logout")));
}

#[test]
fn test_db_check_and_vacuum() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl()
        .args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_relative_db_is_the_same_file_for_init_and_later_commands() {
    let cwd = tempfile::tempdir().expect("create temp dir");

    wtl()
        .current_dir(cwd.path())
        .args(["--db", "rel.sqlite", "--test", "init"])
        .assert()
        .success();
    assert!(cwd.path().join("rel.sqlite").exists());

    wtl()
        .current_dir(cwd.path())
        .args(["--db", "rel.sqlite", "--test", "config", "--set", "hours", "99"])
        .assert()
        .success();

    wtl()
        .current_dir(cwd.path())
        .args(["--db", "rel.sqlite", "--test", "config", "--get", "hours"])
        .assert()
        .success()
        .stdout(contains("99"));

    let absolute = cwd.path().join("rel.sqlite").to_string_lossy().to_string();
    wtl()
        .args(["--db", &absolute, "config", "--get", "hours"])
        .assert()
        .success()
        .stdout(contains("99"));
}

#[test]
fn test_huge_target_is_reported_not_a_crash() {
    let (_dir, db_path) = setup_test_db();
    init_db(&db_path);

    wtl()
        .args(["--db", &db_path, "config", "--set", "hours", "1e16"])
        .assert()
        .success();

    wtl()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid value '1e16' for option 'hours'"));
}
