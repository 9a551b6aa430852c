use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::journal;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and settings file (skipped in test mode)
///  - the SQLite database from the bundled template
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing WorktimeLogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let store = TimeStore::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    journal::record_or_warn(
        &store,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 WorktimeLogger initialization completed!");
    Ok(())
}
