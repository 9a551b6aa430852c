use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::configuration::Configuration;
use crate::db::journal;
use crate::db::pool::TimeStore;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let store = TimeStore::open(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            let options = Configuration::load(&store)?;
            stats::print_db_info(&store, &cfg.database, options.datetime_format()?)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = store
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            store.conn.execute_batch("VACUUM;")?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
            journal::record_or_warn(&store, "vacuum", "", "Database vacuumed");
        }
    }

    Ok(())
}
