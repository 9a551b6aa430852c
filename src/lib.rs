//! WorktimeLogger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::resolve_db_path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Login => cli::commands::login::handle(cfg),
        Commands::Logout => cli::commands::logout::handle(cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Clear => cli::commands::clear::handle(cfg),
        Commands::Journal { .. } => cli::commands::journal::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Settings are read once; --db wins over the file.
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = resolve_db_path(custom_db).to_string_lossy().to_string();
    }
    if cli.test {
        cfg.notifications = "none".to_string();
    }

    dispatch(&cli, &cfg)
}
