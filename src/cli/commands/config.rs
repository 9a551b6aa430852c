use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::configuration::Configuration;
use crate::db::journal;
use crate::db::pool::TimeStore;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use crate::utils::colors::{CYAN, RESET};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        list,
        get,
        set,
        remove,
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- DATABASE OPTIONS ----
        if *list || get.is_some() || set.is_some() || remove.is_some() {
            let store = TimeStore::open(&cfg.database)?;
            let mut options = Configuration::load(&store)?;

            if let Some(kv) = set
                && let [key, value] = kv.as_slice()
            {
                options.set_option(key, value)?;
                success(format!("Option '{}' set to '{}'", key, value));
                journal::record_or_warn(&store, "config_set", key, &format!("{key} = {value}"));
            }

            if let Some(key) = remove {
                if options.remove_option(key)? {
                    success(format!("Option '{}' removed", key));
                    journal::record_or_warn(&store, "config_remove", key, "Option removed");
                } else {
                    warning(format!("Option '{}' was not set", key));
                }
            }

            if let Some(key) = get {
                println!("{}", options.get_option(key)?);
            }

            if *list {
                let width = options.all().keys().map(|k| k.len()).max().unwrap_or(0);
                for (k, v) in options.all() {
                    println!("{CYAN}{:<width$}{RESET} = {}", k, v, width = width);
                }
            }
        }

        // ---- PRINT SETTINGS FILE ----
        if *print_config {
            println!("📄 Current settings ({}):\n", Config::config_file().display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT SETTINGS FILE ----
        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                cfg.save_to(&path)?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Settings file edited using '{}'", editor_to_use));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Settings file edited using fallback '{}'",
                                default_editor
                            ));
                        }
                        Ok(_) | Err(_) => {
                            error(format!(
                                "Failed to edit settings file using fallback '{}'",
                                default_editor
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
