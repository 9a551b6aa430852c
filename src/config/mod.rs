//! Application settings file (YAML): where the database lives and how to
//! notify. Display formats and targets are options in the database itself.

use crate::errors::{AppError, AppResult};
use crate::utils::path::{app_dir, expand_tilde, resolve_db_path};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// `console`, `desktop` or `none`
    #[serde(default = "default_notifications")]
    pub notifications: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_notifications() -> String {
    "console".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            notifications: default_notifications(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        app_dir()
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wl.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("wl.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Write the settings file (unless `is_test`) and return the database path
    /// it points to.
    ///
    /// A custom path resolves the same way `--db` does for every command.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let db_path = match custom_db {
            Some(name) => resolve_db_path(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::load().unwrap_or_default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
