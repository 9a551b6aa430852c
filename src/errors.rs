//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// More than one log entry is flagged active. Never repaired automatically.
    #[error("Multiple logs are active ({0} rows). Your database may be corrupted.")]
    CorruptState(usize),

    #[error("No log entry with id {0}")]
    LogNotFound(i64),

    #[error("No option '{0}' in database.")]
    OptionNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption { option: String, value: String },

    #[error("Invalid format string: {0}")]
    InvalidFormat(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Not logged in")]
    NotLoggedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
