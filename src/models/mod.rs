pub mod config_option;
pub mod journal_entry;
pub mod log_entry;
