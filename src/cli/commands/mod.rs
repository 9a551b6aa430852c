pub mod clear;
pub mod config;
pub mod db;
pub mod init;
pub mod journal;
pub mod login;
pub mod logout;
pub mod report;
pub mod status;

use std::io::{self, Write};

use crate::ui::messages::warning;

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
