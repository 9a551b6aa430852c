//! Path utilities: expand `~`, resolve the application directory.

use std::path::PathBuf;

/// Directory holding the settings file and, by default, the database.
pub const APP_DIR_NAME: &str = ".WorktimeLogger";

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Where a `--db` argument points: `~` is expanded and a relative path is
/// taken from the current directory, whatever the command.
pub fn resolve_db_path(arg: &str) -> PathBuf {
    let p = expand_tilde(arg);
    std::path::absolute(&p).unwrap_or(p)
}

/// `~/.WorktimeLogger`, or the current directory's equivalent when no home
/// directory can be determined.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
