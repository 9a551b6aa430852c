//! WorktimeLogger main entrypoint.

use worktimelogger::run;
use worktimelogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
