use clap::{Parser, Subcommand};

/// Command-line interface definition for WorktimeLogger
/// Log in and out of work sessions and compare worked time against a monthly target
#[derive(Parser)]
#[command(
    name = "worktimelogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small work time logger: log in/out and track daily, weekly and monthly totals",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Start a work session now
    Login,

    /// End the running work session now
    Logout,

    /// Show the current session, this week's and this month's totals
    Status,

    /// Show day, week and month totals around a date
    Report {
        /// Date to report on (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Manage display/target options stored in the database and the settings file
    Config {
        #[arg(long = "list", help = "List every option stored in the database")]
        list: bool,

        #[arg(long = "get", value_name = "KEY", help = "Print the value of one option")]
        get: Option<String>,

        #[arg(
            long = "set",
            num_args = 2,
            value_names = ["KEY", "VALUE"],
            help = "Create or update an option"
        )]
        set: Option<Vec<String>>,

        #[arg(long = "remove", value_name = "KEY", help = "Remove an option")]
        remove: Option<String>,

        #[arg(long = "print", help = "Print the current settings file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the settings file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Delete every logged session (asks for confirmation)
    Clear,

    /// Print the internal journal of operations
    Journal {
        #[arg(long = "print", help = "Print rows from the journal table")]
        print: bool,
    },

    /// Manage the database (integrity checks, info, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
