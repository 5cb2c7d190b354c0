use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for gratitude
/// One short entry per day, daily reminders, CSV export/import on SQLite
#[derive(Parser)]
#[command(
    name = "gratitude",
    version = env!("CARGO_PKG_VERSION"),
    about = "A gratitude journal for the terminal: one entry per day, stored in SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Write (or rewrite) the entry for a day
    Add {
        /// What are you grateful for?
        content: String,

        /// Day of the entry (YYYY-MM-DD), default today
        #[arg(long, short = 'd')]
        date: Option<String>,
    },

    /// Show the entry for a day
    Show {
        /// Day to show (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Filter by year/month/day or a custom range.
        ///
        /// YYYY, YYYY-MM, YYYY-MM-DD, or START:END with those forms
        /// (e.g. "2024-09:2025-02").
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Month view with the journaled days marked
    Calendar {
        /// Month to show (YYYY-MM), default current month
        month: Option<String>,
    },

    /// Delete one entry, or all of them
    #[command(group(ArgGroup::new("target").required(true).args(["date", "all"])))]
    Del {
        /// Day whose entry is deleted (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long, help = "Delete ALL entries")]
        all: bool,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export all entries to CSV
    Export {
        /// Output file (default: gratitude-export-<timestamp>.csv)
        #[arg(long, value_name = "FILE", conflicts_with = "dir")]
        file: Option<String>,

        /// Directory for the default file name (default: current directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import entries from a CSV export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// View or change the daily reminder
    Notify {
        #[arg(long = "print", help = "Show reminder settings and the scheduled trigger")]
        print: bool,

        #[arg(long, conflicts_with = "disable", help = "Enable the daily reminder")]
        enable: bool,

        #[arg(long, help = "Disable the daily reminder")]
        disable: bool,

        #[arg(long, value_name = "HH:MM", help = "Reminder time")]
        at: Option<String>,

        #[arg(long, help = "Re-register the trigger from the stored settings")]
        sync: bool,
    },

    /// Fire the reminder now, unless today already has an entry
    Remind,

    /// Manage the database (integrity checks, stats)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn del_needs_a_target() {
        assert!(Cli::try_parse_from(["gratitude", "del"]).is_err());
        assert!(Cli::try_parse_from(["gratitude", "del", "2024-01-01"]).is_ok());
        assert!(Cli::try_parse_from(["gratitude", "del", "--all", "-y"]).is_ok());
    }

    #[test]
    fn enable_and_disable_conflict() {
        assert!(Cli::try_parse_from(["gratitude", "notify", "--enable", "--disable"]).is_err());
    }

    #[test]
    fn global_db_after_subcommand() {
        let cli = Cli::try_parse_from(["gratitude", "list", "--db", "/tmp/x.sqlite"]).unwrap();
        assert_eq!(cli.db.as_deref(), Some("/tmp/x.sqlite"));
    }
}
