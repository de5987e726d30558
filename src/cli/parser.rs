use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for bakdag
#[derive(Parser)]
#[command(
    name = "bakdag",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track your drinks during a bakdag: check in, watch your pace, reach 24 units",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

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

    /// Show the drink catalog, or add a drink to it
    Drinks {
        #[arg(long = "add", requires = "name", requires = "units", help = "Add a drink")]
        add: bool,

        #[arg(long = "name", help = "Drink name")]
        name: Option<String>,

        #[arg(long = "units", help = "Alcohol units per serving")]
        units: Option<f64>,

        #[arg(long = "emoji", help = "Icon shown next to the drink")]
        emoji: Option<String>,
    },

    /// Start (or restart) the bakdag clock
    Start,

    /// End the running bakdag
    End {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Check in a drink by catalog number or name
    Checkin {
        /// Catalog number (see `drinks`) or drink name
        drink: Option<String>,

        #[arg(long = "notes", help = "Free text stored with the check-in")]
        notes: Option<String>,

        #[arg(long = "photo", value_name = "FILE", help = "Image to embed in the check-in")]
        photo: Option<String>,
    },

    /// Show the check-in feed, newest first
    Feed {
        #[arg(long = "limit", short = 'n', help = "Show at most N check-ins")]
        limit: Option<usize>,
    },

    /// Show the progress bar of the running bakdag
    Progress,

    /// Show the full statistics of the running bakdag
    Stats,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export the check-in log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
