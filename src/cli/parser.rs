use crate::logfile::HeaderPolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for talogo
#[derive(Parser)]
#[command(
    name = "talogo",
    version = env!("CARGO_PKG_VERSION"),
    about = "talogo is a simple tasks time tracker utility and logger",
    long_about = None
)]
pub struct Cli {
    /// Log file to read/write (overrides `log_file` from the config)
    #[arg(global = true, long = "file", short = 'f', value_name = "FILE")]
    pub file: Option<String>,

    /// Policy when a title chain is deeper than the log header (overrides config)
    #[arg(global = true, long = "header-policy", value_enum)]
    pub header_policy: Option<HeaderPolicy>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default settings
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Start tracking a task and log it to file when stopped with Ctrl+C
    Log {
        /// Task title followed by optional subtask titles (root first)
        #[arg(value_name = "TITLE", required = true, num_args = 1..)]
        titles: Vec<String>,
    },

    /// Record a finished session without running the timer
    Add {
        /// Task title followed by optional subtask titles (root first)
        #[arg(value_name = "TITLE", required = true, num_args = 1..)]
        titles: Vec<String>,

        /// Start instant (RFC 3339, e.g. 2024-01-02T15:04:05-05:00)
        #[arg(long = "start")]
        start: String,

        /// End instant (RFC 3339)
        #[arg(long = "end")]
        end: String,
    },

    /// Report total hours spent per task and subtask per day
    Summary {
        #[arg(
            long,
            short,
            help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD, 'today' or a START:END range"
        )]
        period: Option<String>,
    },
}
