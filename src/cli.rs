//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Historian - personal reference of historical events and figures
#[derive(Parser, Debug)]
#[command(name = "historian")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file (the only log sink in TUI mode)
    #[arg(long, env = "HISTORIAN_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Start with an empty store instead of the sample events
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive terminal UI (default)
    Tui,

    /// List all events
    Events {
        /// Print JSON instead of text blocks
        #[arg(long)]
        json: bool,
    },

    /// Search events by name (case-insensitive)
    Search {
        /// Text to look for in event names
        keyword: String,

        /// Print JSON instead of text blocks
        #[arg(long)]
        json: bool,
    },

    /// List figures followed by the leaders reference list
    Figures {
        /// Print JSON instead of text blocks
        #[arg(long)]
        json: bool,
    },

    /// Figures sorted by the start of their first period
    Leaders,

    /// Add an event for this session and print it
    AddEvent {
        #[arg(long)]
        name: String,

        /// Date as dd/mm/yyyy
        #[arg(long)]
        date: String,

        #[arg(long)]
        description: String,
    },

    /// Add a figure for this session and print it
    AddFigure {
        #[arg(long)]
        name: String,

        /// Comma-separated "Name - dd/mm/yyyy - dd/mm/yyyy" list
        #[arg(long)]
        periods: String,
    },
}

impl Cli {
    /// Log level derived from the -v count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Subcommand to run; none means the interactive UI
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}
