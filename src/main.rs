// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Commands};
use historian::HistoryStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.selected_command();

    init_logging(&cli, command == Commands::Tui)?;

    let mut store = if cli.empty {
        HistoryStore::new()
    } else {
        HistoryStore::with_sample_data()
    };
    info!(
        version = historian::VERSION,
        events = store.events().len(),
        "store ready"
    );

    match command {
        Commands::Tui => run_ui_mode(store),
        cmd => commands::execute(cmd, &mut store, &mut io::stdout().lock()),
    }
}

/// Logs go to --log-file when given, otherwise to stderr. The TUI owns the
/// terminal, so without a log file it runs with logging off.
fn init_logging(cli: &Cli, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init(),
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(store: HistoryStore) -> Result<()> {
    let mut app = ui::App::new(store);
    ui::run_ui(&mut app).context("running terminal UI")?;
    info!("ui closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_store: HistoryStore) -> Result<()> {
    anyhow::bail!(
        "TUI mode not available; rebuild with `cargo build --features tui` or use a subcommand such as `historian events`"
    )
}
