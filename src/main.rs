use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fintrack_cli::cli::{Console, Shell};
use fintrack_cli::config::Settings;
use fintrack_cli::import::ImportTarget;
use fintrack_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Console personal finance tracker",
    long_about = "FinTrack keeps bank accounts, income/expense categories and \
                  operations in memory for one session. Data moves in and out \
                  through CSV import and export."
)]
struct Cli {
    #[command(flatten)]
    settings: Settings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(settings.log_level.as_directive()))
        .with_writer(io::stderr)
        .init();

    let storage = Storage::in_memory();

    if let Some(path) = &settings.preload_accounts {
        let count = ImportTarget::Accounts
            .import(&storage, path)
            .with_context(|| format!("Failed to import accounts from {}", path.display()))?;
        println!("Loaded {} accounts from {}", count, path.display());
    }
    if let Some(path) = &settings.preload_operations {
        let count = ImportTarget::Operations
            .import(&storage, path)
            .with_context(|| format!("Failed to import operations from {}", path.display()))?;
        println!("Loaded {} operations from {}", count, path.display());
    }

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    Shell::new(&storage, &settings, console).run()?;

    Ok(())
}
