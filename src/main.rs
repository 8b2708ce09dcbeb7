//! Command-line entry point.
//!
//! Thin wrapper around the `ecourts_scraper` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Interrupt handling and exit codes
//!
//! Exit code is 0 when the operation ran (even if it reported an error
//! result) and 1 on Ctrl-C or any unexpected failure.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ecourts_scraper::app::run_mode;
use ecourts_scraper::cli::Cli;
use ecourts_scraper::initialization::{init_logger_with, load_env_file};
use ecourts_scraper::CourtScraper;

#[tokio::main]
async fn main() -> Result<()> {
    load_env_file();

    let cli = Cli::parse();

    init_logger_with(cli.common.log_level.clone().into(), cli.common.log_format.clone())
        .context("Failed to initialize logger")?;

    tokio::select! {
        result = run(&cli) => {
            if let Err(e) = result {
                eprintln!("\n❌ Unexpected error: {:#}", e);
                process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\n\n⚠️  Operation cancelled by user");
            process::exit(1);
        }
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let scraper = CourtScraper::new(&cli.common.scraper_config())
        .context("Failed to initialize scraper")?;
    let mut stdout = std::io::stdout();
    run_mode(
        &scraper,
        &cli.mode(),
        cli.date_selector(),
        cli.output,
        &mut stdout,
    )
    .await
}
