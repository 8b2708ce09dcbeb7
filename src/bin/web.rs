//! Web API entry point: serves the bundled form and the JSON endpoints.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use ecourts_scraper::cli::WebCli;
use ecourts_scraper::initialization::{init_logger_with, load_env_file};
use ecourts_scraper::web::start_web_server;
use ecourts_scraper::CourtScraper;

#[tokio::main]
async fn main() -> Result<()> {
    load_env_file();

    let cli = WebCli::parse();

    init_logger_with(cli.common.log_level.clone().into(), cli.common.log_format.clone())
        .context("Failed to initialize logger")?;

    let scraper = CourtScraper::new(&cli.common.scraper_config())
        .context("Failed to initialize scraper")?;
    log::info!(
        "Portal {} (timeout {}s), writing results to {}",
        scraper.base_url(),
        cli.common.timeout_seconds,
        scraper.output_dir().display()
    );

    start_web_server(&cli.host, cli.port, Arc::new(scraper)).await
}
