//! ecourts_scraper library: case status and cause lists from the eCourts portal
//!
//! Four operations are exposed on a [`CourtScraper`] handle:
//! - search by CNR
//! - search by case type, number and year
//! - fetch today's cause list
//! - download a linked document
//!
//! Searches report whether the case is listed for hearing today or tomorrow.
//! Every result is also written as JSON to the configured output directory.
//!
//! # Example
//!
//! ```no_run
//! use ecourts_scraper::{CourtScraper, DateSelector, ScraperConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scraper = CourtScraper::new(&ScraperConfig::default())?;
//! let outcome = scraper
//!     .search_by_cnr("DLHC010001232023", DateSelector::Tomorrow)
//!     .await;
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
#[allow(missing_docs)]
pub mod cli;
#[allow(missing_docs)]
pub mod config;
pub mod dates;
#[allow(missing_docs)]
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod storage;
mod utils;
#[allow(missing_docs)]
pub mod web;

// Re-export public API
pub use config::{LogFormat, LogLevel, OutputFormat, ScraperConfig};
pub use dates::DateSelector;
pub use error_handling::{Outcome, ScrapeError};
pub use fetch::CourtScraper;
pub use models::{CaseResult, CauseList, CauseListEntry, CauseListReport, DownloadResult, SearchQuery};
