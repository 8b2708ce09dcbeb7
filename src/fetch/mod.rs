//! Portal operations.
//!
//! `CourtScraper` is the explicitly constructed handle behind both adapters.
//! It wraps a pooled `reqwest::Client` plus the resolved base URL and output
//! directory; it is `Clone + Send + Sync` and carries no per-call state, so a
//! single instance (usually behind `Arc`) serves concurrent callers.
//!
//! Every operation returns an `Outcome`: transport failures are caught at the
//! operation boundary and never escape as `Err`.

mod cause_list;
mod document;
mod search;

use std::path::{Path, PathBuf};

use url::Url;

use crate::config::{ConfigValidationError, ScraperConfig};
use crate::error_handling::{InitializationError, ScrapeError};
use crate::initialization::init_client;

/// Handle for the four portal operations.
#[derive(Debug, Clone)]
pub struct CourtScraper {
    client: reqwest::Client,
    base_url: Url,
    output_dir: PathBuf,
}

impl CourtScraper {
    /// Validates `config` and builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the client cannot
    /// be created.
    pub fn new(config: &ScraperConfig) -> Result<Self, InitializationError> {
        config.validate()?;
        let client = init_client(config)?;
        Self::with_client(client, config)
    }

    /// Builds a scraper around an existing client, sharing its pool.
    pub fn with_client(
        client: reqwest::Client,
        config: &ScraperConfig,
    ) -> Result<Self, InitializationError> {
        let base_url = parse_base_url(&config.base_url)?;
        Ok(Self {
            client,
            base_url,
            output_dir: config.output_dir.clone(),
        })
    }

    /// Directory receiving result files and documents.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Portal root all remote paths are joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ScrapeError> {
        self.base_url
            .join(path)
            .map_err(|e| ScrapeError::InvalidUrl(format!("{path}: {e}")))
    }
}

/// Parses the base URL, ensuring a trailing slash so relative joins append
/// instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ConfigValidationError> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&with_slash).map_err(|e| ConfigValidationError {
        field: "base_url",
        message: format!("'{raw}' is not a valid URL: {e}"),
    })
}
