//! Document download.

use chrono::Local;
use log::{info, warn};
use url::Url;

use super::CourtScraper;
use crate::error_handling::{Outcome, ScrapeError};
use crate::models::{DownloadResult, STATUS_SUCCESS};
use crate::storage::{document_filename, save_bytes};
use crate::utils::sanitize_document_filename;

impl CourtScraper {
    /// Downloads `url` and writes the raw body to `filename` (or a generated
    /// `case_document_<timestamp>.pdf`) in the output directory.
    ///
    /// A non-success status is an error. The body is read in full before
    /// anything touches disk, so a failed transfer leaves no file behind.
    /// No content-type or size checks are made.
    pub async fn download_pdf(&self, url: &str, filename: Option<&str>) -> Outcome<DownloadResult> {
        let filename = filename
            .and_then(sanitize_document_filename)
            .unwrap_or_else(|| document_filename(Local::now().naive_local()));

        match self.fetch_document(url, &filename).await {
            Ok(()) => {
                info!("Saved document {url} as {filename}");
                Outcome::Success(DownloadResult {
                    status: STATUS_SUCCESS.to_string(),
                    filename,
                })
            }
            Err(e) => {
                warn!("Document download of {url} failed ({}): {e}", e.error_type());
                Outcome::failure("PDF download failed", &e)
            }
        }
    }

    async fn fetch_document(&self, url: &str, filename: &str) -> Result<(), ScrapeError> {
        let url = self.resolve_document_url(url)?;
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        save_bytes(&bytes, &self.output_dir, filename).await?;
        Ok(())
    }

    /// Absolute links are used as is; links scraped as relative paths are
    /// resolved against the portal root.
    fn resolve_document_url(&self, raw: &str) -> Result<Url, ScrapeError> {
        match Url::parse(raw) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base_url
                .join(raw)
                .map_err(|e| ScrapeError::InvalidUrl(format!("{raw}: {e}"))),
            Err(e) => Err(ScrapeError::InvalidUrl(format!("{raw}: {e}"))),
        }
    }
}
