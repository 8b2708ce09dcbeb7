//! Daily cause-list retrieval.

use chrono::Local;
use log::{info, warn};

use super::CourtScraper;
use crate::config::CAUSE_LIST_PATH;
use crate::dates::format_cause_list_date;
use crate::error_handling::{Outcome, ScrapeError};
use crate::models::{CauseList, CauseListReport, STATUS_SUCCESS};
use crate::parse::parse_cause_list;
use crate::storage::{cause_list_filename, persist_best_effort};

impl CourtScraper {
    /// Fetches today's cause list and saves it as `causelist_<date>.json`.
    ///
    /// Only the rows rendered on the single listing page are captured. A
    /// second call on the same day overwrites the earlier file.
    pub async fn get_cause_list(&self) -> Outcome<CauseListReport> {
        let body = match self.fetch_cause_list_page().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Cause list fetch failed ({}): {e}", e.error_type());
                return Outcome::failure("Cause list download failed", &e);
            }
        };

        let now = Local::now().naive_local();
        let list: CauseList = parse_cause_list(&body, &format_cause_list_date(now.date()));
        let filename = cause_list_filename(now);
        persist_best_effort(&list, &self.output_dir, &filename).await;
        info!("Cause list for {} has {} cases", list.date, list.cases.len());

        Outcome::Success(CauseListReport {
            status: STATUS_SUCCESS.to_string(),
            filename,
            cases_count: list.cases.len(),
            data: list,
        })
    }

    async fn fetch_cause_list_page(&self) -> Result<String, ScrapeError> {
        let url = self.endpoint(CAUSE_LIST_PATH)?;
        log::debug!("GET {url}");
        Ok(self.client.get(url).send().await?.text().await?)
    }
}
