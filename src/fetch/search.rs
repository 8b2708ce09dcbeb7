//! Case searches: token acquisition, form submission, row scan.

use chrono::Local;
use log::{debug, info, warn};

use super::CourtScraper;
use crate::config::{CASE_SEARCH_PATH, CNR_SEARCH_PATH, CSRF_FIELD_NAME};
use crate::dates::{format_target_date, local_today, DateSelector};
use crate::error_handling::{Outcome, ScrapeError};
use crate::models::{CaseResult, SearchQuery};
use crate::parse::{extract_csrf_token, parse_case_rows};
use crate::storage::{case_result_filename, persist_best_effort};

impl CourtScraper {
    /// Searches by CNR and checks whether the case is listed on the selected day.
    pub async fn search_by_cnr(&self, cnr: &str, date: DateSelector) -> Outcome<CaseResult> {
        self.search(&SearchQuery::Cnr(cnr.to_string()), date).await
    }

    /// Searches by case type, number and year.
    pub async fn search_by_case_details(
        &self,
        case_type: &str,
        case_number: &str,
        year: &str,
        date: DateSelector,
    ) -> Outcome<CaseResult> {
        let query = SearchQuery::CaseDetails {
            case_type: case_type.to_string(),
            case_number: case_number.to_string(),
            year: year.to_string(),
        };
        self.search(&query, date).await
    }

    /// Runs either kind of search.
    ///
    /// On a completed round-trip the result is written to
    /// `case_result_<timestamp>.json`, whether or not the case was found.
    pub async fn search(&self, query: &SearchQuery, date: DateSelector) -> Outcome<CaseResult> {
        let (path, context) = match query {
            SearchQuery::Cnr(_) => (CNR_SEARCH_PATH, "CNR search failed"),
            SearchQuery::CaseDetails { .. } => (CASE_SEARCH_PATH, "Case details search failed"),
        };

        let body = match self.submit_search(path, query).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Search for {query} failed ({}): {e}", e.error_type());
                return Outcome::failure(context, &e);
            }
        };

        let target_date = format_target_date(date, local_today());
        let result = parse_case_rows(&body, &target_date);
        if result.case_found {
            info!("{query} is listed for hearing on {target_date}");
        } else {
            info!("{query} is not listed on {target_date}");
        }

        let filename = case_result_filename(Local::now().naive_local());
        persist_best_effort(&result, &self.output_dir, &filename).await;

        Outcome::Success(result)
    }

    /// GETs the search form for its token, then POSTs the query to the same path.
    ///
    /// The POST status is not checked: a rejected submission simply renders
    /// no matching rows.
    async fn submit_search(&self, path: &str, query: &SearchQuery) -> Result<String, ScrapeError> {
        let url = self.endpoint(path)?;

        debug!("GET {url}");
        let form_page = self.client.get(url.clone()).send().await?.text().await?;
        let token = extract_csrf_token(&form_page);

        let mut form = query.form_fields();
        if let Some(token) = token {
            form.push((CSRF_FIELD_NAME, token));
        }

        debug!("POST {url} ({} fields)", form.len());
        let body = self.client.post(url).form(&form).send().await?.text().await?;
        Ok(body)
    }
}
