//! Command-line flow: run the selected operation and print the outcome.

use std::io::Write;

use anyhow::Result;

use crate::cli::Mode;
use crate::config::OutputFormat;
use crate::dates::DateSelector;
use crate::error_handling::Outcome;
use crate::fetch::CourtScraper;
use crate::models::CaseResult;

use super::display::{
    render_case_json, render_case_result, render_cause_list, render_download, render_json,
};

/// Runs one command-line mode, writing everything user-facing to `out`.
///
/// Domain failures are printed, not returned; `Err` only means `out` could
/// not be written.
pub async fn run_mode<W: Write>(
    scraper: &CourtScraper,
    mode: &Mode,
    date: DateSelector,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let text = format == OutputFormat::Text;

    match mode {
        Mode::Cnr(cnr) => {
            if text {
                writeln!(out, "🔍 Searching case by CNR: {cnr}")?;
            }
            let outcome = scraper.search_by_cnr(cnr, date).await;
            report_case(scraper, &outcome, format, out).await?;
        }
        Mode::Case {
            case_type,
            case_number,
            year,
        } => {
            if text {
                writeln!(out, "🔍 Searching case: {case_type}/{case_number}/{year}")?;
            }
            let outcome = scraper
                .search_by_case_details(case_type, case_number, year, date)
                .await;
            report_case(scraper, &outcome, format, out).await?;
        }
        Mode::CauseList => {
            if text {
                writeln!(out, "📋 Downloading today's cause list...")?;
            }
            let outcome = scraper.get_cause_list().await;
            match format {
                OutputFormat::Text => write!(out, "{}", render_cause_list(&outcome))?,
                OutputFormat::Json => writeln!(out, "{}", render_json(&outcome))?,
            }
        }
    }
    Ok(())
}

/// Prints a search outcome and fetches its document when one is linked.
///
/// In JSON mode the download outcome is folded into the search result so
/// stdout carries a single document.
async fn report_case<W: Write>(
    scraper: &CourtScraper,
    outcome: &Outcome<CaseResult>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let url = outcome.success().and_then(CaseResult::document_url);

    match format {
        OutputFormat::Text => {
            write!(out, "{}", render_case_result(outcome))?;
            if let Some(url) = url {
                writeln!(out, "\n📥 Downloading PDF...")?;
                let download = scraper.download_pdf(url, None).await;
                write!(out, "{}", render_download(&download))?;
            }
        }
        OutputFormat::Json => {
            let download = match url {
                Some(url) => Some(scraper.download_pdf(url, None).await),
                None => None,
            };
            writeln!(out, "{}", render_case_json(outcome, download.as_ref()))?;
        }
    }
    Ok(())
}
