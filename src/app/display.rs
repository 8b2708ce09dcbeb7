//! Console rendering of operation outcomes.
//!
//! Renderers return strings so the binary decides where they go.

use serde::Serialize;

use crate::config::CAUSE_LIST_PREVIEW_LEN;
use crate::error_handling::Outcome;
use crate::models::{CaseResult, CauseListReport, DownloadResult};

const RULE_WIDTH: usize = 50;

/// Pretty JSON of any outcome, as printed for `--output json`.
pub fn render_json<T: Serialize>(outcome: &Outcome<T>) -> String {
    serde_json::to_string_pretty(outcome)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to render result: {e}\"}}"))
}

/// One JSON document for a search and, when a document was fetched, its
/// download outcome under `download`.
pub fn render_case_json(
    outcome: &Outcome<CaseResult>,
    download: Option<&Outcome<DownloadResult>>,
) -> String {
    let Some(download) = download else {
        return render_json(outcome);
    };
    let combined = serde_json::to_value(outcome).and_then(|mut value| {
        if let Some(fields) = value.as_object_mut() {
            fields.insert("download".to_string(), serde_json::to_value(download)?);
        }
        Ok(value)
    });
    combined
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to render result: {e}\"}}"))
}

/// Newline-terminated lines joined into one block.
fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Boxed summary of a case search.
pub fn render_case_result(outcome: &Outcome<CaseResult>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "ECOURTS CASE SEARCH RESULT".to_string(),
        rule.clone(),
    ];

    let result = match outcome {
        Outcome::Failure { error } => {
            lines.push(format!("❌ Error: {error}"));
            return join_lines(&lines);
        }
        Outcome::Success(result) => result,
    };

    if !result.case_found {
        lines.push("❌ Case not found or not listed for hearing".to_string());
    } else if !result.listed_for_hearing {
        lines.push("✅ Case Found!".to_string());
        lines.push("❌ Not listed for hearing on the specified date".to_string());
    } else {
        let na = "N/A";
        lines.push("✅ Case Found!".to_string());
        lines.push(format!(
            "📅 Listed for hearing on: {}",
            result.hearing_date.as_deref().unwrap_or(na)
        ));
        lines.push(format!(
            "🔢 Serial Number: {}",
            result.serial_number.as_deref().unwrap_or(na)
        ));
        lines.push(format!(
            "🏛️  Court: {}",
            result.court_name.as_deref().unwrap_or(na)
        ));
        lines.push(match result.document_url() {
            Some(url) => format!("📄 PDF Available: {url}"),
            None => "📄 No PDF available".to_string(),
        });
    }

    lines.push(rule);
    join_lines(&lines)
}

/// Saved-file line, total, and the first few entries of a cause list.
pub fn render_cause_list(outcome: &Outcome<CauseListReport>) -> String {
    let report = match outcome {
        Outcome::Failure { error } => return format!("❌ Error: {error}\n"),
        Outcome::Success(report) => report,
    };

    let mut lines = vec![
        format!("✅ Cause list saved as: {}", report.filename),
        format!("📊 Total cases: {}", report.cases_count),
    ];

    let cases = &report.data.cases;
    if !cases.is_empty() {
        lines.push("\n📋 Sample cases:".to_string());
        lines.extend(
            cases
                .iter()
                .take(CAUSE_LIST_PREVIEW_LEN)
                .enumerate()
                .map(|(i, case)| format!("  {}. {} - {}", i + 1, case.case_number, case.parties)),
        );
        if cases.len() > CAUSE_LIST_PREVIEW_LEN {
            lines.push(format!(
                "  ... and {} more cases",
                cases.len() - CAUSE_LIST_PREVIEW_LEN
            ));
        }
    }
    join_lines(&lines)
}

/// One-line report of a document download.
pub fn render_download(outcome: &Outcome<DownloadResult>) -> String {
    match outcome {
        Outcome::Success(download) => format!("✅ PDF saved as: {}\n", download.filename),
        Outcome::Failure { error } => format!("❌ PDF download failed: {error}\n"),
    }
}
