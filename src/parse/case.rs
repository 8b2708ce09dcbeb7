//! Case-status result parsing.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::{cell_text, static_selector};
use crate::config::COURT_PLACEHOLDER;
use crate::models::CaseResult;

/// Rows with fewer cells are layout noise, not case rows.
const MIN_CASE_ROW_CELLS: usize = 3;

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("tr"));
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("td"));
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("a[href]"));

static PDF_HREF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.pdf").unwrap_or_else(|e| {
        panic!("Failed to compile PDF href pattern: {e}. This is a programming error.")
    })
});

/// Scans a result page for the first row mentioning `target_date`.
///
/// A row qualifies when it has at least three cells and any cell's text
/// contains `target_date` as a substring. The first qualifying row wins and
/// scanning stops there. Without one, the result is `CaseResult::not_found()`.
pub fn parse_case_rows(html: &str, target_date: &str) -> CaseResult {
    let document = Html::parse_document(html);

    for row in document.select(&ROW_SELECTOR) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
        if cells.len() < MIN_CASE_ROW_CELLS {
            continue;
        }

        let texts: Vec<String> = cells.iter().map(cell_text).collect();
        if !texts.iter().any(|text| text.contains(target_date)) {
            continue;
        }

        let pdf_url = extract_pdf_link(&row);
        let result = CaseResult {
            case_found: true,
            listed_for_hearing: true,
            hearing_date: Some(target_date.to_string()),
            serial_number: extract_serial_number(&texts),
            court_name: Some(extract_court_name(&texts)),
            pdf_available: pdf_url.is_some(),
            pdf_url,
        };
        log::debug!("Matched row for {target_date}: {result:?}");
        return result;
    }

    log::debug!("No row mentions {target_date}");
    CaseResult::not_found()
}

/// First cell whose trimmed text is a non-empty run of digits.
///
/// Any Unicode numeric character counts, so serials rendered in Devanagari
/// (`४२`) are kept as written.
fn extract_serial_number(texts: &[String]) -> Option<String> {
    texts
        .iter()
        .map(|text| text.trim())
        .find(|text| !text.is_empty() && text.chars().all(char::is_numeric))
        .map(str::to_string)
}

/// First cell mentioning a court or judge, else the placeholder.
fn extract_court_name(texts: &[String]) -> String {
    texts
        .iter()
        .map(|text| text.trim())
        .find(|text| {
            let lower = text.to_lowercase();
            lower.contains("court") || lower.contains("judge")
        })
        .unwrap_or(COURT_PLACEHOLDER)
        .to_string()
}

fn extract_pdf_link(row: &ElementRef<'_>) -> Option<String> {
    row.select(&LINK_SELECTOR)
        .filter_map(|link| link.value().attr("href"))
        .find(|href| PDF_HREF_PATTERN.is_match(href))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: &str = "16-10-2026";

    fn page(rows: &str) -> String {
        format!("<html><body><table>{rows}</table></body></html>")
    }

    #[test]
    fn test_exact_date_cell_matches() {
        let html = page(&format!(
            "<tr><td>42</td><td>High Court of Delhi</td><td>{DATE}</td></tr>"
        ));
        let result = parse_case_rows(&html, DATE);
        assert!(result.case_found);
        assert!(result.listed_for_hearing);
        assert_eq!(result.hearing_date.as_deref(), Some(DATE));
        assert_eq!(result.serial_number.as_deref(), Some("42"));
        assert_eq!(result.court_name.as_deref(), Some("High Court of Delhi"));
        assert!(!result.pdf_available);
        assert_eq!(result.pdf_url, None);
    }

    #[test]
    fn test_no_matching_row() {
        let html = page("<tr><td>1</td><td>District Court</td><td>15-10-2026</td></tr>");
        assert_eq!(parse_case_rows(&html, DATE), CaseResult::not_found());
    }

    #[test]
    fn test_embedded_date_matches() {
        let html = page(&format!(
            "<tr><td>7</td><td>Next hearing: {DATE} (tentative), earlier 01-09-2026</td><td>x</td></tr>"
        ));
        let result = parse_case_rows(&html, DATE);
        assert!(result.case_found);
        assert_eq!(result.hearing_date.as_deref(), Some(DATE));
    }

    #[test]
    fn test_short_rows_ignored() {
        let html = page(&format!("<tr><td>3</td><td>{DATE}</td></tr>"));
        assert!(!parse_case_rows(&html, DATE).case_found);
    }

    #[test]
    fn test_header_cells_do_not_count() {
        let html = page(&format!("<tr><th>1</th><th>Court</th><th>{DATE}</th></tr>"));
        assert!(!parse_case_rows(&html, DATE).case_found);
    }

    #[test]
    fn test_first_matching_row_wins() {
        let html = page(&format!(
            "<tr><td>1</td><td>Court No. 1</td><td>{DATE}</td></tr>\
             <tr><td>2</td><td>Court No. 2</td><td>{DATE}</td><td><a href=\"/o/2.pdf\">PDF</a></td></tr>"
        ));
        let result = parse_case_rows(&html, DATE);
        assert_eq!(result.serial_number.as_deref(), Some("1"));
        assert_eq!(result.court_name.as_deref(), Some("Court No. 1"));
        assert!(!result.pdf_available);
    }

    #[test]
    fn test_serial_number_absent() {
        let html = page(&format!(
            "<tr><td>No. 12</td><td>Judge A. Sharma</td><td>{DATE}</td></tr>"
        ));
        let result = parse_case_rows(&html, DATE);
        assert_eq!(result.serial_number, None);
        assert_eq!(result.court_name.as_deref(), Some("Judge A. Sharma"));
    }

    #[test]
    fn test_devanagari_serial_number() {
        let html = page(&format!(
            "<tr><td>४२</td><td>District Court, Pune</td><td>{DATE}</td></tr>"
        ));
        assert_eq!(
            parse_case_rows(&html, DATE).serial_number.as_deref(),
            Some("४२")
        );
    }

    #[test]
    fn test_serial_number_is_trimmed() {
        let html = page(&format!(
            "<tr><td>  </td><td>\n 42 \n</td><td>{DATE}</td></tr>"
        ));
        assert_eq!(
            parse_case_rows(&html, DATE).serial_number.as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_court_placeholder() {
        let html = page(&format!("<tr><td>5</td><td>Civil</td><td>{DATE}</td></tr>"));
        assert_eq!(
            parse_case_rows(&html, DATE).court_name.as_deref(),
            Some(COURT_PLACEHOLDER)
        );
    }

    #[test]
    fn test_court_match_is_case_insensitive() {
        let html = page(&format!(
            "<tr><td>5</td><td>  FAMILY COURT, SAKET </td><td>{DATE}</td></tr>"
        ));
        assert_eq!(
            parse_case_rows(&html, DATE).court_name.as_deref(),
            Some("FAMILY COURT, SAKET")
        );
    }

    #[test]
    fn test_pdf_link_extracted() {
        let html = page(&format!(
            "<tr><td>9</td><td>Court 3</td><td>{DATE}</td>\
             <td><a href=\"/view\">View</a> <a href=\"/orders/9.pdf?dl=1\">Order</a> <a href=\"/orders/10.pdf\">Old</a></td></tr>"
        ));
        let result = parse_case_rows(&html, DATE);
        assert!(result.pdf_available);
        assert_eq!(result.pdf_url.as_deref(), Some("/orders/9.pdf?dl=1"));
        assert_eq!(result.document_url(), Some("/orders/9.pdf?dl=1"));
    }

    #[test]
    fn test_nested_markup_text_is_joined() {
        let html = page(&format!(
            "<tr><td><b>4</b><span>2</span></td><td><span>Court</span> of <i>Session</i></td><td><span>{DATE}</span></td></tr>"
        ));
        let result = parse_case_rows(&html, DATE);
        assert_eq!(result.serial_number.as_deref(), Some("42"));
        assert_eq!(result.court_name.as_deref(), Some("Court of Session"));
    }

    #[test]
    fn test_empty_and_unstructured_pages() {
        assert_eq!(parse_case_rows("", DATE), CaseResult::not_found());
        assert_eq!(
            parse_case_rows(&format!("<p>{DATE}</p>"), DATE),
            CaseResult::not_found()
        );
    }
}
