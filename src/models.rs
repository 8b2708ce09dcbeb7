//! Records produced by the operations and written to disk.
//!
//! Field names are part of the persisted JSON contract and of the web
//! adapter's responses; do not rename them.

use serde::{Deserialize, Serialize};

/// What the caller is looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Case Number Record, the portal-wide identifier.
    Cnr(String),
    /// Case type, number and registration year.
    CaseDetails {
        case_type: String,
        case_number: String,
        year: String,
    },
}

impl SearchQuery {
    /// Form fields submitted for this query, excluding the anti-forgery token.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        use crate::config::{FORM_CASE_NUMBER, FORM_CASE_TYPE, FORM_CASE_YEAR, FORM_CNR_NUMBER};

        match self {
            SearchQuery::Cnr(cnr) => vec![(FORM_CNR_NUMBER, cnr.clone())],
            SearchQuery::CaseDetails {
                case_type,
                case_number,
                year,
            } => vec![
                (FORM_CASE_TYPE, case_type.clone()),
                (FORM_CASE_NUMBER, case_number.clone()),
                (FORM_CASE_YEAR, year.clone()),
            ],
        }
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchQuery::Cnr(cnr) => write!(f, "CNR {cnr}"),
            SearchQuery::CaseDetails {
                case_type,
                case_number,
                year,
            } => write!(f, "{case_type}/{case_number}/{year}"),
        }
    }
}

/// Outcome of a case search for one target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub case_found: bool,
    pub listed_for_hearing: bool,
    pub hearing_date: Option<String>,
    pub serial_number: Option<String>,
    pub court_name: Option<String>,
    pub pdf_available: bool,
    pub pdf_url: Option<String>,
}

impl CaseResult {
    /// Result for a page where no row mentions the target date.
    pub fn not_found() -> Self {
        Self {
            case_found: false,
            listed_for_hearing: false,
            hearing_date: None,
            serial_number: None,
            court_name: None,
            pdf_available: false,
            pdf_url: None,
        }
    }

    /// The document link, when the matched row had one.
    pub fn document_url(&self) -> Option<&str> {
        if self.pdf_available {
            self.pdf_url.as_deref()
        } else {
            None
        }
    }
}

/// One row of a cause list, taken positionally from the first four cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseListEntry {
    pub serial_no: String,
    pub case_number: String,
    pub parties: String,
    pub court: String,
}

/// A day's docket as rendered on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseList {
    /// `YYYY-MM-DD` of the day the list was fetched
    pub date: String,
    pub cases: Vec<CauseListEntry>,
}

/// Success payload of the cause-list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseListReport {
    /// Always `"success"`
    pub status: String,
    pub filename: String,
    pub cases_count: usize,
    pub data: CauseList,
}

/// Success payload of the document fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadResult {
    /// Always `"success"`
    pub status: String,
    pub filename: String,
}

pub(crate) const STATUS_SUCCESS: &str = "success";
