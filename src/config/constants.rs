//! Configuration constants.
//!
//! Portal endpoints, form field names, placeholders and the file naming
//! patterns used when results are written to disk.

/// Root of the public case-status portal. All three remote paths hang off it.
pub const DEFAULT_BASE_URL: &str = "https://ecourts.gov.in/ecourts_home/";

/// Path of the CNR search form, relative to the base URL.
pub const CNR_SEARCH_PATH: &str = "case_status_cnr/";
/// Path of the case-details search form, relative to the base URL.
pub const CASE_SEARCH_PATH: &str = "case_status/";
/// Path of the daily cause list, relative to the base URL.
pub const CAUSE_LIST_PATH: &str = "causelist/";

/// Identifying header sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 3;

/// Name of the hidden anti-forgery input on the search forms.
pub const CSRF_FIELD_NAME: &str = "csrf_token";

// Form field names for the POST submission
pub const FORM_CNR_NUMBER: &str = "cnr_number";
pub const FORM_CASE_TYPE: &str = "case_type";
pub const FORM_CASE_NUMBER: &str = "case_number";
pub const FORM_CASE_YEAR: &str = "case_year";

/// Court name reported when a matching row has no court/judge cell.
pub const COURT_PLACEHOLDER: &str = "Court information not available";

/// Date format used to match hearing dates inside page text (`DD-MM-YYYY`).
pub const HEARING_DATE_FORMAT: &str = "%d-%m-%Y";
/// Date format stored in the cause list record (`YYYY-MM-DD`).
pub const CAUSE_LIST_DATE_FORMAT: &str = "%Y-%m-%d";

// File naming
pub const CASE_RESULT_PREFIX: &str = "case_result_";
pub const CAUSE_LIST_PREFIX: &str = "causelist_";
pub const DOCUMENT_PREFIX: &str = "case_document_";
/// Timestamp to the second, used for case results and documents.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Day stamp used for cause lists; same-day reruns overwrite.
pub const FILE_DATESTAMP_FORMAT: &str = "%Y%m%d";

/// Number of cause-list entries shown on the console.
pub const CAUSE_LIST_PREVIEW_LEN: usize = 5;

/// Maximum error message length in characters returned to callers.
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

/// Default bind address of the web adapter.
pub const DEFAULT_WEB_HOST: &str = "0.0.0.0";
/// Default port of the web adapter.
pub const DEFAULT_WEB_PORT: u16 = 5000;
