//! File naming and writing.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::{
    CASE_RESULT_PREFIX, CAUSE_LIST_PREFIX, DOCUMENT_PREFIX, FILE_DATESTAMP_FORMAT,
    FILE_TIMESTAMP_FORMAT,
};
use crate::error_handling::ScrapeError;

/// `case_result_<YYYYMMDD_HHMMSS>.json`
pub fn case_result_filename(now: NaiveDateTime) -> String {
    format!("{CASE_RESULT_PREFIX}{}.json", now.format(FILE_TIMESTAMP_FORMAT))
}

/// `causelist_<YYYYMMDD>.json`
pub fn cause_list_filename(now: NaiveDateTime) -> String {
    format!("{CAUSE_LIST_PREFIX}{}.json", now.format(FILE_DATESTAMP_FORMAT))
}

/// `case_document_<YYYYMMDD_HHMMSS>.pdf`
pub fn document_filename(now: NaiveDateTime) -> String {
    format!("{DOCUMENT_PREFIX}{}.pdf", now.format(FILE_TIMESTAMP_FORMAT))
}

/// Writes `value` as pretty JSON (two-space indent, UTF-8 kept verbatim).
///
/// Creates or truncates `dir/filename` and returns the full path.
pub async fn save_json<T: Serialize + ?Sized>(
    value: &T,
    dir: &Path,
    filename: &str,
) -> Result<PathBuf, ScrapeError> {
    let body = serde_json::to_vec_pretty(value)?;
    save_bytes(&body, dir, filename).await
}

/// Writes raw bytes to `dir/filename` in one call.
pub async fn save_bytes(bytes: &[u8], dir: &Path, filename: &str) -> Result<PathBuf, ScrapeError> {
    let path = dir.join(filename);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| ScrapeError::Io {
            path: path.clone(),
            source,
        })?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

/// Saves a result record, logging instead of failing.
///
/// Persistence is best-effort: the caller's result is returned either way.
pub async fn persist_best_effort<T: Serialize + ?Sized>(value: &T, dir: &Path, filename: &str) -> bool {
    match save_json(value, dir, filename).await {
        Ok(path) => {
            log::info!("Saved {}", path.display());
            true
        }
        Err(e) => {
            log::error!("Error saving file: {e} ({})", e.error_type());
            false
        }
    }
}
