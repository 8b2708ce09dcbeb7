//! Local persistence of results and documents.
//!
//! Everything is written under the configured output directory:
//! - `case_result_<YYYYMMDD_HHMMSS>.json` for each search
//! - `causelist_<YYYYMMDD>.json` for each cause-list fetch (same-day reruns overwrite)
//! - downloaded documents, raw bytes

mod files;

pub use files::{
    case_result_filename, cause_list_filename, document_filename, persist_best_effort,
    save_bytes, save_json,
};
