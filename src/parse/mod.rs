//! Markup extraction.
//!
//! Pure functions from page markup to partial records:
//! - Anti-forgery token lookup
//! - Case-status row scan for a target date
//! - Cause-list table parsing
//!
//! The portal's markup is an uncontrolled source. Missing elements never
//! produce errors here, only `None`/`false` fields; html5ever recovers from
//! any malformed input, so none of these functions can fail.

mod case;
mod cause_list;
mod token;

use scraper::{ElementRef, Selector};

pub use case::parse_case_rows;
pub use cause_list::parse_cause_list;
pub use token::extract_csrf_token;

/// Parses a selector that is a compile-time constant.
///
/// # Panics
///
/// Panics if the selector cannot be parsed (a programming error).
pub(crate) fn static_selector(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!("Failed to parse CSS selector '{selector_str}': {e}. This is a programming error.")
    })
}

/// Concatenated text of every descendant text node, untrimmed.
pub(crate) fn cell_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}
