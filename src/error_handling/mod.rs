//! Error handling.
//!
//! This module provides:
//! - Error type definitions for start-up and scraping failures
//! - Categorization of transport errors for log output
//! - The `Outcome` shape returned by every operation
//!
//! Failures are split the same way throughout the crate:
//! - **Transport errors** are caught at the operation boundary and returned
//!   as `{"error": "<context>: <message>"}`
//! - **Missing data** in the markup is not an error; it shows up as
//!   `false`/`null` fields of a successful result
//! - **Persistence failures** are logged and swallowed

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ErrorType, InitializationError, Outcome, ScrapeError};
