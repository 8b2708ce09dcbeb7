//! Small string helpers shared by the operations and the adapters.

pub mod sanitize;

pub use sanitize::{sanitize_and_truncate_error_message, sanitize_document_filename};
