//! Error type definitions.

use std::error::Error as StdError;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::utils::sanitize_and_truncate_error_message;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The supplied configuration is unusable.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigValidationError),
}

/// Failures inside a single scraping operation.
///
/// These never cross the operation boundary as `Err`; they are rendered into
/// `Outcome::Failure` with a context prefix.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Request could not be sent, timed out, or returned a non-success
    /// status where one is required.
    #[error("{0}")]
    Http(#[from] ReqwestError),

    /// Writing a result or document to disk failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serializing a result record failed.
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL could not be built from the configured base and a path or link.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ScrapeError {
    /// Category used in log lines.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ScrapeError::Http(e) => super::categorize_reqwest_error(e),
            ScrapeError::Io { .. } => ErrorType::FileWriteError,
            ScrapeError::Json(_) => ErrorType::SerializationError,
            ScrapeError::InvalidUrl(_) => ErrorType::InvalidUrlError,
        }
    }
}

/// Result of an operation as it is handed to callers and serialized.
///
/// Untagged, so a success serializes as the bare record and a failure as
/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    /// The operation completed; absence of data is represented inside `T`.
    Success(T),
    /// The operation failed at the transport or persistence level.
    Failure {
        /// `<context>: <message>`
        error: String,
    },
}

impl<T> Outcome<T> {
    /// Builds a failure with the operation's context prefix.
    pub fn failure(context: &str, err: &ScrapeError) -> Self {
        Outcome::Failure {
            error: sanitize_and_truncate_error_message(&format!(
                "{context}: {}",
                error_chain_message(err)
            )),
        }
    }

    /// The success value, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// The error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { error } => Some(error),
        }
    }
}

/// Joins an error and its sources with `": "`.
///
/// reqwest's own message stops at "error sending request"; the refused
/// connection or timeout lives further down the chain. A source whose text
/// is already part of the message is skipped.
pub(crate) fn error_chain_message(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = cause.source();
    }
    message
}

/// Categories of failures seen while talking to the portal or writing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Specific HTTP status code errors
    HttpRequestForbidden,           // 403, usually anti-automation
    HttpRequestNotFound,            // 404
    HttpRequestInternalServerError, // 500
    HttpRequestBadGateway,          // 502
    HttpRequestServiceUnavailable,  // 503
    HttpRequestStatusError,         // any other non-success status
    // Local errors
    FileWriteError,
    SerializationError,
    InvalidUrlError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::FileWriteError => "File write error",
            ErrorType::SerializationError => "Serialization error",
            ErrorType::InvalidUrlError => "Invalid URL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_success_serializes_bare() {
        #[derive(Serialize)]
        struct Record {
            ok: bool,
        }
        let outcome = Outcome::Success(Record { ok: true });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true }));
    }

    #[test]
    fn test_outcome_failure_serializes_error_field() {
        let outcome: Outcome<()> = Outcome::Failure {
            error: "CNR search failed: timed out".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "CNR search failed: timed out" })
        );
        assert_eq!(outcome.error(), Some("CNR search failed: timed out"));
        assert!(outcome.success().is_none());
    }

    #[test]
    fn test_io_error_message_names_path() {
        let err = ScrapeError::Io {
            path: PathBuf::from("out/case.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/case.pdf"));
        assert!(msg.contains("denied"));
        assert_eq!(err.error_type(), ErrorType::FileWriteError);
    }

    #[test]
    fn test_error_chain_includes_root_cause() {
        #[derive(Debug, Error)]
        #[error("error sending request")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(
            error_chain_message(&err),
            "error sending request: Connection refused"
        );
    }

    #[test]
    fn test_error_chain_skips_repeated_source_text() {
        let err = ScrapeError::Io {
            path: PathBuf::from("case.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error_chain_message(&err);
        assert_eq!(message.matches("denied").count(), 1);

        let outcome: Outcome<()> = Outcome::failure("Cause list download failed", &err);
        assert_eq!(
            outcome.error(),
            Some("Cause list download failed: failed to write case.json: denied")
        );
    }
}
