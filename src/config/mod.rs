//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (portal paths, timeouts, file naming)
//! - The library-level `ScraperConfig`
//! - Log level/format enums shared by both binaries

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ConfigValidationError, LogFormat, LogLevel, OutputFormat, ScraperConfig};
