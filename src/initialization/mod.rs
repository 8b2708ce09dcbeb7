//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - The pooled HTTP client (timeout, redirect cap, identifying header)
//! - The logger (plain or JSON)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Loads a `.env` file so `ECOURTS_*` variables need not be exported by hand.
///
/// Tries the current directory first, then the directory of the executable.
/// A missing file is not an error.
pub fn load_env_file() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
            }
        }
    }
}
