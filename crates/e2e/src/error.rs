//! Error types for the E2E harness

use std::path::PathBuf;
use thiserror::Error;

/// Startup errors from the settings file. Fatal before any browser launch.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file not found at {0}")]
    NotFound(PathBuf),

    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error reading settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the browser/context lifecycle and the reporting glue.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Browser lifecycle error: {0}")]
    Lifecycle(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from page-level driver operations. Distinguishable from
/// assertion panics: a wait expiry is `ElementNotFound`, never a bare
/// assert message.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Element not found: {locator} (waited {timeout_ms} ms)")]
    ElementNotFound { locator: String, timeout_ms: u64 },

    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Driver error on {locator}: {reason}")]
    Driver { locator: String, reason: String },

    #[error("Screenshot failed: {0}")]
    Screenshot(String),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
pub type PageResult<T> = Result<T, PageError>;
