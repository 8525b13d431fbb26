//! Settings file loading
//!
//! Reads `config.yaml` once at process start into an immutable mapping.
//! Components read through named accessors rather than raw keys.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::OnceCell;
use serde_yaml::Value;
use tracing::info;

use crate::error::SettingsError;

/// Default settings path, relative to the workspace root.
pub const DEFAULT_SETTINGS_PATH: &str = "config.yaml";

const DEFAULT_LOGIN_PAGE_URL: &str = "https://www.saucedemo.com/";

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Immutable settings mapping, loaded once per process.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: BTreeMap<String, Value>,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let values: BTreeMap<String, Value> = serde_yaml::from_str(&raw)?;
        Ok(Self { values })
    }

    /// Load settings into the process-wide cell. Must run at startup,
    /// before any scenario; a missing or malformed file aborts the run.
    pub fn init(path: impl AsRef<Path>) -> Result<&'static Settings, SettingsError> {
        let path = path.as_ref();
        let settings = SETTINGS.get_or_try_init(|| {
            let loaded = Self::load(path)?;
            info!("Loaded settings from {}", path.display());
            Ok::<_, SettingsError>(loaded)
        })?;
        Ok(settings)
    }

    /// The shared instance. Falls back to built-in defaults when `init`
    /// has not run (unit tests); the test binary always initializes first.
    pub fn global() -> &'static Settings {
        SETTINGS.get_or_init(Settings::default)
    }

    /// Base URL of the login page.
    pub fn login_page_url(&self) -> String {
        self.value_or("login_page_base_url", DEFAULT_LOGIN_PAGE_URL)
    }

    /// Raw value for any key; unknown keys pass through untouched.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value for a key, or `default` when the key is absent or
    /// not a string. Never fails.
    pub fn value_or(&self, key: &str, default: &str) -> String {
        self.value(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }
}
