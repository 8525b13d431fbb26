//! CLI mode dispatch
//!
//! Maps the runner's command-line token to a predicate over scenario
//! tags and a report filename.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::report::HTML_REPORT_DIR;

/// Which tagged scenario subset to execute, and under which report name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Auth,
    Smoke,
    All,
    Tag(String),
}

impl Mode {
    /// Parse a dispatch token. Unknown tokens are rejected so the caller
    /// can print usage and exit without running anything.
    pub fn parse(token: &str) -> Option<Mode> {
        match token.to_ascii_lowercase().as_str() {
            "auth" => Some(Mode::Auth),
            "smoke" => Some(Mode::Smoke),
            "all" => Some(Mode::All),
            t => {
                let name = t.strip_prefix("tag:")?;
                if name.is_empty() {
                    None
                } else {
                    Some(Mode::Tag(name.to_string()))
                }
            }
        }
    }

    /// The tag this mode selects on, if any. `All` runs everything.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Mode::Auth => Some("auth"),
            Mode::Smoke => Some("smoke"),
            Mode::All => None,
            Mode::Tag(name) => Some(name),
        }
    }

    /// True when a scenario carrying `tags` is selected by this mode.
    pub fn selects<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> bool {
        match self.tag() {
            None => true,
            Some(want) => tags.into_iter().any(|tag| tag == want),
        }
    }

    /// Report path for this mode. The fixed modes keep fixed names;
    /// ad-hoc tag runs get a timestamped name so repeated runs do not
    /// overwrite each other.
    pub fn report_path(&self, now: DateTime<Local>) -> PathBuf {
        let name = match self {
            Mode::Auth => "auth_report.html".to_string(),
            Mode::Smoke => "smoke_report.html".to_string(),
            Mode::All => "full_report.html".to_string(),
            Mode::Tag(tag) => format!("{}_report_{}.html", tag, now.format("%Y%m%d_%H%M%S")),
        };
        Path::new(HTML_REPORT_DIR).join(name)
    }

    pub fn usage() -> &'static str {
        "Usage: e2e [auth|smoke|all|tag:<name>] [--browser <chromium|firefox|webkit>] [--headless]"
    }
}
