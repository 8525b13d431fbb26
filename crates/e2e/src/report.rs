//! Scenario outcome collection and HTML reporting
//!
//! The collector accumulates one entry per scenario from the runner's
//! after-hook; the counters decide the process exit code and the HTML
//! document is the diagnosis artifact. Rendering failures are logged and
//! ignored, never escalated into the verdict.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{info, warn};

use crate::error::{HarnessError, HarnessResult};

pub const SCREENSHOT_DIR: &str = "reports/screenshots";
pub const VIDEO_DIR: &str = "reports/videos";
pub const HTML_REPORT_DIR: &str = "reports/html";

pub const REPORT_TITLE: &str = "ECommerce Portal - Test Automation Report";

/// Create the conventioned artifact directories.
pub fn ensure_artifact_dirs() -> std::io::Result<()> {
    std::fs::create_dir_all(SCREENSHOT_DIR)?;
    std::fs::create_dir_all(VIDEO_DIR)?;
    std::fs::create_dir_all(HTML_REPORT_DIR)?;
    Ok(())
}

/// One report entry per scenario.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub tags: Vec<String>,
    pub passed: bool,
    pub duration_ms: u64,
    pub screenshot: Option<PathBuf>,
}

/// Environment summary stamped into every report.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub application_url: String,
    pub browser: String,
    pub framework: String,
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self {
            application_url: "https://www.saucedemo.com/".to_string(),
            browser: "chromium".to_string(),
            framework: "Rust + Playwright + Cucumber".to_string(),
        }
    }
}

/// Accumulates scenario outcomes across a run.
#[derive(Default)]
pub struct ReportCollector {
    outcomes: Mutex<Vec<ScenarioOutcome>>,
}

impl ReportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: ScenarioOutcome) {
        match self.outcomes.lock() {
            Ok(mut outcomes) => outcomes.push(outcome),
            Err(_) => warn!("Outcome lock poisoned; dropping report entry"),
        }
    }

    pub fn passed(&self) -> usize {
        self.count(|o| o.passed)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| !o.passed)
    }

    fn count(&self, predicate: impl Fn(&ScenarioOutcome) -> bool) -> usize {
        self.outcomes
            .lock()
            .map(|outcomes| outcomes.iter().filter(|o| predicate(o)).count())
            .unwrap_or(0)
    }

    /// Render and write the HTML report.
    pub fn write_html(&self, path: &Path, meta: &ReportMeta) -> HarnessResult<()> {
        let outcomes = self
            .outcomes
            .lock()
            .map_err(|_| HarnessError::Report("outcome lock poisoned".to_string()))?;
        let html = render_html(&outcomes, meta);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, html)?;
        info!("Report written to: {}", path.display());
        Ok(())
    }
}

fn render_html(outcomes: &[ScenarioOutcome], meta: &ReportMeta) -> String {
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = outcomes.len() - passed;

    let mut rows = String::new();
    for outcome in outcomes {
        let status = if outcome.passed { "passed" } else { "failed" };
        let screenshot = outcome
            .screenshot
            .as_ref()
            .map(|p| {
                let shown = p.display().to_string();
                format!("<a href=\"../../{0}\">{0}</a>", escape_html(&shown))
            })
            .unwrap_or_default();
        rows.push_str(&format!(
            "<tr class=\"{status}\"><td>{name}</td><td>{tags}</td><td>{status}</td>\
             <td>{duration} ms</td><td>{screenshot}</td></tr>\n",
            status = status,
            name = escape_html(&outcome.name),
            tags = escape_html(&outcome.tags.join(", ")),
            duration = outcome.duration_ms,
            screenshot = screenshot,
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 2em; }}\n\
         table {{ border-collapse: collapse; margin-bottom: 2em; }}\n\
         td, th {{ border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }}\n\
         tr.passed td:nth-child(3) {{ color: #1a7f37; }}\n\
         tr.failed td:nth-child(3) {{ color: #cf222e; }}\n\
         </style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n\
         <h2>Test Environment Information</h2>\n\
         <table>\n\
         <tr><td>Application URL</td><td>{url}</td></tr>\n\
         <tr><td>Browser</td><td>{browser}</td></tr>\n\
         <tr><td>Test Framework</td><td>{framework}</td></tr>\n\
         </table>\n\
         <h2>Results: {passed} passed, {failed} failed</h2>\n\
         <table>\n\
         <tr><th>Scenario</th><th>Tags</th><th>Status</th><th>Duration</th><th>Screenshot</th></tr>\n\
         {rows}\
         </table>\n</body>\n</html>\n",
        title = REPORT_TITLE,
        url = escape_html(&meta.application_url),
        browser = escape_html(&meta.browser),
        framework = escape_html(&meta.framework),
        passed = passed,
        failed = failed,
        rows = rows,
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
