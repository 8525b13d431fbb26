//! Storefront E2E Test Harness
//!
//! This crate provides the reusable harness behind the BDD test suite:
//! - Loads the YAML settings file once per process
//! - Owns the browser/context lifecycle (one browser per run, one
//!   isolated context per scenario, diagnostics on failure)
//! - Exposes the Page Object layer over a live Playwright page
//! - Dispatches CLI modes to tag filters and report names
//! - Collects scenario outcomes into an HTML report
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 E2E Test Binary (cucumber)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Mode (dispatch)                                            │
//! │    └── tag filter + report path                             │
//! │  Session (browser)                                          │
//! │    ├── launch(profile) -> Browser                           │
//! │    └── open_context() -> ScenarioContext (per scenario)     │
//! │  Page Objects (pages)                                       │
//! │    ├── PageActions: navigate/click/fill/get_text/           │
//! │    │                is_visible/wait_for/assert_*/screenshot │
//! │    ├── LoginPage                                            │
//! │    └── ProductsPage                                         │
//! │  ReportCollector (report)                                   │
//! │    └── write_html(path, meta)                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod browser;
pub mod dispatch;
pub mod error;
pub mod pages;
pub mod report;
pub mod settings;

pub use browser::{Engine, LaunchProfile, ScenarioContext, Session};
pub use dispatch::Mode;
pub use error::{HarnessError, HarnessResult, PageError, PageResult, SettingsError};
pub use pages::{LoginPage, PageActions, ProductsPage};
pub use report::{ReportCollector, ReportMeta, ScenarioOutcome};
pub use settings::Settings;
