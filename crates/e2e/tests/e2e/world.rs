//! Shared per-scenario state
//!
//! `ShopWorld` is the cucumber world: one isolated browser context per
//! scenario plus the page objects and observations the steps hand each
//! other. The browser session itself is launched once, on the first
//! scenario, and shared across the run.

use std::fmt;
use std::time::Instant;

use cucumber::World;
use once_cell::sync::{Lazy, OnceCell};
use playwright::api::Page;
use tokio::sync::OnceCell as AsyncOnceCell;

use storefront_e2e::report::ReportCollector;
use storefront_e2e::{
    HarnessError, LaunchProfile, LoginPage, ProductsPage, ScenarioContext, ScenarioOutcome,
    Session,
};

/// Outcome sink for the HTML report, fed from the after-hook.
pub static REPORT: Lazy<ReportCollector> = Lazy::new(ReportCollector::new);

static PROFILE: OnceCell<LaunchProfile> = OnceCell::new();
static SESSION: AsyncOnceCell<Session> = AsyncOnceCell::const_new();

/// Pin the launch profile before the first scenario runs.
pub fn set_profile(profile: LaunchProfile) {
    let _ = PROFILE.set(profile);
}

fn profile() -> LaunchProfile {
    PROFILE
        .get()
        .cloned()
        .unwrap_or_else(|| LaunchProfile::resolve("chromium", false))
}

async fn session() -> Result<&'static Session, HarnessError> {
    SESSION
        .get_or_try_init(|| Session::launch(profile()))
        .await
}

/// Close the browser at run end. Never propagates.
pub async fn shutdown_session() {
    if let Some(session) = SESSION.get() {
        session.shutdown().await;
    }
}

#[derive(World)]
#[world(init = Self::new)]
pub struct ShopWorld {
    scenario: ScenarioContext,
    pub login_page: Option<LoginPage>,
    pub products_page: Option<ProductsPage>,
    pub product_count: Option<usize>,
    started: Instant,
}

impl ShopWorld {
    /// Open a fresh isolated context for this scenario. A lifecycle
    /// failure here fails the scenario, not the run.
    async fn new() -> Result<Self, HarnessError> {
        let session = session().await?;
        let scenario = session.open_context().await?;
        Ok(Self {
            scenario,
            login_page: None,
            products_page: None,
            product_count: None,
            started: Instant::now(),
        })
    }

    /// Handle on the scenario's page, for constructing page objects.
    pub fn page(&self) -> Page {
        self.scenario.page().clone()
    }

    /// After-hook tail: capture diagnostics on failure, record the
    /// outcome, and close the context on every exit path.
    pub async fn finish(&mut self, name: &str, tags: &[String], failed: bool) {
        let screenshot = if failed {
            self.scenario.capture_failure(name).await
        } else {
            None
        };
        REPORT.record(ScenarioOutcome {
            name: name.to_string(),
            tags: tags.to_vec(),
            passed: !failed,
            duration_ms: self.started.elapsed().as_millis() as u64,
            screenshot,
        });
        self.scenario.close().await;
    }
}

impl fmt::Debug for ShopWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopWorld")
            .field("login_page", &self.login_page.is_some())
            .field("products_page", &self.products_page.is_some())
            .field("product_count", &self.product_count)
            .finish()
    }
}
