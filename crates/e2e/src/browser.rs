//! Browser and context lifecycle
//!
//! One browser process per test run, one isolated browsing context per
//! scenario. Teardown never propagates: close failures are logged and
//! swallowed so they cannot mask the scenario's own verdict.

use std::path::{Path, PathBuf};

use chrono::Local;
use playwright::api::browser_type::RecordVideo;
use playwright::api::{Browser, BrowserContext, Page, Viewport};
use playwright::Playwright;
use tracing::{debug, info, warn};

use crate::error::{HarnessError, HarnessResult};
use crate::report::{SCREENSHOT_DIR, VIDEO_DIR};

/// Element-level wait bound. Shorter than [`NAV_TIMEOUT_MS`] so element
/// waits fail before navigation waits do.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Navigation-level wait bound.
pub const NAV_TIMEOUT_MS: u64 = 45_000;

const VIEWPORT_WIDTH: i32 = 1920;
const VIEWPORT_HEIGHT: i32 = 1080;
const CI_LAUNCH_TIMEOUT_MS: f64 = 90_000.0;
const LOCAL_SLOW_MO_MS: f64 = 500.0;

/// Browser engine under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Engine {
    /// Parse an engine name; anything unrecognized falls back to chromium.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "firefox" => Engine::Firefox,
            "webkit" => Engine::Webkit,
            _ => Engine::Chromium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Chromium => "chromium",
            Engine::Firefox => "firefox",
            Engine::Webkit => "webkit",
        }
    }
}

/// Resolved launch configuration for one test run.
///
/// CI runs are forced headless with stability arguments; local runs get a
/// maximized window and slow-motion delays for human observation.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub engine: Engine,
    pub headless: bool,
    pub ci: bool,
}

impl LaunchProfile {
    /// Resolve the profile from CLI flags and the environment.
    ///
    /// `BROWSER` overrides the engine flag, `HEADLESS` overrides the
    /// headless flag, and CI detection (`CI`/`GITHUB_ACTIONS`) forces
    /// headless regardless of either.
    pub fn resolve(engine_flag: &str, headless_flag: bool) -> Self {
        let ci = detect_ci(
            std::env::var("CI").ok().as_deref(),
            std::env::var("GITHUB_ACTIONS").ok().as_deref(),
        );
        let engine = resolve_engine(engine_flag, std::env::var("BROWSER").ok().as_deref());
        let headless = resolve_headless(
            headless_flag,
            std::env::var("HEADLESS").ok().as_deref(),
            ci,
        );
        Self { engine, headless, ci }
    }

    /// Video recording is a local-only diagnostic; CI skips it for
    /// storage cost.
    pub fn record_video(&self) -> bool {
        !self.ci
    }

    fn launch_args(&self) -> Vec<String> {
        let args: &[&str] = if self.ci {
            &["--no-sandbox", "--disable-dev-shm-usage", "--disable-gpu"]
        } else {
            &["--start-maximized"]
        };
        args.iter().map(|s| s.to_string()).collect()
    }

    fn slow_mo_ms(&self) -> Option<f64> {
        if self.headless || self.ci {
            None
        } else {
            Some(LOCAL_SLOW_MO_MS)
        }
    }
}

fn detect_ci(ci: Option<&str>, github_actions: Option<&str>) -> bool {
    let truthy = |v: Option<&str>| v.map(|s| s.eq_ignore_ascii_case("true")).unwrap_or(false);
    truthy(ci) || truthy(github_actions)
}

fn resolve_engine(flag: &str, env: Option<&str>) -> Engine {
    Engine::parse(env.unwrap_or(flag))
}

fn resolve_headless(flag: bool, env: Option<&str>, ci: bool) -> bool {
    let env_headless = env
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false);
    flag || env_headless || ci
}

/// One browser process, owned by the test run.
pub struct Session {
    // Held for the lifetime of the run; dropping it tears down the driver.
    #[allow(dead_code)]
    playwright: Playwright,
    browser: Browser,
    profile: LaunchProfile,
}

impl Session {
    /// Initialize the driver and launch the selected engine.
    pub async fn launch(profile: LaunchProfile) -> HarnessResult<Self> {
        let playwright = Playwright::initialize()
            .await
            .map_err(|e| HarnessError::Lifecycle(format!("Playwright init failed: {}", e)))?;
        playwright
            .prepare()
            .map_err(|e| HarnessError::Lifecycle(format!("driver install failed: {}", e)))?;

        let browser_type = match profile.engine {
            Engine::Chromium => playwright.chromium(),
            Engine::Firefox => playwright.firefox(),
            Engine::Webkit => playwright.webkit(),
        };

        info!(
            "Launching {} (headless: {}, ci: {})",
            profile.engine.as_str(),
            profile.headless,
            profile.ci
        );

        let args = profile.launch_args();
        let mut launcher = browser_type
            .launcher()
            .headless(profile.headless)
            .args(&args);
        if profile.ci {
            launcher = launcher.timeout(CI_LAUNCH_TIMEOUT_MS);
        }
        if let Some(ms) = profile.slow_mo_ms() {
            launcher = launcher.slowmo(ms);
        }

        let browser = launcher
            .launch()
            .await
            .map_err(|e| HarnessError::Lifecycle(format!("browser launch failed: {}", e)))?;

        Ok(Self {
            playwright,
            browser,
            profile,
        })
    }

    pub fn profile(&self) -> &LaunchProfile {
        &self.profile
    }

    /// Open an isolated context plus page for one scenario.
    ///
    /// Deterministic viewport, explicit locale and timezone, SSL-error
    /// tolerance. No cookies or storage are shared with any other
    /// scenario.
    pub async fn open_context(&self) -> HarnessResult<ScenarioContext> {
        let video_dir = PathBuf::from(VIDEO_DIR);
        let mut builder = self
            .browser
            .context_builder()
            .viewport(Some(Viewport {
                width: VIEWPORT_WIDTH,
                height: VIEWPORT_HEIGHT,
            }))
            .locale("en-US")
            .timezone_id("Etc/UTC")
            .ignore_https_errors(true);
        if self.profile.record_video() {
            if let Err(e) = std::fs::create_dir_all(&video_dir) {
                warn!("Could not create video dir {}: {}", video_dir.display(), e);
            }
            builder = builder.record_video(RecordVideo {
                dir: &video_dir,
                size: None,
            });
        }

        let context = builder
            .build()
            .await
            .map_err(|e| HarnessError::Lifecycle(format!("context open failed: {}", e)))?;
        let page = context
            .new_page()
            .await
            .map_err(|e| HarnessError::Lifecycle(format!("page open failed: {}", e)))?;

        debug!("Opened isolated browser context");
        Ok(ScenarioContext { context, page })
    }

    /// Close the browser at run end. Never propagates.
    pub async fn shutdown(&self) {
        if let Err(e) = self.browser.close().await {
            warn!("Browser close failed: {}", e);
        }
    }
}

/// One isolated browsing context plus page, owned by a single scenario.
pub struct ScenarioContext {
    context: BrowserContext,
    page: Page,
}

impl ScenarioContext {
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Capture a failure screenshot named after the scenario. Best
    /// effort: a capture failure is logged and ignored, never escalated.
    pub async fn capture_failure(&self, scenario: &str) -> Option<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let path = Path::new(SCREENSHOT_DIR).join(failure_screenshot_name(scenario, &timestamp));
        if let Err(e) = std::fs::create_dir_all(SCREENSHOT_DIR) {
            warn!("Could not create screenshot dir: {}", e);
            return None;
        }
        match self
            .page
            .screenshot_builder()
            .path(path.clone())
            .screenshot()
            .await
        {
            Ok(_) => {
                info!("Captured failure screenshot: {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Failure screenshot for '{}' failed: {}", scenario, e);
                None
            }
        }
    }

    /// Close the context on every exit path. Never propagates.
    pub async fn close(&self) {
        if let Err(e) = self.context.close().await {
            warn!("Context close failed: {}", e);
        }
    }
}

/// `failed_<scenario>_<timestamp>.png`, with the scenario name reduced
/// to filename-safe characters.
pub fn failure_screenshot_name(scenario: &str, timestamp: &str) -> String {
    let safe: String = scenario
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("failed_{}_{}.png", safe, timestamp)
}
