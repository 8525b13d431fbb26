//! Page Object layer
//!
//! [`PageActions`] implements the shared wait/act/assert primitives once
//! over a single page handle; the concrete pages compose it with their
//! own locator tables instead of inheriting from a base class.

use std::path::{Path, PathBuf};

use playwright::api::{DocumentLoadState, Page};

use crate::browser::{DEFAULT_TIMEOUT_MS, NAV_TIMEOUT_MS};
use crate::error::{PageError, PageResult};
use crate::report::SCREENSHOT_DIR;

mod login;
mod products;

pub use login::LoginPage;
pub use products::{add_to_cart_locator, ProductsPage};

/// Non-throwing visibility probes use a short bound.
const VISIBILITY_PROBE_MS: u64 = 5_000;

/// Wait/act/assert primitives over one page handle.
pub struct PageActions {
    page: Page,
    timeout_ms: u64,
}

impl PageActions {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Load a URL and block until the network is idle.
    pub async fn navigate(&self, url: &str) -> PageResult<()> {
        self.page
            .goto_builder(url)
            .wait_until(DocumentLoadState::NetworkIdle)
            .timeout(NAV_TIMEOUT_MS as f64)
            .goto()
            .await
            .map_err(|e| PageError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Wait for a locator with the default bound.
    pub async fn wait_for(&self, locator: &str) -> PageResult<()> {
        self.wait_for_with_timeout(locator, self.timeout_ms).await
    }

    /// Wait for a locator with an explicit bound. Expiry surfaces as
    /// [`PageError::ElementNotFound`].
    pub async fn wait_for_with_timeout(&self, locator: &str, timeout_ms: u64) -> PageResult<()> {
        match self
            .page
            .wait_for_selector_builder(locator)
            .timeout(timeout_ms as f64)
            .wait_for_selector()
            .await
        {
            Ok(_) => Ok(()),
            Err(_) => Err(PageError::ElementNotFound {
                locator: locator.to_string(),
                timeout_ms,
            }),
        }
    }

    /// Wait for the locator, then click it.
    pub async fn click(&self, locator: &str) -> PageResult<()> {
        self.wait_for(locator).await?;
        self.page
            .click_builder(locator)
            .click()
            .await
            .map_err(|e| PageError::Driver {
                locator: locator.to_string(),
                reason: e.to_string(),
            })
    }

    /// Wait for the locator, then fill it with text.
    pub async fn fill(&self, locator: &str, text: &str) -> PageResult<()> {
        self.wait_for(locator).await?;
        self.page
            .fill_builder(locator, text)
            .fill()
            .await
            .map_err(|e| PageError::Driver {
                locator: locator.to_string(),
                reason: e.to_string(),
            })
    }

    /// Wait for the locator, then read its inner text.
    pub async fn get_text(&self, locator: &str) -> PageResult<String> {
        self.wait_for(locator).await?;
        self.page
            .inner_text(locator, None)
            .await
            .map_err(|e| PageError::Driver {
                locator: locator.to_string(),
                reason: e.to_string(),
            })
    }

    /// Non-throwing probe with a short bound. Any failure, including a
    /// wait expiry, reads as "not visible".
    pub async fn is_visible(&self, locator: &str) -> bool {
        if self
            .wait_for_with_timeout(locator, VISIBILITY_PROBE_MS)
            .await
            .is_err()
        {
            return false;
        }
        match self.page.query_selector(locator).await {
            Ok(Some(element)) => element.is_visible().await.unwrap_or(false),
            _ => false,
        }
    }

    /// Number of elements currently matching the locator.
    pub async fn count(&self, locator: &str) -> PageResult<usize> {
        self.page
            .query_selector_all(locator)
            .await
            .map(|elements| elements.len())
            .map_err(|e| PageError::Driver {
                locator: locator.to_string(),
                reason: e.to_string(),
            })
    }

    /// Hard assertion: the text must become visible somewhere on the page.
    pub async fn assert_text_present(&self, text: &str) {
        let locator = format!("text={}", text);
        if self.wait_for(&locator).await.is_err() {
            panic!(
                "Expected text {:?} to be visible on the page, but it never appeared",
                text
            );
        }
    }

    /// Hard assertion: the element's text must contain the expected
    /// substring. Fails with expected and actual values.
    pub async fn assert_element_text(&self, locator: &str, expected: &str) {
        match self.get_text(locator).await {
            Ok(actual) if actual.contains(expected) => {}
            Ok(actual) => panic!(
                "Text mismatch on {}: expected substring {:?}, actual {:?}",
                locator, expected, actual
            ),
            Err(e) => panic!(
                "Could not read {} while asserting text {:?}: {}",
                locator, expected, e
            ),
        }
    }

    /// Save a full-page screenshot under the screenshots directory.
    pub async fn screenshot(&self, name: &str) -> PageResult<PathBuf> {
        std::fs::create_dir_all(SCREENSHOT_DIR)
            .map_err(|e| PageError::Screenshot(e.to_string()))?;
        let path = Path::new(SCREENSHOT_DIR).join(format!("{}.png", name));
        self.page
            .screenshot_builder()
            .path(path.clone())
            .screenshot()
            .await
            .map_err(|e| PageError::Screenshot(e.to_string()))?;
        Ok(path)
    }
}
