//! Login page object

use playwright::api::Page;

use super::PageActions;
use crate::error::PageResult;

const USERNAME_INPUT: &str = "[data-test='username']";
const PASSWORD_INPUT: &str = "[data-test='password']";
const LOGIN_BUTTON: &str = "[data-test='login-button']";
const ERROR_MESSAGE: &str = "[data-test='error']";

pub struct LoginPage {
    actions: PageActions,
}

impl LoginPage {
    pub fn new(page: Page) -> Self {
        Self {
            actions: PageActions::new(page),
        }
    }

    pub fn actions(&self) -> &PageActions {
        &self.actions
    }

    /// Navigate to the login page.
    pub async fn open(&self, base_url: &str) -> PageResult<()> {
        self.actions.navigate(base_url).await
    }

    pub async fn enter_username(&self, username: &str) -> PageResult<()> {
        self.actions.fill(USERNAME_INPUT, username).await
    }

    pub async fn enter_password(&self, password: &str) -> PageResult<()> {
        self.actions.fill(PASSWORD_INPUT, password).await
    }

    pub async fn click_login(&self) -> PageResult<()> {
        self.actions.click(LOGIN_BUTTON).await
    }

    /// Complete login flow.
    pub async fn login(&self, username: &str, password: &str) -> PageResult<()> {
        self.enter_username(username).await?;
        self.enter_password(password).await?;
        self.click_login().await
    }

    /// Error banner text, or the empty string when no error is shown.
    pub async fn error_message(&self) -> PageResult<String> {
        if self.actions.is_visible(ERROR_MESSAGE).await {
            self.actions.get_text(ERROR_MESSAGE).await
        } else {
            Ok(String::new())
        }
    }

    /// A successful login lands on a page with the "Products" heading.
    pub async fn assert_login_succeeded(&self) {
        self.actions.assert_text_present("Products").await;
    }

    /// Structural readiness: all three core controls are visible.
    pub async fn is_loaded(&self) -> bool {
        self.actions.is_visible(USERNAME_INPUT).await
            && self.actions.is_visible(PASSWORD_INPUT).await
            && self.actions.is_visible(LOGIN_BUTTON).await
    }
}
