//! Products page object

use playwright::api::Page;

use super::PageActions;
use crate::error::PageResult;

const PRODUCTS_HEADER: &str = ".title";
const PRODUCT_ITEMS: &str = ".inventory_item";
const CART_BADGE: &str = ".shopping_cart_badge";
const CART_LINK: &str = ".shopping_cart_link";
const MENU_BUTTON: &str = "#react-burger-menu-btn";
const LOGOUT_LINK: &str = "#logout_sidebar_link";

pub struct ProductsPage {
    actions: PageActions,
}

impl ProductsPage {
    pub fn new(page: Page) -> Self {
        Self {
            actions: PageActions::new(page),
        }
    }

    pub fn actions(&self) -> &PageActions {
        &self.actions
    }

    /// Hard assertion that the products page is loaded.
    pub async fn assert_loaded(&self) {
        if self.actions.wait_for(PRODUCTS_HEADER).await.is_err() {
            panic!(
                "Products page did not load: heading {} never appeared",
                PRODUCTS_HEADER
            );
        }
        self.actions
            .assert_element_text(PRODUCTS_HEADER, "Products")
            .await;
    }

    /// Number of product entries currently listed.
    pub async fn product_count(&self) -> PageResult<usize> {
        self.actions.count(PRODUCT_ITEMS).await
    }

    /// Add a product to the cart by its display name.
    pub async fn add_to_cart(&self, display_name: &str) -> PageResult<()> {
        self.actions.click(&add_to_cart_locator(display_name)).await
    }

    /// Cart badge count: 0 when the badge is absent or its text is not
    /// numeric, the parsed integer otherwise. Never fails.
    pub async fn cart_items_count(&self) -> u32 {
        if !self.actions.is_visible(CART_BADGE).await {
            return 0;
        }
        match self.actions.get_text(CART_BADGE).await {
            Ok(text) => parse_badge_count(&text),
            Err(_) => 0,
        }
    }

    pub async fn open_cart(&self) -> PageResult<()> {
        self.actions.click(CART_LINK).await
    }

    /// Open the menu, wait for the logout control, click it.
    pub async fn logout(&self) -> PageResult<()> {
        self.actions.click(MENU_BUTTON).await?;
        self.actions.wait_for(LOGOUT_LINK).await?;
        self.actions.click(LOGOUT_LINK).await
    }
}

/// Add-to-cart test id, derived from the display name by the target
/// application's convention: lowercase, spaces to hyphens.
pub fn add_to_cart_locator(display_name: &str) -> String {
    format!(
        "[data-test='add-to-cart-{}']",
        display_name.to_lowercase().replace(' ', "-")
    )
}

fn parse_badge_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}
