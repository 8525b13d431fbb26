//! Authentication step definitions

use cucumber::{given, then, when};

use storefront_e2e::{LoginPage, ProductsPage, Settings};

use crate::world::ShopWorld;

#[given("user is on Login Page")]
async fn user_is_on_login_page(world: &mut ShopWorld) {
    let login_page = LoginPage::new(world.page());
    let base_url = Settings::global().login_page_url();
    login_page
        .open(&base_url)
        .await
        .unwrap_or_else(|e| panic!("Could not open login page: {}", e));
    assert!(
        login_page.is_loaded().await,
        "Login page is not loaded properly"
    );
    world.login_page = Some(login_page);
}

#[when(expr = "user enters user name as {string} and password as {string}")]
async fn user_enters_credentials(world: &mut ShopWorld, username: String, password: String) {
    let login_page = world
        .login_page
        .as_ref()
        .expect("login page opened by a prior step");
    login_page
        .enter_username(&username)
        .await
        .unwrap_or_else(|e| panic!("Could not enter username: {}", e));
    login_page
        .enter_password(&password)
        .await
        .unwrap_or_else(|e| panic!("Could not enter password: {}", e));
}

#[when("click Login Button")]
async fn click_login_button(world: &mut ShopWorld) {
    let login_page = world
        .login_page
        .as_ref()
        .expect("login page opened by a prior step");
    login_page
        .click_login()
        .await
        .unwrap_or_else(|e| panic!("Could not click login button: {}", e));

    // The next steps act on the products page.
    world.products_page = Some(ProductsPage::new(world.page()));
}

#[then(expr = "verify page has text {string}")]
async fn verify_page_has_text(world: &mut ShopWorld, text: String) {
    let products_page = world
        .products_page
        .as_ref()
        .expect("products page reached by a prior step");
    products_page.actions().assert_text_present(&text).await;
}

#[then(expr = "login error message contains {string}")]
async fn login_error_message_contains(world: &mut ShopWorld, expected: String) {
    let login_page = world
        .login_page
        .as_ref()
        .expect("login page opened by a prior step");
    let actual = login_page
        .error_message()
        .await
        .unwrap_or_else(|e| panic!("Could not read login error message: {}", e));
    assert!(
        actual.contains(&expected),
        "Expected login error containing {:?}, actual {:?}",
        expected,
        actual
    );
}

#[when("user logs out")]
async fn user_logs_out(world: &mut ShopWorld) {
    let products_page = world
        .products_page
        .as_ref()
        .expect("products page reached by a prior step");
    products_page
        .logout()
        .await
        .unwrap_or_else(|e| panic!("Could not log out: {}", e));
}

#[then("the login form is displayed")]
async fn login_form_is_displayed(world: &mut ShopWorld) {
    let login_page = LoginPage::new(world.page());
    assert!(
        login_page.is_loaded().await,
        "Login form did not reappear after logout"
    );
}
