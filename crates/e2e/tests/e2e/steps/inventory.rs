//! Inventory and cart step definitions

use cucumber::{given, then, when};

use storefront_e2e::ProductsPage;

use crate::world::ShopWorld;

#[given("user is on products page")]
async fn user_is_on_products_page(world: &mut ShopWorld) {
    if world.products_page.is_none() {
        world.products_page = Some(ProductsPage::new(world.page()));
    }
    world
        .products_page
        .as_ref()
        .expect("just set")
        .assert_loaded()
        .await;
}

#[when("user views the product list")]
async fn user_views_product_list(world: &mut ShopWorld) {
    let products_page = world
        .products_page
        .as_ref()
        .expect("products page reached by a prior step");
    let count = products_page
        .product_count()
        .await
        .unwrap_or_else(|e| panic!("Could not count products: {}", e));
    world.product_count = Some(count);
}

#[then("user should see multiple products available")]
async fn multiple_products_available(world: &mut ShopWorld) {
    let count = world.product_count.unwrap_or(0);
    assert!(count > 1, "Expected multiple products, but found {}", count);
}

#[when(expr = "user adds {string} to cart")]
async fn user_adds_product_to_cart(world: &mut ShopWorld, product: String) {
    let products_page = world
        .products_page
        .as_ref()
        .expect("products page reached by a prior step");
    products_page
        .add_to_cart(&product)
        .await
        .unwrap_or_else(|e| panic!("Could not add {:?} to cart: {}", product, e));
}

#[then(expr = "cart should show {int} item(s)")]
async fn cart_shows_items(world: &mut ShopWorld, expected: u32) {
    let products_page = world
        .products_page
        .as_ref()
        .expect("products page reached by a prior step");
    let actual = products_page.cart_items_count().await;
    assert_eq!(
        actual, expected,
        "Expected {} item(s) in cart, but found {}",
        expected, actual
    );
}

#[when("user opens the cart")]
async fn user_opens_cart(world: &mut ShopWorld) {
    let products_page = world
        .products_page
        .as_ref()
        .expect("products page reached by a prior step");
    products_page
        .open_cart()
        .await
        .unwrap_or_else(|e| panic!("Could not open the cart: {}", e));
}
