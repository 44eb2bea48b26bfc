use mockito::{Server, ServerGuard};
use rust_decimal::Decimal;
use sea_orm::Database;

use crate::server::{
    data::catalog::{
        menu_item::MenuItemRepository, product::ProductRepository, restaurant::RestaurantRepository,
    },
    error::Error,
    geocoder::GeocoderClient,
    model::app::AppState,
};

pub static TEST_GEOCODER_API_KEY: &str = "test_api_key";

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: AppState,
}

// Returns [`AppState`] backed by an in-memory database, with the geocoder client pointed
// at a mock server, used across integration tests
pub async fn test_setup() -> TestSetup {
    let mock_server = Server::new_async().await;
    let geocoder = GeocoderClient::new(&mock_server.url(), TEST_GEOCODER_API_KEY);

    let db = Database::connect("sqlite::memory:").await.unwrap();

    let state = AppState { db, geocoder };

    TestSetup {
        server: mock_server,
        state,
    }
}

/// Inserts mock data for a restaurant
pub async fn test_setup_create_restaurant(
    test: &TestSetup,
    name: &str,
) -> Result<entity::restaurant::Model, Error> {
    let restaurant_repo = RestaurantRepository::new(&test.state.db);

    let restaurant = restaurant_repo
        .create(name, "Moscow, Lva Tolstogo 16", "+79991234567")
        .await?;

    Ok(restaurant)
}

/// Inserts mock data for a product without a category
pub async fn test_setup_create_product(
    test: &TestSetup,
    name: &str,
) -> Result<entity::product::Model, Error> {
    let product_repo = ProductRepository::new(&test.state.db);

    let price = Decimal::new(25050, 2);
    let product = product_repo
        .create(name, None, price, "products/pizza.jpg", false, "")
        .await?;

    Ok(product)
}

/// Inserts mock data for a menu item tying a product to a restaurant
pub async fn test_setup_create_menu_item(
    test: &TestSetup,
    restaurant_id: i32,
    product_id: i32,
    availability: bool,
) -> Result<entity::restaurant_menu_item::Model, Error> {
    let menu_item_repo = MenuItemRepository::new(&test.state.db);

    let menu_item = menu_item_repo
        .create(restaurant_id, product_id, availability)
        .await?;

    Ok(menu_item)
}
