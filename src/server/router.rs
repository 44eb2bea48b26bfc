//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger
//! UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/products` - List products currently available for ordering
/// - `POST /api/order` - Register a new order
/// - `GET /api/orders` - List unprocessed orders with matched restaurants and coordinates
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`, with interactive
/// documentation at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Foodcart", description = "Foodcart API"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Product catalog API routes"),
        (name = controller::order::ORDER_TAG, description = "Order API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::catalog::get_products))
        .routes(routes!(controller::order::register_order))
        .routes(routes!(controller::order::get_orders))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
