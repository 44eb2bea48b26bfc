use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rust_decimal::Decimal;

use crate::{
    model::{
        api::ErrorDto,
        order::{
            payment_method_label, status_label, CoordinatesDto, ManagerOrderDto,
            MatchedRestaurantDto, OrderCreatedDto, OrderPayload,
        },
    },
    server::{
        data::order::OrderRepository,
        error::Error,
        geocoder::Coordinates,
        model::app::AppState,
        service::{geocode::GeocodeService, matching::MatchingService, order::OrderService},
    },
};

pub static ORDER_TAG: &str = "order";

fn coordinates_dto(coordinates: &Coordinates) -> CoordinatesDto {
    CoordinatesDto {
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
    }
}

/// Register a new order
#[utoipa::path(
    post,
    path = "/api/order",
    tag = ORDER_TAG,
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Success when registering the order", body = OrderCreatedDto),
        (status = 400, description = "A payload field failed validation; the body maps the field name to its error"),
        (status = 404, description = "An order line references an unknown product", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<impl IntoResponse, Error> {
    let order_service = OrderService::new(&state.db);

    let order = order_service.register(payload).await?;

    Ok((StatusCode::OK, Json(OrderCreatedDto { id: order.id })).into_response())
}

/// List unprocessed orders with the restaurants able to fulfill each of them
///
/// Delivery and restaurant addresses are resolved through the geocode cache; an address
/// that cannot be geocoded simply carries no coordinates.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Success when listing unprocessed orders", body = Vec<ManagerOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let order_repo = OrderRepository::new(&state.db);
    let matching_service = MatchingService::new(&state.db);
    let geocode_service = GeocodeService::new(&state.db, &state.geocoder);

    let orders = order_repo.get_unprocessed().await?;
    let mut matches = matching_service.match_orders(&orders).await?;

    let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
    let lines = order_repo.get_lines_by_order_ids(order_ids).await?;

    let mut totals: HashMap<i32, Decimal> = HashMap::new();
    for line in lines {
        *totals.entry(line.order_id).or_default() += line.cost;
    }

    // One geocoding batch covering every delivery and matched restaurant address
    let mut addresses: Vec<String> = orders.iter().map(|order| order.address.clone()).collect();
    addresses.extend(
        matches
            .values()
            .flatten()
            .map(|restaurant| restaurant.address.clone()),
    );
    let coordinates = geocode_service.resolve(addresses).await?;

    let order_dtos: Vec<ManagerOrderDto> = orders
        .into_iter()
        .map(|order| {
            let restaurants = matches
                .remove(&order.id)
                .unwrap_or_default()
                .into_iter()
                .map(|restaurant| {
                    let restaurant_coordinates =
                        coordinates.get(&restaurant.address).map(coordinates_dto);

                    MatchedRestaurantDto {
                        id: restaurant.id,
                        name: restaurant.name,
                        address: restaurant.address,
                        coordinates: restaurant_coordinates,
                    }
                })
                .collect();

            let order_coordinates = coordinates.get(&order.address).map(coordinates_dto);

            ManagerOrderDto {
                id: order.id,
                firstname: order.firstname,
                lastname: order.lastname,
                phonenumber: order.phonenumber,
                address: order.address,
                status: status_label(&order.status).to_string(),
                payment_method: payment_method_label(&order.payment_method).to_string(),
                comment: order.comment,
                total_cost: totals.get(&order.id).copied().unwrap_or_default(),
                coordinates: order_coordinates,
                restaurants,
            }
        })
        .collect();

    Ok((StatusCode::OK, Json(order_dtos)).into_response())
}
