use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::{OrderStatus, PaymentMethod};

/// One `{product, quantity}` entry of an order submission
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderLinePayload {
    /// Catalog id of the ordered product
    pub product: i32,
    pub quantity: i32,
}

/// Payment method accepted at order submission
#[derive(Serialize, Deserialize, Clone, Copy, utoipa::ToSchema)]
pub enum PaymentMethodDto {
    Cash,
    Electronic,
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(value: PaymentMethodDto) -> Self {
        match value {
            PaymentMethodDto::Cash => PaymentMethod::Cash,
            PaymentMethodDto::Electronic => PaymentMethod::Electronic,
        }
    }
}

/// An order submission payload
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderPayload {
    pub products: Vec<OrderLinePayload>,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: String,
    #[serde(default)]
    pub comment: Option<String>,
    /// Defaults to cash when omitted
    #[serde(default)]
    pub payment_method: Option<PaymentMethodDto>,
}

/// The response to a successful order submission
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct OrderCreatedDto {
    pub id: i32,
}

/// A resolved delivery coordinate pair
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CoordinatesDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// A restaurant able to fulfill every product of an order
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MatchedRestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// None when the restaurant address could not be geocoded
    pub coordinates: Option<CoordinatesDto>,
}

/// An unprocessed order as shown to managers
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ManagerOrderDto {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: String,
    pub status: String,
    pub payment_method: String,
    pub comment: String,
    pub total_cost: Decimal,
    /// None when the delivery address could not be geocoded
    pub coordinates: Option<CoordinatesDto>,
    pub restaurants: Vec<MatchedRestaurantDto>,
}

pub fn status_label(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Unprocessed => "Unprocessed",
        OrderStatus::Preparing => "Preparing",
        OrderStatus::Delivered => "Delivered",
        OrderStatus::Completed => "Completed",
    }
}

pub fn payment_method_label(payment_method: &PaymentMethod) -> &'static str {
    match payment_method {
        PaymentMethod::Cash => "Cash",
        PaymentMethod::Electronic => "Electronic",
    }
}
