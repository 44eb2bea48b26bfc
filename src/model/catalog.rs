use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product category as exposed by the catalog listing
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

/// A product currently available for ordering
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub special: bool,
    pub description: String,
    /// None when the product has no category
    pub category: Option<CategoryDto>,
    pub image: String,
}

impl ProductDto {
    pub fn from_model(
        product: entity::product::Model,
        category: Option<entity::product_category::Model>,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            special: product.special,
            description: product.description,
            category: category.map(|c| CategoryDto {
                id: c.id,
                name: c.name,
            }),
            image: product.image,
        }
    }
}
