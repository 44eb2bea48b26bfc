use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, catalog::ProductDto},
    server::{
        data::catalog::{category::ProductCategoryRepository, product::ProductRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// List products currently available for ordering
#[utoipa::path(
    get,
    path = "/api/products",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing available products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let product_repo = ProductRepository::new(&state.db);
    let category_repo = ProductCategoryRepository::new(&state.db);

    let products = product_repo.get_available().await?;

    // Batch load the referenced categories rather than querying per product
    let category_ids: Vec<i32> = products
        .iter()
        .filter_map(|product| product.category_id)
        .collect();
    let categories: HashMap<i32, entity::product_category::Model> = category_repo
        .get_by_ids(category_ids)
        .await?
        .into_iter()
        .map(|category| (category.id, category))
        .collect();

    let product_dtos: Vec<ProductDto> = products
        .into_iter()
        .map(|product| {
            let category = product
                .category_id
                .and_then(|category_id| categories.get(&category_id).cloned());

            ProductDto::from_model(product, category)
        })
        .collect();

    Ok((StatusCode::OK, Json(product_dtos)).into_response())
}
