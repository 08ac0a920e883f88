use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use flashkart_catalog::{PricedProduct, StorePolicy};
use serde::Deserialize;

use crate::{error::AppError, response::ApiResponse, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/stores", get(list_stores))
        .route("/v1/products", get(list_products))
        .route("/v1/products/{id}", get(get_product))
}

/// GET /v1/stores
async fn list_stores(State(state): State<AppState>) -> Json<ApiResponse<Vec<StorePolicy>>> {
    Json(ApiResponse::new(state.catalog.policies().to_vec()))
}

/// GET /v1/products?category=
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<Vec<PricedProduct>>> {
    let products: Vec<PricedProduct> = match query.category.as_deref() {
        Some(category) => state.catalog.by_category(category).cloned().collect(),
        None => state.catalog.products().to_vec(),
    };

    tracing::debug!(count = products.len(), category = ?query.category, "Listing priced products");
    Json(ApiResponse::new(products))
}

/// GET /v1/products/{id}
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PricedProduct>>, AppError> {
    let product = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFoundError(format!("Product not found: {}", id)))?;

    Ok(Json(ApiResponse::new(product)))
}
