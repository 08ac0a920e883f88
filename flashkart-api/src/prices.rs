use axum::{extract::State, routing::post, Json, Router};
use flashkart_catalog::{
    BasketComparison, BasketLine, CatalogEntry, PricedProduct, StorePolicy,
};
use serde::Deserialize;

use crate::{error::AppError, response::ApiResponse, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub entry: CatalogEntry,
    /// Store table to price against; the active table when absent.
    pub policies: Option<Vec<StorePolicy>>,
}

#[derive(Debug, Deserialize)]
pub struct BasketRequest {
    pub lines: Vec<BasketLine>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/prices/synthesize", post(synthesize_price))
        .route("/v1/basket/compare", post(compare_basket))
}

/// POST /v1/prices/synthesize
/// Price an ad-hoc entry without adding it to the catalog
async fn synthesize_price(
    State(state): State<AppState>,
    Json(req): Json<SynthesizeRequest>,
) -> Result<Json<ApiResponse<PricedProduct>>, AppError> {
    let policies = req
        .policies
        .as_deref()
        .unwrap_or_else(|| state.catalog.policies());

    let priced = state
        .synthesizer
        .synthesize(&req.entry, policies)
        .map_err(AppError::pricing)?;

    Ok(Json(ApiResponse::new(priced)))
}

/// POST /v1/basket/compare
async fn compare_basket(
    State(state): State<AppState>,
    Json(req): Json<BasketRequest>,
) -> Result<Json<ApiResponse<BasketComparison>>, AppError> {
    let comparison = state.catalog.compare_basket(&req.lines).map_err(AppError::basket)?;

    tracing::debug!(
        lines = req.lines.len(),
        best_mix_total = comparison.best_mix_total,
        cheapest = ?comparison.cheapest_complete_store,
        "Compared basket"
    );
    Ok(Json(ApiResponse::new(comparison)))
}
