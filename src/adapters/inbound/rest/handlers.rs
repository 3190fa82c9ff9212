use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::AppState;
use crate::application::dto::{
    AnalyzeProductRequest, DashboardAnalytics, ProductListing, ReviewListing,
};
use crate::trust_scoring::domain::Product;

/// Service identity reported by the health endpoint.
const SERVICE_NAME: &str = "Trust Lens API";

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Query parameters for the product listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// GET /api/health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// POST /api/analyze-product - Run a full analysis and return the scored product
///
/// The body is optional. Missing fields fall back to the sample-product
/// defaults so the endpoint can be exercised without real product data.
pub async fn analyze_product(
    State(state): State<AppState>,
    request: Option<Json<AnalyzeProductRequest>>,
) -> Result<Json<Product>, ApiError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let report = state.analyze.analyze(request).await?;
    Ok(Json(report.product))
}

/// GET /api/product/{product_id} - Fetch one analyzed product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state.queries.get_product(&product_id).await?;
    Ok(Json(product))
}

/// GET /api/products - List analyzed products, newest first
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ProductListing>, ApiError> {
    let listing = state
        .queries
        .list_products(params.limit, params.offset)
        .await?;
    Ok(Json(listing))
}

/// GET /api/reviews/{product_id} - Stored reviews for a product
///
/// Unknown ids return an empty listing rather than 404, so the endpoint
/// can be polled before an analysis has finished.
pub async fn product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ReviewListing>, ApiError> {
    let listing = state.queries.product_reviews(&product_id).await?;
    Ok(Json(listing))
}

/// GET /api/dashboard/analytics - Aggregate dashboard numbers
pub async fn dashboard_analytics(
    State(state): State<AppState>,
) -> Result<Json<DashboardAnalytics>, ApiError> {
    let analytics = state.dashboard.dashboard_analytics().await?;
    Ok(Json(analytics))
}
