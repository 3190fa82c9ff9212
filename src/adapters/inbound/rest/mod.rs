//! REST adapter (inbound)
//!
//! Exposes the inbound ports as an HTTP API:
//! - `GET  /api/health` - liveness probe
//! - `POST /api/analyze-product` - run an analysis, returns the scored product
//! - `GET  /api/product/{product_id}` - one analyzed product
//! - `GET  /api/products` - recent products with paging
//! - `GET  /api/reviews/{product_id}` - stored reviews for a product
//! - `GET  /api/dashboard/analytics` - aggregate numbers for the dashboard

mod error;
mod handlers;
mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// CORS is wide open; the API is meant to sit behind whatever frontend
/// wants to call it.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/analyze-product", post(handlers::analyze_product))
        .route("/api/product/{product_id}", get(handlers::get_product))
        .route("/api/products", get(handlers::list_products))
        .route("/api/reviews/{product_id}", get(handlers::product_reviews))
        .route(
            "/api/dashboard/analytics",
            get(handlers::dashboard_analytics),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
