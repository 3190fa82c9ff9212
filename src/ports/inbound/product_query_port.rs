use async_trait::async_trait;

use crate::application::dto::{ProductListing, ReviewListing};
use crate::shared::TrustLensError;
use crate::trust_scoring::domain::Product;

/// ProductQueryPort - Inbound port for reading analyzed products
///
/// Read-only lookups over previously analyzed products and their reviews.
#[async_trait]
pub trait ProductQueryPort: Send + Sync {
    /// Fetches a single analyzed product by id
    ///
    /// # Errors
    /// Returns `TrustLensError::ProductNotFound` when the id matches no
    /// stored product, including ids that are not valid UUIDs.
    async fn get_product(&self, product_id: &str) -> Result<Product, TrustLensError>;

    /// Lists analyzed products, newest first
    ///
    /// # Arguments
    /// * `limit` - Maximum number of products to return; defaults when absent
    /// * `offset` - Number of products to skip from the newest
    async fn list_products(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ProductListing, TrustLensError>;

    /// Lists the stored reviews for a product
    ///
    /// Unknown product ids yield an empty listing rather than an error.
    async fn product_reviews(&self, product_id: &str) -> Result<ReviewListing, TrustLensError>;
}
