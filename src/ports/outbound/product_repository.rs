use async_trait::async_trait;

use crate::shared::Result;
use crate::trust_scoring::domain::{Product, Review};

/// ProductRepository port for storing and reading analyzed products
///
/// # Async Support
/// All methods are async. Implementations must be `Send + Sync` to
/// support concurrent access from API handlers.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a completed analysis as one atomic unit
    ///
    /// The product, its trust score and all gathered reviews are stored
    /// together; either everything lands or nothing does.
    ///
    /// # Arguments
    /// * `product` - The analyzed product; `trust_score` should be set
    /// * `reviews` - The reviews the analysis was based on
    async fn insert_analyzed(&self, product: &Product, reviews: &[Review]) -> Result<()>;

    /// Fetches a product (with its trust score) by id
    ///
    /// # Returns
    /// `None` when the id matches no stored product. Ids that are not
    /// valid UUIDs cannot match anything and also yield `None`.
    async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>>;

    /// Lists stored products, newest first
    ///
    /// # Arguments
    /// * `limit` - Maximum number of products to return
    /// * `offset` - Number of products to skip from the newest
    async fn list_recent(&self, limit: u32, offset: u32) -> Result<Vec<Product>>;

    /// Total number of stored products
    async fn count_products(&self) -> Result<u64>;
}
