use async_trait::async_trait;

use crate::shared::Result;
use crate::trust_scoring::domain::Review;

/// ReviewRepository port for reading stored reviews
///
/// Reviews are written through `ProductRepository::insert_analyzed` as
/// part of an analysis; this port only reads them back.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fetches the stored reviews for a product, newest first
    ///
    /// # Returns
    /// The reviews found, capped at a storage-defined maximum. Unknown
    /// product ids yield an empty list.
    async fn reviews_for_product(&self, product_id: &str) -> Result<Vec<Review>>;
}
