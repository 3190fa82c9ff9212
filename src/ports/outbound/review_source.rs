use async_trait::async_trait;

use crate::shared::Result;
use crate::trust_scoring::domain::{Platform, Product, Review};
use uuid::Uuid;

/// What a review source needs to know about the product it is looking up.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSubject {
    /// Id the collected reviews will be attributed to.
    pub product_id: Uuid,
    /// Product name, already validated and defaulted.
    pub name: String,
    /// Listing URL if the submission carried one.
    pub url: Option<String>,
}

impl ReviewSubject {
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            url: product.url.clone(),
        }
    }
}

/// ReviewSource port for collecting reviews from one marketplace
///
/// Each implementation covers a single platform. The analysis use case
/// fans out over all configured sources concurrently, so a failing
/// source must not poison the others; its error is logged and skipped.
///
/// # Async Support
/// All methods are async for efficient parallel collection.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// The marketplace this source collects from
    fn platform(&self) -> Platform;

    /// Collects reviews for the given product
    ///
    /// # Arguments
    /// * `subject` - Product identity to look up reviews for
    ///
    /// # Returns
    /// The reviews found, possibly empty. Every returned review must
    /// carry `subject.product_id` and this source's platform.
    ///
    /// # Errors
    /// Returns an error if the marketplace cannot be reached or its
    /// response cannot be understood.
    async fn fetch_reviews(&self, subject: &ReviewSubject) -> Result<Vec<Review>>;
}
