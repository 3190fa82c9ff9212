use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{ProductListing, ReviewListing};
use crate::ports::inbound::ProductQueryPort;
use crate::ports::outbound::{ProductRepository, ReviewRepository};
use crate::shared::TrustLensError;
use crate::trust_scoring::domain::Product;

/// Page size applied when the client does not send one.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on requested page sizes.
const MAX_PAGE_SIZE: u32 = 100;

/// ProductQueriesUseCase - Read-side lookups over analyzed products
pub struct ProductQueriesUseCase {
    products: Arc<dyn ProductRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl ProductQueriesUseCase {
    /// Creates a new ProductQueriesUseCase with injected dependencies
    pub fn new(products: Arc<dyn ProductRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { products, reviews }
    }

    fn clamp_page(limit: Option<u32>, offset: Option<u32>) -> (u32, u32) {
        (
            limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
            offset.unwrap_or(0),
        )
    }
}

#[async_trait]
impl ProductQueryPort for ProductQueriesUseCase {
    async fn get_product(&self, product_id: &str) -> Result<Product, TrustLensError> {
        self.products
            .fetch_product(product_id)
            .await
            .map_err(TrustLensError::storage)?
            .ok_or(TrustLensError::ProductNotFound)
    }

    async fn list_products(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<ProductListing, TrustLensError> {
        let (limit, offset) = Self::clamp_page(limit, offset);
        let products = self
            .products
            .list_recent(limit, offset)
            .await
            .map_err(TrustLensError::storage)?;
        let total = self
            .products
            .count_products()
            .await
            .map_err(TrustLensError::storage)?;

        Ok(ProductListing {
            products,
            total,
            offset,
            limit,
        })
    }

    async fn product_reviews(&self, product_id: &str) -> Result<ReviewListing, TrustLensError> {
        let reviews = self
            .reviews
            .reviews_for_product(product_id)
            .await
            .map_err(TrustLensError::storage)?;

        Ok(ReviewListing {
            product_id: product_id.to_string(),
            total: reviews.len() as u64,
            reviews,
        })
    }
}
