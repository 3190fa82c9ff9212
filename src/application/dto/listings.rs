use serde::Serialize;

use crate::trust_scoring::domain::{Product, Review};

/// ProductListing - One page of analyzed products
///
/// `total` is the full count in storage, not the page size, so clients
/// can paginate.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub total: u64,
    pub offset: u32,
    pub limit: u32,
}

/// ReviewListing - Stored reviews for one product
///
/// `product_id` echoes the id the client asked for, even when nothing
/// was found for it.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewListing {
    pub product_id: String,
    pub reviews: Vec<Review>,
    pub total: u64,
}
