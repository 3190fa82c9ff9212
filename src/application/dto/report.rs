use serde::Serialize;

use crate::trust_scoring::domain::{Product, Review};

/// AnalysisReport - Everything a completed analysis produced
///
/// The REST API serves only the product document from this; the CLI
/// report formatters also render the reviews behind the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub product: Product,
    pub reviews: Vec<Review>,
}

impl AnalysisReport {
    pub fn new(product: Product, reviews: Vec<Review>) -> Self {
        Self { product, reviews }
    }
}
