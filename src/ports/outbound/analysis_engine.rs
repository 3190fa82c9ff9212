use async_trait::async_trait;

use crate::shared::Result;
use crate::trust_scoring::domain::{Product, Review, TrustScore};

/// AnalysisEngine port for turning reviews into a trust score
///
/// The engine receives the product and every review that was gathered
/// for it, and produces the complete verdict. Engines may call external
/// services; callers fall back to the deterministic calculator when an
/// engine fails, so an error here never fails the overall analysis.
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// Short name used in logs, e.g. "lexicon" or "gemini"
    fn name(&self) -> &'static str;

    /// Produces a trust score for the product
    ///
    /// # Arguments
    /// * `product` - The product under analysis
    /// * `reviews` - All reviews gathered for it, possibly empty
    ///
    /// # Returns
    /// A trust score that satisfies `TrustScore::validate`
    ///
    /// # Errors
    /// Returns an error if the engine cannot produce a well-formed
    /// score, for example when an upstream service is unreachable or
    /// returns an unusable response.
    async fn analyze(&self, product: &Product, reviews: &[Review]) -> Result<TrustScore>;
}
