use async_trait::async_trait;

use crate::ports::outbound::AnalysisEngine;
use crate::shared::Result;
use crate::trust_scoring::domain::{Product, Review, TrustScore};
use crate::trust_scoring::services::TrustCalculator;

/// LexiconEngine adapter scoring reviews with the built-in calculator
///
/// This is the default engine. It runs entirely in process, needs no
/// credentials, never fails, and gives the same verdict for the same
/// reviews every time.
pub struct LexiconEngine;

impl LexiconEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisEngine for LexiconEngine {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    async fn analyze(&self, product: &Product, reviews: &[Review]) -> Result<TrustScore> {
        Ok(TrustCalculator::calculate(product.id, reviews))
    }
}
