use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tracing::warn;

use crate::application::dto::{AnalysisReport, AnalyzeProductRequest};
use crate::ports::inbound::ProductAnalysisPort;
use crate::ports::outbound::{
    AnalysisEngine, ProductRepository, ProgressReporter, ReviewSource, ReviewSubject,
};
use crate::shared::TrustLensError;
use crate::trust_scoring::domain::{Product, ProductDraft, Review, TrustScore};
use crate::trust_scoring::services::TrustCalculator;

/// Maximum number of marketplaces queried at the same time.
const MAX_CONCURRENT_SOURCES: usize = 4;

/// AnalyzeProductUseCase - Core use case for product analysis
///
/// This use case orchestrates the full analysis workflow: validate the
/// submission, collect reviews from every configured marketplace in
/// parallel, score the product, and persist the result.
///
/// Failures are contained where the workflow can continue without them:
/// a marketplace that cannot be reached is skipped, and an engine
/// failure falls back to the deterministic calculator. Only validation
/// and storage failures abort the analysis.
pub struct AnalyzeProductUseCase {
    sources: Vec<Arc<dyn ReviewSource>>,
    engine: Arc<dyn AnalysisEngine>,
    products: Arc<dyn ProductRepository>,
    progress: Arc<dyn ProgressReporter>,
}

impl AnalyzeProductUseCase {
    /// Creates a new AnalyzeProductUseCase with injected dependencies
    pub fn new(
        sources: Vec<Arc<dyn ReviewSource>>,
        engine: Arc<dyn AnalysisEngine>,
        products: Arc<dyn ProductRepository>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Self {
        Self {
            sources,
            engine,
            products,
            progress,
        }
    }

    /// Collects reviews from every source, tolerating individual failures.
    ///
    /// Sources run concurrently, bounded by `MAX_CONCURRENT_SOURCES`. The
    /// combined result is sorted into the canonical platform order (newest
    /// first within a platform) so the caller sees the same order no matter
    /// which source answered first.
    async fn gather_reviews(&self, subject: &ReviewSubject) -> Vec<Review> {
        let total = self.sources.len();
        self.progress.report(&format!(
            "🔍 Collecting reviews for '{}' from {} platforms...",
            subject.name, total
        ));

        let fetches: Vec<_> = self
            .sources
            .iter()
            .cloned()
            .map(|source| {
                let subject = subject.clone();
                async move {
                    let platform = source.platform();
                    (platform, source.fetch_reviews(&subject).await)
                }
            })
            .collect();
        let outcomes: Vec<_> = stream::iter(fetches)
            .buffer_unordered(MAX_CONCURRENT_SOURCES)
            .collect()
            .await;

        let mut reviews = Vec::new();
        for (completed, (platform, outcome)) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(mut found) => {
                    self.progress.advance(
                        completed + 1,
                        total,
                        &format!("{}: {} reviews", platform, found.len()),
                    );
                    reviews.append(&mut found);
                }
                Err(error) => {
                    warn!(
                        platform = platform.as_str(),
                        error = %error,
                        "review source failed, continuing without it"
                    );
                    self.progress
                        .warn(&format!("⚠️ {} unavailable: {}", platform, error));
                }
            }
        }

        reviews.sort_by_key(|r| (r.platform.ordinal(), std::cmp::Reverse(r.date)));
        reviews
    }

    /// Scores the product, falling back to the deterministic calculator
    /// when the configured engine fails or returns a malformed score.
    async fn score_product(&self, product: &Product, reviews: &[Review]) -> TrustScore {
        self.progress.report(&format!(
            "📊 Scoring {} reviews with the {} engine...",
            reviews.len(),
            self.engine.name()
        ));

        let verdict = self
            .engine
            .analyze(product, reviews)
            .await
            .and_then(|score| {
                score.validate()?;
                Ok(score)
            });

        match verdict {
            Ok(score) => score,
            Err(error) => {
                warn!(
                    engine = self.engine.name(),
                    error = %error,
                    "analysis engine failed, falling back to deterministic scoring"
                );
                self.progress.warn(&format!(
                    "⚠️ {} engine unavailable, using built-in scoring",
                    self.engine.name()
                ));
                TrustCalculator::calculate(product.id, reviews)
            }
        }
    }
}

#[async_trait]
impl ProductAnalysisPort for AnalyzeProductUseCase {
    async fn analyze(
        &self,
        request: AnalyzeProductRequest,
    ) -> Result<AnalysisReport, TrustLensError> {
        // Step 1: Validate the submission and settle defaults
        let draft = ProductDraft::new(
            request.product_name,
            request.product_description,
            request.product_url,
        )?;
        let mut product = Product::from_draft(draft);

        // Step 2: Collect reviews from every configured marketplace
        let subject = ReviewSubject::for_product(&product);
        let reviews = self.gather_reviews(&subject).await;

        // Step 3: Score the product
        let score = self.score_product(&product, &reviews).await;
        let overall = score.overall_score;
        product.trust_score = Some(score);

        // Step 4: Persist the completed analysis as one unit
        self.products
            .insert_analyzed(&product, &reviews)
            .await
            .map_err(TrustLensError::storage)?;

        self.progress.done(&format!(
            "✅ Analysis complete: '{}' scored {:.1} from {} reviews",
            product.name,
            overall,
            reviews.len()
        ));

        Ok(AnalysisReport::new(product, reviews))
    }
}
