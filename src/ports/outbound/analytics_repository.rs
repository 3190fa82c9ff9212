use async_trait::async_trait;
use serde::Serialize;

use crate::shared::Result;

/// How many stored reviews came from one platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformCount {
    pub platform: String,
    pub count: u64,
}

/// Raw aggregate numbers backing the dashboard.
///
/// `average_trust_score` is unrounded here; presentation rounding
/// happens in the application layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub total_products: u64,
    pub total_reviews: u64,
    /// Mean overall score across stored trust scores, 0.0 when none exist.
    pub average_trust_score: f64,
    /// Review counts per platform, largest first.
    pub platform_distribution: Vec<PlatformCount>,
    /// Products analyzed since the start of the current UTC day.
    pub products_analyzed_today: u64,
    /// Reviews stored since the start of the current UTC day.
    pub reviews_processed_today: u64,
    /// Trust scores written since the start of the current UTC day.
    pub trust_scores_updated_today: u64,
}

/// AnalyticsRepository port for dashboard aggregates
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Computes the current aggregate numbers in one pass
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be queried.
    async fn dashboard_snapshot(&self) -> Result<DashboardSnapshot>;
}
