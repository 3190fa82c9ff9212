use serde::Serialize;

use crate::ports::outbound::{DashboardSnapshot, PlatformCount};

/// Activity counters for the current UTC day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub products_analyzed_today: u64,
    pub reviews_processed: u64,
    pub trust_scores_updated: u64,
}

/// DashboardAnalytics - Aggregate view served by the dashboard endpoint
#[derive(Debug, Clone, Serialize)]
pub struct DashboardAnalytics {
    pub total_products: u64,
    pub total_reviews: u64,
    /// Mean overall trust score, rounded to two decimal places.
    pub average_trust_score: f64,
    pub platform_distribution: Vec<PlatformCount>,
    pub recent_activity: RecentActivity,
}

impl DashboardAnalytics {
    /// Shape the raw storage aggregates for presentation.
    pub fn from_snapshot(snapshot: DashboardSnapshot) -> Self {
        DashboardAnalytics {
            total_products: snapshot.total_products,
            total_reviews: snapshot.total_reviews,
            average_trust_score: round_to_hundredth(snapshot.average_trust_score),
            platform_distribution: snapshot.platform_distribution,
            recent_activity: RecentActivity {
                products_analyzed_today: snapshot.products_analyzed_today,
                reviews_processed: snapshot.reviews_processed_today,
                trust_scores_updated: snapshot.trust_scores_updated_today,
            },
        }
    }
}

fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
