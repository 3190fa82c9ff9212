use async_trait::async_trait;

use crate::application::dto::DashboardAnalytics;
use crate::shared::TrustLensError;

/// DashboardPort - Inbound port for aggregate analytics
#[async_trait]
pub trait DashboardPort: Send + Sync {
    /// Computes the analytics snapshot shown on the dashboard
    ///
    /// # Errors
    /// Returns an error if the underlying storage cannot be queried.
    async fn dashboard_analytics(&self) -> Result<DashboardAnalytics, TrustLensError>;
}
