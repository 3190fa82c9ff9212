use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::DashboardAnalytics;
use crate::ports::inbound::DashboardPort;
use crate::ports::outbound::AnalyticsRepository;
use crate::shared::TrustLensError;

/// DashboardAnalyticsUseCase - Aggregate numbers for the dashboard
pub struct DashboardAnalyticsUseCase {
    analytics: Arc<dyn AnalyticsRepository>,
}

impl DashboardAnalyticsUseCase {
    /// Creates a new DashboardAnalyticsUseCase with injected dependencies
    pub fn new(analytics: Arc<dyn AnalyticsRepository>) -> Self {
        Self { analytics }
    }
}

#[async_trait]
impl DashboardPort for DashboardAnalyticsUseCase {
    async fn dashboard_analytics(&self) -> Result<DashboardAnalytics, TrustLensError> {
        let snapshot = self
            .analytics
            .dashboard_snapshot()
            .await
            .map_err(TrustLensError::storage)?;
        Ok(DashboardAnalytics::from_snapshot(snapshot))
    }
}
