use std::sync::Arc;

use crate::ports::inbound::{DashboardPort, ProductAnalysisPort, ProductQueryPort};

/// Application state shared across all handlers
///
/// Handlers only see the inbound ports; which use cases and storage sit
/// behind them is wired up at startup.
#[derive(Clone)]
pub struct AppState {
    pub analyze: Arc<dyn ProductAnalysisPort>,
    pub queries: Arc<dyn ProductQueryPort>,
    pub dashboard: Arc<dyn DashboardPort>,
}

impl AppState {
    pub fn new(
        analyze: Arc<dyn ProductAnalysisPort>,
        queries: Arc<dyn ProductQueryPort>,
        dashboard: Arc<dyn DashboardPort>,
    ) -> Self {
        Self {
            analyze,
            queries,
            dashboard,
        }
    }
}
