use async_trait::async_trait;

use crate::application::dto::{AnalysisReport, AnalyzeProductRequest};
use crate::shared::TrustLensError;

/// ProductAnalysisPort - Inbound port for the product analysis use case
///
/// This port defines the interface that external adapters (REST API, CLI)
/// use to trigger a full product analysis: gather reviews, score them,
/// and persist the result.
#[async_trait]
pub trait ProductAnalysisPort: Send + Sync {
    /// Analyzes a product submission end to end
    ///
    /// # Arguments
    /// * `request` - The submission, any combination of URL, name and
    ///   description; missing fields fall back to defaults
    ///
    /// # Returns
    /// The analyzed product together with the reviews that informed it
    ///
    /// # Errors
    /// Returns an error if:
    /// - The submission fails validation (oversized or malformed fields)
    /// - The analysis result cannot be persisted
    async fn analyze(
        &self,
        request: AnalyzeProductRequest,
    ) -> Result<AnalysisReport, TrustLensError>;
}
