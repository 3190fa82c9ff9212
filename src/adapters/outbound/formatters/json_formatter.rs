use crate::application::dto::AnalysisReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable reports
///
/// This adapter implements the ReportFormatter port for JSON output.
/// The rendered document carries the product (with its trust score)
/// plus every review the analysis was based on.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(report)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
