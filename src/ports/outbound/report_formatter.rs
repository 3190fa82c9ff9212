use crate::application::dto::AnalysisReport;
use crate::shared::Result;

/// ReportFormatter port for rendering an analysis report
///
/// Implementations turn a completed analysis into a string in one
/// output format (JSON, Markdown). Selection happens by CLI flag
/// through the formatter factory.
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &AnalysisReport) -> Result<String>;
}
