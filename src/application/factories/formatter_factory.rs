use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter
/// implementations, following the Factory Pattern. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    ///
    /// # Returns
    /// A boxed ReportFormatter trait object appropriate for the format
    ///
    /// # Examples
    /// ```
    /// use trust_lens::application::dto::OutputFormat;
    /// use trust_lens::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON report...",
            OutputFormat::Markdown => "📝 Rendering Markdown report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::AnalysisReport;
    use crate::trust_scoring::domain::{Product, ProductDraft};

    fn empty_report() -> AnalysisReport {
        let product =
            Product::from_draft(ProductDraft::new(Some("Lamp".to_string()), None, None).unwrap());
        AnalysisReport::new(product, vec![])
    }

    #[test]
    fn test_create_json_formatter_renders_json() {
        let formatter = FormatterFactory::create(OutputFormat::Json);
        let output = formatter.format(&empty_report()).unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_markdown_formatter_renders_markdown() {
        let formatter = FormatterFactory::create(OutputFormat::Markdown);
        let output = formatter.format(&empty_report()).unwrap();
        assert!(output.starts_with("# "));
    }

    #[test]
    fn test_progress_messages_name_the_format() {
        assert!(FormatterFactory::progress_message(OutputFormat::Json).contains("JSON"));
        assert!(FormatterFactory::progress_message(OutputFormat::Markdown).contains("Markdown"));
    }
}
