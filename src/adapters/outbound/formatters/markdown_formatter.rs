use crate::application::dto::AnalysisReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::trust_scoring::domain::{Review, TrustScore};

/// Markdown table header for aspect scores
const ASPECT_TABLE_HEADER: &str = "| Aspect | Score | Sentiment | Key Points |\n";

/// Markdown table separator line
const ASPECT_TABLE_SEPARATOR: &str = "|--------|-------|-----------|------------|\n";

/// Markdown table header for the review listing
const REVIEW_TABLE_HEADER: &str = "| Platform | Rating | Date | Verified | Reviewer | Review |\n";

/// Markdown table separator line for the review table
const REVIEW_TABLE_SEPARATOR: &str =
    "|----------|--------|------|----------|----------|--------|\n";

/// MarkdownFormatter adapter for human-readable trust reports
///
/// This adapter implements the ReportFormatter port for Markdown format,
/// rendering the trust score breakdown and the reviews behind it.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &AnalysisReport) {
        output.push_str(&format!("# Trust Report: {}\n\n", report.product.name));
        output.push_str(&format!("{}\n\n", report.product.description));
        if let Some(url) = &report.product.url {
            output.push_str(&format!("**URL:** {}\n\n", url));
        }
    }

    fn render_trust_score(&self, output: &mut String, score: Option<&TrustScore>) {
        output.push_str("## Trust Score\n\n");

        let Some(score) = score else {
            output.push_str("*No trust score has been computed for this product.*\n\n");
            return;
        };

        output.push_str(&format!(
            "**Overall:** {:.1} / 100 (based on {} {})\n\n",
            score.overall_score,
            score.total_reviews,
            if score.total_reviews == 1 {
                "review"
            } else {
                "reviews"
            }
        ));
        output.push_str(&format!(
            "**Recommendation:** {}\n\n",
            Self::escape_markdown_table_cell(&score.recommendation)
        ));
        output.push_str(&format!(
            "{}\n\n",
            Self::escape_markdown_table_cell(&score.summary)
        ));

        output.push_str(ASPECT_TABLE_HEADER);
        output.push_str(ASPECT_TABLE_SEPARATOR);
        for analysis in &score.aspect_analysis {
            output.push_str(&format!(
                "| {} | {:.1} | {} | {} |\n",
                analysis.aspect,
                analysis.score,
                analysis.sentiment.as_str(),
                Self::escape_markdown_table_cell(&analysis.key_points.join("; "))
            ));
        }
        output.push('\n');
    }

    fn render_reviews(&self, output: &mut String, reviews: &[Review]) {
        output.push_str(&format!("## Reviews ({})\n\n", reviews.len()));

        if reviews.is_empty() {
            output.push_str("*No reviews were gathered for this product.*\n");
            return;
        }

        output.push_str(REVIEW_TABLE_HEADER);
        output.push_str(REVIEW_TABLE_SEPARATOR);
        for review in reviews {
            let text = format!("{}. {}", review.title, review.content);
            output.push_str(&format!(
                "| {} | {}/5 | {} | {} | {} | {} |\n",
                review.platform,
                review.rating,
                review.date,
                if review.verified { "yes" } else { "no" },
                Self::escape_markdown_table_cell(&review.author),
                Self::escape_markdown_table_cell(&text)
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_trust_score(&mut output, report.product.trust_score.as_ref());
        self.render_reviews(&mut output, &report.reviews);

        Ok(output)
    }
}
