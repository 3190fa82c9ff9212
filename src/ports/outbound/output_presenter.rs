use crate::shared::Result;

/// OutputPresenter port for delivering a rendered report
///
/// This port abstracts the output destination (stdout, file) for the
/// CLI's one-shot analysis.
pub trait OutputPresenter {
    /// Presents the rendered report
    ///
    /// # Arguments
    /// * `content` - The formatted report content
    ///
    /// # Errors
    /// Returns an error if the output destination cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}
