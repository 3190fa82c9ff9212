/// ProgressReporter port for user feedback during an analysis
///
/// This port abstracts progress reporting so the use case can narrate
/// its steps without knowing whether it is running under the CLI (live
/// stderr output) or inside the server (structured logs).
pub trait ProgressReporter: Send + Sync {
    /// Announce a step that is starting
    fn report(&self, message: &str);

    /// Update progress within the current step
    ///
    /// # Arguments
    /// * `current` - How many units are done
    /// * `total` - How many units there are
    /// * `message` - Description of the unit just finished
    fn advance(&self, current: usize, total: usize, message: &str);

    /// Report a recoverable problem; the analysis continues
    fn warn(&self, message: &str);

    /// Announce that the analysis finished
    fn done(&self, message: &str);
}
