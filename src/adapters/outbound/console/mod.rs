//! Console adapters (outbound)

mod progress_reporter;

pub use progress_reporter::{StderrProgressReporter, TracingProgressReporter};
