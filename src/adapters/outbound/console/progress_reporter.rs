use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses indicatif for rich progress bar display.
pub struct StderrProgressReporter {
    // The port is shared across async tasks, so the bar sits behind a Mutex.
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> Option<ProgressBar> {
        let mut guard = self.progress_bar.lock().ok()?;
        if let Some(pb) = guard.as_ref() {
            Some(pb.clone())
        } else {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}",
                    )
                    .expect("Failed to set progress bar template")
                    .progress_chars("=>-"),
            );
            *guard = Some(pb.clone());
            Some(pb)
        }
    }

    fn finish_progress_bar(&self) {
        if let Ok(guard) = self.progress_bar.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn advance(&self, current: usize, total: usize, message: &str) {
        if let Some(pb) = self.get_or_create_progress_bar(total) {
            pb.set_position(current as u64);
            pb.set_message(message.to_string());
        }
    }

    fn warn(&self, message: &str) {
        // Print above the live bar so it stays intact for later updates.
        if let Ok(guard) = self.progress_bar.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.println(message);
                return;
            }
        }
        eprintln!("{}", message);
    }

    fn done(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}

/// TracingProgressReporter adapter for server-side progress
///
/// This adapter implements the ProgressReporter port by forwarding
/// messages to the tracing subscriber, so analyses triggered over HTTP
/// land in the service logs instead of on stderr.
pub struct TracingProgressReporter;

impl TracingProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TracingProgressReporter {
    fn report(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn advance(&self, current: usize, total: usize, message: &str) {
        tracing::debug!("{}/{}: {}", current, total, message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn done(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_reporter_does_not_panic() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.advance(1, 4, "first source");
        reporter.warn("Test warning");
        reporter.advance(2, 4, "second source");
        reporter.done("Test completion");
    }

    #[test]
    fn test_stderr_reporter_default() {
        let reporter = StderrProgressReporter::default();
        reporter.report("Test message");
    }

    #[test]
    fn test_tracing_reporter_does_not_panic() {
        let reporter = TracingProgressReporter::new();
        reporter.report("Test message");
        reporter.advance(1, 2, "source");
        reporter.warn("Test warning");
        reporter.done("Test completion");
    }
}
