//! Filesystem adapters (outbound)

mod report_writer;

pub use report_writer::{FileSystemWriter, StdoutPresenter};
