pub mod error;
pub mod result;

pub use error::{ExitCode, TrustLensError};
pub use result::Result;
