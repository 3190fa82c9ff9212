use crate::ports::outbound::OutputPresenter;
use crate::shared::error::TrustLensError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing reports to files
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(TrustLensError::ReportWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Security validation before writing:
    /// - Reject if the output path exists and is a symlink
    /// - Reject parent directories that cannot be resolved
    fn validate_output_security(&self) -> Result<()> {
        // Check the symlink itself, not whatever it points at
        if self.output_path.exists() {
            let metadata = fs::symlink_metadata(&self.output_path).map_err(|e| {
                TrustLensError::ReportWriteError {
                    path: self.output_path.clone(),
                    details: format!("Failed to read file metadata: {}", e),
                }
            })?;

            if metadata.is_symlink() {
                return Err(TrustLensError::SecurityError {
                    path: self.output_path.clone(),
                    reason: "Output path is a symbolic link".to_string(),
                    hint: "Write the report to a regular file instead".to_string(),
                }
                .into());
            }
        }

        if let Some(parent) = self.output_path.parent() {
            if parent.exists() {
                parent.canonicalize().map_err(|e| {
                    TrustLensError::ReportWriteError {
                        path: self.output_path.clone(),
                        details: format!("Failed to validate parent directory: {}", e),
                    }
                })?;
            }
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, content).map_err(|e| TrustLensError::ReportWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Report written: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing reports to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
