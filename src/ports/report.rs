//! Report export port: Trait for delivering rendered reports.
//!
//! This trait abstracts where a report ends up (local file, memory buffer)
//! from the application logic.

use std::path::PathBuf;

/// Trait for persisting a rendered report.
///
/// Implementations decide the final location; the application only chooses
/// the file name and the contents.
pub trait ReportExporter: Send + Sync {
    /// Error type for export operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store `contents` under `file_name`.
    ///
    /// # Returns
    /// The location the report was written to.
    ///
    /// # Errors
    /// Returns error if the report cannot be written.
    fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf, Self::Error>;
}
