//! Markdown file adapter: Implementation of ReportExporter.
//!
//! Writes reports into a local directory. Nothing leaves the machine.

use std::fs;
use std::path::PathBuf;

use crate::ports::ReportExporter;

/// Error type for report export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Cannot create report directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write report {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid report file name: {0:?}")]
    InvalidFileName(String),
}

/// Exporter that writes each report as a file in one directory.
#[derive(Debug, Clone)]
pub struct MarkdownFileExporter {
    dir: PathBuf,
}

impl MarkdownFileExporter {
    /// Create an exporter rooted at `dir`. The directory is created on first export.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

/// A plain file name: no separators, no parent references.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

impl ReportExporter for MarkdownFileExporter {
    type Error = ExportError;

    fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf, Self::Error> {
        if !is_plain_file_name(file_name) {
            return Err(ExportError::InvalidFileName(file_name.to_string()));
        }

        fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Report written to {:?}", path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_creates_directory_and_file() {
        let tmp = tempfile::tempdir().expect("Should create temp dir");
        let exporter = MarkdownFileExporter::new(tmp.path().join("reports"));

        let path = exporter
            .export("report.md", "# Heart Health Report\n")
            .expect("Should export");

        assert_eq!(path, tmp.path().join("reports").join("report.md"));
        let written = fs::read_to_string(&path).expect("Should read back");
        assert_eq!(written, "# Heart Health Report\n");
    }

    #[test]
    fn test_export_rejects_path_traversal() {
        let tmp = tempfile::tempdir().expect("Should create temp dir");
        let exporter = MarkdownFileExporter::new(tmp.path());

        for name in ["../escape.md", "nested/report.md", "..", ""] {
            assert!(matches!(
                exporter.export(name, "x"),
                Err(ExportError::InvalidFileName(_))
            ));
        }
    }
}
