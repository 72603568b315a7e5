//! Adapters layer: Concrete implementations of ports.
//!
//! - `markdown`: report files on local disk
//! - `sanitize`: health-data filtering for logs

pub mod markdown;
pub mod sanitize;

pub use markdown::{ExportError, MarkdownFileExporter};
