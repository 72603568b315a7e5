//! TUI module: Terminal User Interface using Ratatui.
//!
//! Screens:
//! - Home with the last assessment summary
//! - Assessment form
//! - Risk results with factor breakdown
//! - Recommendations with report export

mod app;
mod styles;
mod ui;

pub use app::{App, Screen};
pub use styles::HeartTheme;
