//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `LIFELINE_LOG_MODE` | `auto` | `file`, `stdout` or `auto` (file when interactive) |
//! | `LIFELINE_LOG_FILE` | `lifeline.log` | Log file used in file mode |
//! | `LIFELINE_REPORT_DIR` | `reports` | Directory for exported reports |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::path::PathBuf;

const LOG_MODE_ENV: &str = "LIFELINE_LOG_MODE";
const LOG_FILE_ENV: &str = "LIFELINE_LOG_FILE";
const REPORT_DIR_ENV: &str = "LIFELINE_REPORT_DIR";

const DEFAULT_LOG_FILE: &str = "lifeline.log";
const DEFAULT_REPORT_DIR: &str = "reports";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    File,
    Stdout,
    /// File when stdout is a terminal (the TUI owns it), stdout otherwise
    Auto,
}

impl LogMode {
    /// Parse a mode name; anything unrecognized falls back to `Auto`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Whether to log to a file given the terminal state.
    #[must_use]
    pub fn use_file(self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    pub report_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_mode: non_empty(LOG_MODE_ENV).map_or(defaults.log_mode, |v| LogMode::parse(&v)),
            log_file: non_empty(LOG_FILE_ENV).map_or(defaults.log_file, PathBuf::from),
            report_dir: non_empty(REPORT_DIR_ENV).map_or(defaults.report_dir, PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LIFELINE_LOG_MODE", "STDOUT"),
            ("LIFELINE_LOG_FILE", "/tmp/lifeline-test.log"),
            ("LIFELINE_REPORT_DIR", "  "),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| (*v).to_string()));
        assert_eq!(config.log_mode, LogMode::Stdout);
        assert_eq!(config.log_file, PathBuf::from("/tmp/lifeline-test.log"));
        assert_eq!(config.report_dir, PathBuf::from(DEFAULT_REPORT_DIR));
    }

    #[test]
    fn test_log_mode_selection() {
        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
        assert_eq!(LogMode::parse("bogus"), LogMode::Auto);
    }
}
