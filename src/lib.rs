//! # Lifeline
//!
//! Explainable 10-year cardiovascular risk estimation.
//!
//! This crate provides:
//! - A table-driven heuristic risk scorer with a per-factor breakdown
//! - A recommendation engine that turns elevated factors into a prevention plan
//! - Markdown health reports and a terminal UI for local use
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (assessment input, factor map, risk, recommendations)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (report files, log sanitization)
//! - `application`: Scoring, recommendation and report use cases
//! - `tui`: Terminal user interface
//! - `config`: Environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use application::{recommend, score};
pub use domain::{Assessment, AssessmentInput, FactorMap, RecommendationSet, RiskCategory, RiskResult};

/// Result type for Lifeline operations
pub type Result<T> = std::result::Result<T, LifelineError>;

/// Main error type for Lifeline
#[derive(Debug, thiserror::Error)]
pub enum LifelineError {
    #[error("Invalid assessment input: {}", join_errors(.0))]
    InvalidInput(Vec<domain::ValidationError>),

    #[error("Report export failed: {0}")]
    Export(#[from] adapters::ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Vec<domain::ValidationError>> for LifelineError {
    fn from(errors: Vec<domain::ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

impl From<domain::ValidationError> for LifelineError {
    fn from(error: domain::ValidationError) -> Self {
        Self::InvalidInput(vec![error])
    }
}

fn join_errors(errors: &[domain::ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
