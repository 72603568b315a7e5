//! Assessment service: Orchestrates one risk assessment.
//!
//! This service coordinates:
//! - Input validation and scoring
//! - Recommendation generation
//! - Report rendering and export

use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::ExportError;
use crate::domain::{Assessment, AssessmentInput};
use crate::ports::ReportExporter;
use crate::LifelineError;

use super::{recommend, report, score};

/// Service for running assessments and exporting their reports.
pub struct AssessmentService<E>
where
    E: ReportExporter,
{
    exporter: Arc<E>,
}

impl<E> AssessmentService<E>
where
    E: ReportExporter,
    E::Error: Into<ExportError>,
{
    /// Create a new assessment service.
    pub fn new(exporter: Arc<E>) -> Self {
        Self { exporter }
    }

    /// Score `input` and derive its prevention plan.
    ///
    /// # Errors
    /// Returns `LifelineError::InvalidInput` if the input is out of domain.
    pub fn assess(&self, input: AssessmentInput) -> Result<Assessment, LifelineError> {
        let result = score(&input)?;
        let recommendations = recommend(&result.factors);
        let assessment = Assessment::new(input, result, recommendations);

        tracing::info!(
            "Assessment complete: category={}, elevated factors={}, recommendations={}",
            assessment.category(),
            assessment.result.factors.elevated().count(),
            assessment.recommendations.len()
        );

        Ok(assessment)
    }

    /// Render the Markdown report for `assessment` and hand it to the exporter.
    ///
    /// # Errors
    /// Returns `LifelineError::Export` if the exporter fails.
    pub fn export(&self, assessment: &Assessment) -> Result<PathBuf, LifelineError> {
        let contents = report::render_markdown(assessment);
        let file_name = report_file_name(assessment);

        self.exporter
            .export(&file_name, &contents)
            .map_err(|e| LifelineError::Export(e.into()))
    }
}

/// File name for an exported report, unique per second.
#[must_use]
pub fn report_file_name(assessment: &Assessment) -> String {
    format!(
        "heart_health_report_{}.md",
        assessment.assessed_at.format("%Y%m%d_%H%M%S")
    )
}
