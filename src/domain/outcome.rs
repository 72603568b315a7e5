//! Complete outcome of one assessment request.

use serde::{Deserialize, Serialize};

use super::{AssessmentInput, RecommendationSet, RiskCategory, RiskResult};

/// Inputs, score and prevention plan for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub input: AssessmentInput,

    pub result: RiskResult,

    pub recommendations: RecommendationSet,

    /// When the score was computed
    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// Bundle a scored input with its recommendations, stamped now.
    #[must_use]
    pub fn new(
        input: AssessmentInput,
        result: RiskResult,
        recommendations: RecommendationSet,
    ) -> Self {
        Self {
            input,
            result,
            recommendations,
            assessed_at: chrono::Utc::now(),
        }
    }

    #[must_use]
    pub fn category(&self) -> RiskCategory {
        self.result.category()
    }
}
