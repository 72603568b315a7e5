//! Risk score types.
//!
//! Represents the output of the heuristic scorer and its five-band
//! interpretation.

use serde::{Deserialize, Serialize};

use super::factors::{FactorMap, RiskFactor};

/// Upper bound of the risk percentage.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Five-band classification of a 10-year risk percentage.
///
/// Bands are half-open; a boundary value belongs to the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Below 20%
    VeryLow,
    /// 20% to below 40%
    LowModerate,
    /// 40% to below 60%
    Moderate,
    /// 60% to below 80%
    High,
    /// 80% and above
    VeryHigh,
}

impl RiskCategory {
    /// Classify a risk percentage.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 20.0 {
            Self::VeryLow
        } else if percentage < 40.0 {
            Self::LowModerate
        } else if percentage < 60.0 {
            Self::Moderate
        } else if percentage < 80.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Short label, e.g. "Low-Moderate".
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::LowModerate => "Low-Moderate",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::VeryLow => {
                "Your cardiovascular health appears to be in excellent condition. Your current \
                 lifestyle and health factors indicate a very low risk of developing \
                 cardiovascular disease in the next 10 years."
            }
            Self::LowModerate => {
                "While your risk is still relatively low, there may be some areas for \
                 improvement. Consider making minor lifestyle adjustments to further reduce \
                 your risk of cardiovascular disease."
            }
            Self::Moderate => {
                "You have a moderate risk of developing cardiovascular disease. It's recommended \
                 to review your lifestyle habits and consult with a healthcare provider about \
                 potential preventive measures."
            }
            Self::High => {
                "Your risk factors indicate a high likelihood of cardiovascular disease. It's \
                 strongly advised to consult with a healthcare provider and make significant \
                 lifestyle changes to reduce your risk."
            }
            Self::VeryHigh => {
                "You are in the highest risk category for cardiovascular disease. Immediate \
                 consultation with a healthcare provider is essential. A comprehensive health \
                 management plan should be developed to address your risk factors."
            }
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::VeryLow => (16, 185, 129),    // Emerald (#10B981)
            Self::LowModerate => (250, 204, 21), // Yellow (#FACC15)
            Self::Moderate => (249, 115, 22),   // Orange (#F97316)
            Self::High => (244, 63, 94),        // Rose (#F43F5E)
            Self::VeryHigh => (59, 130, 246),   // Blue (#3B82F6)
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated 10-year risk with its per-factor breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Risk percentage in [0, 100], rounded to 2 decimals
    pub percentage: f64,

    /// Multiplier applied by every factor
    pub factors: FactorMap,
}

impl RiskResult {
    /// Risk band for this result.
    #[must_use]
    pub fn category(&self) -> RiskCategory {
        RiskCategory::from_percentage(self.percentage)
    }

    /// Up to three strongest elevated factors, highest first.
    #[must_use]
    pub fn top_factors(&self) -> Vec<RiskFactor> {
        self.factors.top(3).into_iter().map(|(f, _)| f).collect()
    }

    /// Whether the score hit the upper bound.
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.percentage >= MAX_PERCENTAGE
    }
}
