//! Domain layer: Core business types and logic.
//!
//! This module contains plain data types with no I/O. All types are
//! serializable and validate their own invariants.

mod assessment;
mod factors;
mod outcome;
mod recommendation;
mod risk;

pub use assessment::{
    AlcoholConsumption, AssessmentInput, Choice, DietQuality, PhysicalActivity, Sex,
    SleepDuration, ValidationError, AGE_RANGE, BLOOD_PRESSURE_RANGE, BMI_RANGE,
    CHOLESTEROL_RANGE,
};
pub use factors::{FactorMap, FactorMapError, RiskFactor, NEUTRAL};
pub use outcome::Assessment;
pub use recommendation::{Recommendation, RecommendationSet, TIPS_PER_RECOMMENDATION};
pub use risk::{RiskCategory, RiskResult, MAX_PERCENTAGE};
