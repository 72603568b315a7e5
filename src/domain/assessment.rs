//! Assessment input types for cardiovascular risk estimation.
//!
//! Every field maps one-to-one onto a control in the assessment form:
//! sliders and number inputs become bounded numerics, checkboxes become
//! booleans and select boxes become the enums below. A "Not Specified"
//! selection is its own variant and never triggers a risk rule.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Accepted age range in years.
pub const AGE_RANGE: RangeInclusive<u32> = 25..=84;

/// Accepted systolic blood pressure range in mmHg.
pub const BLOOD_PRESSURE_RANGE: RangeInclusive<f64> = 80.0..=200.0;

/// Accepted total cholesterol range in mmol/L.
pub const CHOLESTEROL_RANGE: RangeInclusive<f64> = 2.0..=10.0;

/// Accepted body mass index range.
pub const BMI_RANGE: RangeInclusive<f64> = 15.0..=50.0;

/// A single domain violation found while validating an [`AssessmentInput`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Age {0} out of range [25, 84]")]
    AgeOutOfRange(u32),

    #[error("Blood pressure {0} mmHg out of range [80, 200]")]
    BloodPressureOutOfRange(f64),

    #[error("Cholesterol {0} mmol/L out of range [2.0, 10.0]")]
    CholesterolOutOfRange(f64),

    #[error("BMI {0} out of range [15.0, 50.0]")]
    BmiOutOfRange(f64),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("Unknown {field} option: {value:?}")]
    UnknownOption { field: &'static str, value: String },
}

/// Biological sex assigned at birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Self-reported physical activity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalActivity {
    #[default]
    NotSpecified,
    Sedentary,
    Moderate,
    Active,
}

/// Self-reported diet quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietQuality {
    #[default]
    NotSpecified,
    Unhealthy,
    Balanced,
    Healthy,
}

/// Self-reported alcohol consumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlcoholConsumption {
    #[default]
    NotSpecified,
    Never,
    Occasionally,
    Frequent,
}

/// Average nightly sleep duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepDuration {
    #[default]
    NotSpecified,
    LessThan6h,
    SixToEight,
    MoreThan8h,
}

/// Shared behavior of the select-box enums: a fixed option list with
/// human-readable labels.
pub trait Choice: Copy + PartialEq + 'static {
    /// Field name used in error messages.
    const FIELD: &'static str;

    /// All options, in display order.
    const OPTIONS: &'static [Self];

    /// Label shown to the user.
    fn label(self) -> &'static str;

    /// The option after `self`, wrapping around.
    #[must_use]
    fn next(self) -> Self {
        let idx = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
        Self::OPTIONS[(idx + 1) % Self::OPTIONS.len()]
    }

    /// The option before `self`, wrapping around.
    #[must_use]
    fn prev(self) -> Self {
        let idx = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
        Self::OPTIONS[(idx + Self::OPTIONS.len() - 1) % Self::OPTIONS.len()]
    }

    /// Parse a label (or variant name), ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns `ValidationError::UnknownOption` if nothing matches.
    fn parse_label(s: &str) -> Result<Self, ValidationError>
    where
        Self: fmt::Debug,
    {
        let wanted = s.trim();
        Self::OPTIONS
            .iter()
            .copied()
            .find(|o| {
                o.label().eq_ignore_ascii_case(wanted)
                    || format!("{o:?}").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ValidationError::UnknownOption {
                field: Self::FIELD,
                value: wanted.to_string(),
            })
    }
}

impl Choice for Sex {
    const FIELD: &'static str = "sex";
    const OPTIONS: &'static [Self] = &[Self::Male, Self::Female];

    fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl Choice for PhysicalActivity {
    const FIELD: &'static str = "physical activity";
    const OPTIONS: &'static [Self] = &[
        Self::NotSpecified,
        Self::Sedentary,
        Self::Moderate,
        Self::Active,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NotSpecified => "Not Specified",
            Self::Sedentary => "Sedentary",
            Self::Moderate => "Moderate",
            Self::Active => "Active",
        }
    }
}

impl Choice for DietQuality {
    const FIELD: &'static str = "diet quality";
    const OPTIONS: &'static [Self] = &[
        Self::NotSpecified,
        Self::Unhealthy,
        Self::Balanced,
        Self::Healthy,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NotSpecified => "Not Specified",
            Self::Unhealthy => "Unhealthy",
            Self::Balanced => "Balanced",
            Self::Healthy => "Healthy",
        }
    }
}

impl Choice for AlcoholConsumption {
    const FIELD: &'static str = "alcohol consumption";
    const OPTIONS: &'static [Self] = &[
        Self::NotSpecified,
        Self::Never,
        Self::Occasionally,
        Self::Frequent,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NotSpecified => "Not Specified",
            Self::Never => "Never",
            Self::Occasionally => "Occasionally",
            Self::Frequent => "Frequent",
        }
    }
}

impl Choice for SleepDuration {
    const FIELD: &'static str = "sleep duration";
    const OPTIONS: &'static [Self] = &[
        Self::NotSpecified,
        Self::LessThan6h,
        Self::SixToEight,
        Self::MoreThan8h,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NotSpecified => "Not Specified",
            Self::LessThan6h => "Less than 6 hours",
            Self::SixToEight => "6-8 hours",
            Self::MoreThan8h => "More than 8 hours",
        }
    }
}

macro_rules! choice_traits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = ValidationError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse_label(s)
                }
            }
        )+
    };
}

choice_traits!(Sex, PhysicalActivity, DietQuality, AlcoholConsumption, SleepDuration);

/// Health and lifestyle attributes for one risk assessment.
///
/// Optional measurements are `None` when the user left them blank. A blank
/// measurement is neutral for scoring; it is never read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssessmentInput {
    /// Age in years (25-84)
    pub age: u32,

    pub sex: Sex,

    #[serde(default)]
    pub smoking: bool,

    #[serde(default)]
    pub diabetes: bool,

    #[serde(default)]
    pub atrial_fibrillation: bool,

    #[serde(default)]
    pub rheumatoid_arthritis: bool,

    #[serde(default)]
    pub family_history: bool,

    #[serde(default)]
    pub mental_health_issues: bool,

    #[serde(default)]
    pub chronic_kidney_disease: bool,

    #[serde(default)]
    pub migraine_history: bool,

    /// Systolic blood pressure in mmHg (80-200)
    #[serde(default)]
    pub blood_pressure_mm_hg: Option<f64>,

    /// Total cholesterol in mmol/L (2.0-10.0)
    #[serde(default)]
    pub cholesterol_mmol_l: Option<f64>,

    /// Body mass index (15.0-50.0)
    #[serde(default)]
    pub bmi: Option<f64>,

    #[serde(default)]
    pub physical_activity: PhysicalActivity,

    #[serde(default)]
    pub diet_quality: DietQuality,

    #[serde(default)]
    pub alcohol_consumption: AlcoholConsumption,

    #[serde(default)]
    pub sleep_duration: SleepDuration,
}

impl AssessmentInput {
    /// Create an input with only the mandatory fields set; every other
    /// field is neutral.
    #[must_use]
    pub fn new(age: u32, sex: Sex) -> Self {
        Self {
            age,
            sex,
            smoking: false,
            diabetes: false,
            atrial_fibrillation: false,
            rheumatoid_arthritis: false,
            family_history: false,
            mental_health_issues: false,
            chronic_kidney_disease: false,
            migraine_history: false,
            blood_pressure_mm_hg: None,
            cholesterol_mmol_l: None,
            bmi: None,
            physical_activity: PhysicalActivity::NotSpecified,
            diet_quality: DietQuality::NotSpecified,
            alcohol_consumption: AlcoholConsumption::NotSpecified,
            sleep_duration: SleepDuration::NotSpecified,
        }
    }

    /// Validate that every field is within its declared domain.
    ///
    /// # Errors
    /// Returns every violation found, in field order.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !AGE_RANGE.contains(&self.age) {
            errors.push(ValidationError::AgeOutOfRange(self.age));
        }

        check_measurement(
            &mut errors,
            "Blood pressure",
            self.blood_pressure_mm_hg,
            &BLOOD_PRESSURE_RANGE,
            ValidationError::BloodPressureOutOfRange,
        );
        check_measurement(
            &mut errors,
            "Cholesterol",
            self.cholesterol_mmol_l,
            &CHOLESTEROL_RANGE,
            ValidationError::CholesterolOutOfRange,
        );
        check_measurement(
            &mut errors,
            "BMI",
            self.bmi,
            &BMI_RANGE,
            ValidationError::BmiOutOfRange,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_measurement(
    errors: &mut Vec<ValidationError>,
    name: &'static str,
    value: Option<f64>,
    range: &RangeInclusive<f64>,
    out_of_range: fn(f64) -> ValidationError,
) {
    let Some(v) = value else {
        return;
    };
    if !v.is_finite() {
        errors.push(ValidationError::NonFinite(name));
    } else if !range.contains(&v) {
        errors.push(out_of_range(v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_neutral() {
        let input = AssessmentInput::new(50, Sex::Female);
        assert!(input.blood_pressure_mm_hg.is_none());
        assert_eq!(input.physical_activity, PhysicalActivity::NotSpecified);
        assert_eq!(input.sleep_duration, SleepDuration::NotSpecified);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validation_boundaries() {
        assert!(AssessmentInput::new(25, Sex::Male).validate().is_ok());
        assert!(AssessmentInput::new(84, Sex::Male).validate().is_ok());

        let errors = AssessmentInput::new(24, Sex::Male)
            .validate()
            .expect_err("age below range");
        assert_eq!(errors, vec![ValidationError::AgeOutOfRange(24)]);

        let mut input = AssessmentInput::new(50, Sex::Male);
        input.blood_pressure_mm_hg = Some(200.0);
        input.cholesterol_mmol_l = Some(2.0);
        input.bmi = Some(50.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut input = AssessmentInput::new(10, Sex::Female);
        input.blood_pressure_mm_hg = Some(79.0);
        input.cholesterol_mmol_l = Some(f64::NAN);
        input.bmi = Some(70.0);

        let errors = input.validate().expect_err("should be invalid");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[2], ValidationError::NonFinite("Cholesterol"));
        assert_eq!(errors[3], ValidationError::BmiOutOfRange(70.0));
    }

    #[test]
    fn test_choice_labels_round_trip() {
        assert_eq!(
            "Less than 6 hours".parse::<SleepDuration>(),
            Ok(SleepDuration::LessThan6h)
        );
        assert_eq!("6-8 hours".parse::<SleepDuration>(), Ok(SleepDuration::SixToEight));
        assert_eq!(
            "not specified".parse::<DietQuality>(),
            Ok(DietQuality::NotSpecified)
        );
        assert_eq!("Sedentary".parse::<PhysicalActivity>(), Ok(PhysicalActivity::Sedentary));
        assert_eq!("female".parse::<Sex>(), Ok(Sex::Female));

        let err = "Daily".parse::<AlcoholConsumption>().expect_err("unknown label");
        assert_eq!(
            err,
            ValidationError::UnknownOption {
                field: "alcohol consumption",
                value: "Daily".to_string(),
            }
        );
    }

    #[test]
    fn test_choice_cycling_wraps() {
        assert_eq!(PhysicalActivity::Active.next(), PhysicalActivity::NotSpecified);
        assert_eq!(PhysicalActivity::NotSpecified.prev(), PhysicalActivity::Active);
        assert_eq!(Sex::Male.next(), Sex::Female);
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let json = r#"{"age": 60, "sex": "Male", "smoking": true, "bloodPressureMmHg": 150}"#;
        let input: AssessmentInput = serde_json::from_str(json).expect("Should parse");
        assert_eq!(input.age, 60);
        assert!(input.smoking);
        assert_eq!(input.blood_pressure_mm_hg, Some(150.0));
        assert!(input.bmi.is_none());
        assert_eq!(input.alcohol_consumption, AlcoholConsumption::NotSpecified);
    }

    #[test]
    fn test_deserialize_rejects_misspelled_fields() {
        let json = r#"{"age": 50, "sex": "Male", "bloodPressure": 150}"#;
        let err = serde_json::from_str::<AssessmentInput>(json).unwrap_err();
        assert!(err.to_string().contains("unknown field `bloodPressure`"), "{err}");

        let json = r#"{"age": 50, "sex": "Male", "smoker": true}"#;
        assert!(serde_json::from_str::<AssessmentInput>(json).is_err());
    }
}
