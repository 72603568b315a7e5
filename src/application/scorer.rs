//! Risk scorer: table-driven heuristic 10-year risk estimate.
//!
//! The score is `age * 0.15` scaled by one multiplier per row of
//! [`RISK_RULES`], capped at 100 and rounded to two decimals (half away
//! from zero).

use crate::domain::{
    AlcoholConsumption, AssessmentInput, DietQuality, FactorMap, PhysicalActivity, RiskFactor,
    RiskResult, Sex, SleepDuration, MAX_PERCENTAGE, NEUTRAL,
};
use crate::LifelineError;

/// Percentage points of baseline risk per year of age.
pub const BASE_RISK_PER_YEAR: f64 = 0.15;

/// Systolic pressure above which the blood pressure rule fires (mmHg).
pub const BLOOD_PRESSURE_THRESHOLD: f64 = 140.0;

/// Total cholesterol above which the cholesterol rule fires (mmol/L).
pub const CHOLESTEROL_THRESHOLD: f64 = 5.0;

/// BMI above which the weight rule fires.
pub const BMI_THRESHOLD: f64 = 30.0;

/// One condition of a rule and the multiplier it yields.
#[derive(Clone, Copy)]
pub struct Tier {
    pub applies: fn(&AssessmentInput) -> bool,
    pub multiplier: f64,
}

/// One row of the scoring table.
///
/// Tiers are checked in order; the first that applies sets the multiplier,
/// otherwise the factor is neutral.
#[derive(Clone, Copy)]
pub struct RiskRule {
    pub factor: RiskFactor,
    pub tiers: &'static [Tier],
}

impl RiskRule {
    /// Multiplier this rule assigns to `input`.
    #[must_use]
    pub fn evaluate(&self, input: &AssessmentInput) -> f64 {
        self.tiers
            .iter()
            .find(|tier| (tier.applies)(input))
            .map_or(NEUTRAL, |tier| tier.multiplier)
    }

    /// Every value `evaluate` can return.
    pub fn possible_multipliers(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(NEUTRAL).chain(self.tiers.iter().map(|t| t.multiplier))
    }
}

const fn tier(applies: fn(&AssessmentInput) -> bool, multiplier: f64) -> Tier {
    Tier {
        applies,
        multiplier,
    }
}

/// `Some(v)` with `v > threshold`; a blank measurement never fires.
fn above(value: Option<f64>, threshold: f64) -> bool {
    value.is_some_and(|v| v > threshold)
}

/// The scoring table, in evaluation order.
pub static RISK_RULES: [RiskRule; 16] = [
    RiskRule {
        factor: RiskFactor::MaleSex,
        tiers: &[tier(|i| i.sex == Sex::Male, 1.2)],
    },
    RiskRule {
        factor: RiskFactor::Smoking,
        tiers: &[tier(|i| i.smoking, 1.3)],
    },
    RiskRule {
        factor: RiskFactor::Diabetes,
        tiers: &[tier(|i| i.diabetes, 1.4)],
    },
    RiskRule {
        factor: RiskFactor::HighBloodPressure,
        tiers: &[tier(
            |i| above(i.blood_pressure_mm_hg, BLOOD_PRESSURE_THRESHOLD),
            1.2,
        )],
    },
    RiskRule {
        factor: RiskFactor::HighCholesterol,
        tiers: &[tier(
            |i| above(i.cholesterol_mmol_l, CHOLESTEROL_THRESHOLD),
            1.2,
        )],
    },
    RiskRule {
        factor: RiskFactor::HighBmi,
        tiers: &[tier(|i| above(i.bmi, BMI_THRESHOLD), 1.2)],
    },
    RiskRule {
        factor: RiskFactor::AtrialFibrillation,
        tiers: &[tier(|i| i.atrial_fibrillation, 1.3)],
    },
    RiskRule {
        factor: RiskFactor::RheumatoidArthritis,
        tiers: &[tier(|i| i.rheumatoid_arthritis, 1.1)],
    },
    RiskRule {
        factor: RiskFactor::SedentaryLifestyle,
        tiers: &[
            tier(|i| i.physical_activity == PhysicalActivity::Sedentary, 1.3),
            tier(|i| i.physical_activity == PhysicalActivity::Moderate, 1.1),
        ],
    },
    RiskRule {
        factor: RiskFactor::UnhealthyDiet,
        tiers: &[
            tier(|i| i.diet_quality == DietQuality::Unhealthy, 1.3),
            tier(|i| i.diet_quality == DietQuality::Balanced, 1.1),
        ],
    },
    RiskRule {
        factor: RiskFactor::FrequentAlcohol,
        tiers: &[tier(
            |i| i.alcohol_consumption == AlcoholConsumption::Frequent,
            1.2,
        )],
    },
    RiskRule {
        factor: RiskFactor::FamilyHistory,
        tiers: &[tier(|i| i.family_history, 1.4)],
    },
    RiskRule {
        factor: RiskFactor::MentalHealthIssues,
        tiers: &[tier(|i| i.mental_health_issues, 1.2)],
    },
    RiskRule {
        factor: RiskFactor::ShortSleep,
        tiers: &[tier(|i| i.sleep_duration == SleepDuration::LessThan6h, 1.3)],
    },
    RiskRule {
        factor: RiskFactor::ChronicKidneyDisease,
        tiers: &[tier(|i| i.chronic_kidney_disease, 1.3)],
    },
    RiskRule {
        factor: RiskFactor::MigraineHistory,
        tiers: &[tier(|i| i.migraine_history, 1.1)],
    },
];

/// Look up the rule for `factor`.
#[must_use]
pub fn rule_for(factor: RiskFactor) -> Option<&'static RiskRule> {
    RISK_RULES.iter().find(|r| r.factor == factor)
}

/// Round to two decimals, ties away from zero.
#[must_use]
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimate the 10-year cardiovascular risk for `input`.
///
/// # Errors
/// Returns `LifelineError::InvalidInput` if any field is outside its
/// declared domain; no score is computed in that case.
pub fn score(input: &AssessmentInput) -> Result<RiskResult, LifelineError> {
    if let Err(errors) = input.validate() {
        tracing::warn!(violations = errors.len(), "Rejected out-of-domain assessment input");
        return Err(LifelineError::InvalidInput(errors));
    }

    let mut factors = FactorMap::neutral();
    let mut raw = f64::from(input.age) * BASE_RISK_PER_YEAR;
    for rule in &RISK_RULES {
        let multiplier = rule.evaluate(input);
        factors.set(rule.factor, multiplier);
        raw *= multiplier;
    }

    let percentage = round_percentage(raw.min(MAX_PERCENTAGE));

    tracing::debug!(
        elevated = factors.elevated().count(),
        capped = raw >= MAX_PERCENTAGE,
        "Risk score computed"
    );

    Ok(RiskResult {
        percentage,
        factors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn worst_case(age: u32) -> AssessmentInput {
        AssessmentInput {
            age,
            sex: Sex::Male,
            smoking: true,
            diabetes: true,
            atrial_fibrillation: true,
            rheumatoid_arthritis: true,
            family_history: true,
            mental_health_issues: true,
            chronic_kidney_disease: true,
            migraine_history: true,
            blood_pressure_mm_hg: Some(200.0),
            cholesterol_mmol_l: Some(10.0),
            bmi: Some(50.0),
            physical_activity: PhysicalActivity::Sedentary,
            diet_quality: DietQuality::Unhealthy,
            alcohol_consumption: AlcoholConsumption::Frequent,
            sleep_duration: SleepDuration::LessThan6h,
        }
    }

    #[test]
    fn test_table_covers_every_factor_once() {
        let factors: Vec<RiskFactor> = RISK_RULES.iter().map(|r| r.factor).collect();
        assert_eq!(factors, RiskFactor::ALL.to_vec());
    }

    #[test]
    fn test_neutral_input_scores_age_only() {
        let result = score(&AssessmentInput::new(25, Sex::Female)).expect("Should score");
        assert!(close(result.percentage, 3.75));
        assert_eq!(result.factors.len(), 16);
        assert_eq!(result.factors.elevated().count(), 0);

        let oldest = score(&AssessmentInput::new(84, Sex::Female)).expect("Should score");
        assert!(close(oldest.percentage, 12.6));
    }

    #[test]
    fn test_reference_scenario() {
        let mut input = AssessmentInput::new(50, Sex::Male);
        input.smoking = true;
        input.blood_pressure_mm_hg = Some(150.0);
        input.cholesterol_mmol_l = Some(6.0);
        input.bmi = Some(32.0);
        input.physical_activity = PhysicalActivity::Sedentary;

        let result = score(&input).expect("Should score");

        // 7.5 * 1.2 * 1.3 * 1.2 * 1.2 * 1.2 * 1.3 = 26.28288
        assert!(close(result.percentage, 26.28));
        assert!(close(result.factors.get(RiskFactor::MaleSex), 1.2));
        assert!(close(result.factors.get(RiskFactor::Smoking), 1.3));
        assert!(close(result.factors.get(RiskFactor::HighBloodPressure), 1.2));
        assert!(close(result.factors.get(RiskFactor::HighCholesterol), 1.2));
        assert!(close(result.factors.get(RiskFactor::HighBmi), 1.2));
        assert!(close(result.factors.get(RiskFactor::SedentaryLifestyle), 1.3));
        assert_eq!(result.factors.elevated().count(), 6);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut input = AssessmentInput::new(40, Sex::Female);
        input.blood_pressure_mm_hg = Some(140.0);
        input.cholesterol_mmol_l = Some(5.0);
        input.bmi = Some(30.0);

        let result = score(&input).expect("Should score");
        assert!(close(result.factors.get(RiskFactor::HighBloodPressure), NEUTRAL));
        assert!(close(result.factors.get(RiskFactor::HighCholesterol), NEUTRAL));
        assert!(close(result.factors.get(RiskFactor::HighBmi), NEUTRAL));
        assert!(close(result.percentage, 6.0));
    }

    #[test]
    fn test_graded_lifestyle_tiers() {
        let mut input = AssessmentInput::new(60, Sex::Female);
        input.physical_activity = PhysicalActivity::Moderate;
        input.diet_quality = DietQuality::Balanced;
        let result = score(&input).expect("Should score");
        assert!(close(result.factors.get(RiskFactor::SedentaryLifestyle), 1.1));
        assert!(close(result.factors.get(RiskFactor::UnhealthyDiet), 1.1));

        input.physical_activity = PhysicalActivity::Active;
        input.diet_quality = DietQuality::Healthy;
        input.alcohol_consumption = AlcoholConsumption::Occasionally;
        input.sleep_duration = SleepDuration::MoreThan8h;
        let result = score(&input).expect("Should score");
        assert_eq!(result.factors.elevated().count(), 0);
    }

    #[test]
    fn test_score_saturates_at_cap() {
        let result = score(&worst_case(84)).expect("Should score");
        assert!(close(result.percentage, 100.0));
        assert!(result.is_capped());
        assert_eq!(result.factors.elevated().count(), 16);
    }

    #[test]
    fn test_out_of_domain_input_fails_fast() {
        let mut input = AssessmentInput::new(10, Sex::Male);
        input.bmi = Some(f64::INFINITY);
        match score(&input) {
            Err(LifelineError::InvalidInput(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_round_percentage() {
        assert!(close(round_percentage(26.28288), 26.28));
        assert!(close(round_percentage(3.75), 3.75));
        assert!(close(round_percentage(12.345_678), 12.35));
    }

    fn any_input() -> impl Strategy<Value = AssessmentInput> {
        let flags = proptest::collection::vec(any::<bool>(), 9);
        let measurements = (
            proptest::option::of(80.0f64..=200.0),
            proptest::option::of(2.0f64..=10.0),
            proptest::option::of(15.0f64..=50.0),
        );
        let choices = (0usize..4, 0usize..4, 0usize..4, 0usize..4);
        (25u32..=84, flags, measurements, choices).prop_map(
            |(age, flags, (bp, chol, bmi), (pa, diet, alcohol, sleep))| AssessmentInput {
                age,
                sex: if flags[0] { Sex::Male } else { Sex::Female },
                smoking: flags[1],
                diabetes: flags[2],
                atrial_fibrillation: flags[3],
                rheumatoid_arthritis: flags[4],
                family_history: flags[5],
                mental_health_issues: flags[6],
                chronic_kidney_disease: flags[7],
                migraine_history: flags[8],
                blood_pressure_mm_hg: bp,
                cholesterol_mmol_l: chol,
                bmi,
                physical_activity: [
                    PhysicalActivity::NotSpecified,
                    PhysicalActivity::Sedentary,
                    PhysicalActivity::Moderate,
                    PhysicalActivity::Active,
                ][pa],
                diet_quality: [
                    DietQuality::NotSpecified,
                    DietQuality::Unhealthy,
                    DietQuality::Balanced,
                    DietQuality::Healthy,
                ][diet],
                alcohol_consumption: [
                    AlcoholConsumption::NotSpecified,
                    AlcoholConsumption::Never,
                    AlcoholConsumption::Occasionally,
                    AlcoholConsumption::Frequent,
                ][alcohol],
                sleep_duration: [
                    SleepDuration::NotSpecified,
                    SleepDuration::LessThan6h,
                    SleepDuration::SixToEight,
                    SleepDuration::MoreThan8h,
                ][sleep],
            },
        )
    }

    type BoolField = fn(&mut AssessmentInput) -> &mut bool;

    const BOOL_FIELDS: [BoolField; 8] = [
        |i| &mut i.smoking,
        |i| &mut i.diabetes,
        |i| &mut i.atrial_fibrillation,
        |i| &mut i.rheumatoid_arthritis,
        |i| &mut i.family_history,
        |i| &mut i.mental_health_issues,
        |i| &mut i.chronic_kidney_disease,
        |i| &mut i.migraine_history,
    ];

    proptest! {
        #[test]
        fn prop_percentage_is_bounded(input in any_input()) {
            let result = score(&input).expect("valid input");
            prop_assert!(result.percentage >= 0.0);
            prop_assert!(result.percentage <= MAX_PERCENTAGE);
        }

        #[test]
        fn prop_multipliers_come_from_the_table(input in any_input()) {
            let result = score(&input).expect("valid input");
            prop_assert_eq!(result.factors.len(), RISK_RULES.len());
            for (factor, m) in result.factors.iter() {
                let rule = rule_for(factor).expect("every factor has a rule");
                prop_assert!(rule.possible_multipliers().any(|p| p == m));
            }
        }

        #[test]
        fn prop_blank_measurements_are_neutral(mut input in any_input()) {
            input.blood_pressure_mm_hg = None;
            input.cholesterol_mmol_l = None;
            input.bmi = None;
            let result = score(&input).expect("valid input");
            prop_assert_eq!(result.factors.get(RiskFactor::HighBloodPressure), NEUTRAL);
            prop_assert_eq!(result.factors.get(RiskFactor::HighCholesterol), NEUTRAL);
            prop_assert_eq!(result.factors.get(RiskFactor::HighBmi), NEUTRAL);
        }

        #[test]
        fn prop_boolean_factors_are_monotonic(input in any_input(), field in 0usize..8) {
            let mut off = input.clone();
            *BOOL_FIELDS[field](&mut off) = false;
            let mut on = input;
            *BOOL_FIELDS[field](&mut on) = true;

            let low = score(&off).expect("valid input").percentage;
            let high = score(&on).expect("valid input").percentage;
            prop_assert!(high >= low);
        }

        #[test]
        fn prop_scoring_is_idempotent(input in any_input()) {
            let first = score(&input).expect("valid input");
            let second = score(&input).expect("valid input");
            prop_assert_eq!(first.percentage.to_bits(), second.percentage.to_bits());
            prop_assert_eq!(first, second);
        }
    }
}
