//! Recommendation engine: turns elevated risk factors into a prevention plan.
//!
//! Templates are checked in catalog order and included when their factor is
//! elevated. Plans with fewer than [`MIN_RECOMMENDATIONS`] entries are
//! topped up from [`FALLBACKS`].

use crate::domain::{FactorMap, Recommendation, RecommendationSet, RiskFactor};

/// Smallest plan ever returned.
pub const MIN_RECOMMENDATIONS: usize = 3;

/// Static content of one recommendation.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub key: &'static str,
    pub title: &'static str,
    pub tips: [&'static str; 5],
    pub impact: &'static str,
}

impl Template {
    #[must_use]
    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            key: self.key.to_string(),
            title: self.title.to_string(),
            tips: self.tips.map(str::to_string),
            impact_statement: self.impact.to_string(),
        }
    }
}

/// Factor-triggered templates, in evaluation order.
pub static CATALOG: [(RiskFactor, Template); 8] = [
    (
        RiskFactor::Smoking,
        Template {
            key: "Smoking",
            title: "Quit Smoking",
            tips: [
                "Set a specific quit date within the next 2 weeks",
                "Speak to your doctor about nicotine replacement therapies",
                "Join a support group or seek counseling",
                "Download a quit-smoking app to track progress",
                "Avoid triggers and replace smoking with healthier habits",
            ],
            impact: "Quitting smoking can reduce your risk by up to 30% within 1 year",
        },
    ),
    (
        RiskFactor::HighBloodPressure,
        Template {
            key: "Blood Pressure",
            title: "Manage Blood Pressure",
            tips: [
                "Reduce sodium intake to less than 2,300mg per day",
                "Exercise regularly - aim for 150 minutes per week",
                "Practice stress reduction techniques like meditation",
                "Monitor your blood pressure at home regularly",
                "Take prescribed medications as directed",
            ],
            impact: "Reducing blood pressure to normal levels can decrease risk by up to 25%",
        },
    ),
    (
        RiskFactor::HighCholesterol,
        Template {
            key: "Cholesterol",
            title: "Improve Cholesterol Levels",
            tips: [
                "Increase soluble fiber intake (oats, beans, fruits)",
                "Limit saturated fat and eliminate trans fat",
                "Include omega-3 rich foods like fish twice weekly",
                "Consider plant stanols/sterols in your diet",
                "Maintain a consistent exercise regimen",
            ],
            impact: "Optimal cholesterol management can reduce risk by 20-35%",
        },
    ),
    (
        RiskFactor::HighBmi,
        Template {
            key: "Weight",
            title: "Achieve Healthy Weight",
            tips: [
                "Aim for gradual weight loss of 1-2 pounds per week",
                "Focus on portion control rather than strict dieting",
                "Include strength training to maintain muscle mass",
                "Track food intake with a journal or app",
                "Set realistic goals based on BMI targets",
            ],
            impact: "A 5-10% weight reduction can lower heart disease risk by up to 20%",
        },
    ),
    (
        RiskFactor::SedentaryLifestyle,
        Template {
            key: "Exercise",
            title: "Increase Physical Activity",
            tips: [
                "Start with 10-minute walks and gradually increase duration",
                "Aim for 150 minutes of moderate or 75 minutes of vigorous activity weekly",
                "Include strength training 2-3 times per week",
                "Find activities you enjoy to maintain consistency",
                "Break up sitting time with short movement breaks",
            ],
            impact: "Regular exercise can reduce heart disease risk by 30-40%",
        },
    ),
    (
        RiskFactor::UnhealthyDiet,
        Template {
            key: "Diet",
            title: "Improve Diet Quality",
            tips: [
                "Follow a Mediterranean or DASH eating pattern",
                "Increase fruits and vegetables to 5+ servings daily",
                "Choose whole grains over refined carbohydrates",
                "Limit processed foods and added sugars",
                "Prepare more meals at home",
            ],
            impact: "A heart-healthy diet can lower risk by 25-30%",
        },
    ),
    (
        RiskFactor::FrequentAlcohol,
        Template {
            key: "Alcohol",
            title: "Moderate Alcohol Consumption",
            tips: [
                "Limit to 1 drink daily for women, 2 for men",
                "Have alcohol-free days each week",
                "Choose beverages with lower alcohol content",
                "Drink water between alcoholic beverages",
                "Avoid binge drinking completely",
            ],
            impact: "Proper alcohol moderation can reduce cardiovascular risk by 15-20%",
        },
    ),
    (
        RiskFactor::ShortSleep,
        Template {
            key: "Sleep",
            title: "Improve Sleep Quality",
            tips: [
                "Maintain consistent sleep and wake times",
                "Create a relaxing bedtime routine",
                "Keep bedroom cool, dark, and quiet",
                "Limit screen time 1-2 hours before bed",
                "Aim for 7-9 hours of quality sleep each night",
            ],
            impact: "Proper sleep can reduce heart disease risk by 10-15%",
        },
    ),
];

/// General advice appended when too few factors are elevated.
pub static FALLBACKS: [Template; 3] = [
    Template {
        key: "Diet",
        title: "Heart-Healthy Diet",
        tips: [
            "Increase consumption of fruits, vegetables, and whole grains",
            "Choose lean proteins and limit red meat",
            "Include fish rich in omega-3 fatty acids twice weekly",
            "Minimize sodium, sugar, and processed foods",
            "Consider the DASH or Mediterranean eating pattern",
        ],
        impact: "A heart-healthy diet can improve overall cardiovascular health",
    },
    Template {
        key: "Exercise",
        title: "Regular Physical Activity",
        tips: [
            "Aim for at least 150 minutes of moderate activity weekly",
            "Include both aerobic exercise and strength training",
            "Find physical activities you enjoy to maintain consistency",
            "Start slowly and gradually increase intensity",
            "Break up sitting time with short movement breaks",
        ],
        impact: "Regular exercise improves heart function and overall health",
    },
    Template {
        key: "Preventive Care",
        title: "Regular Medical Check-ups",
        tips: [
            "Schedule annual physical examinations",
            "Monitor blood pressure, cholesterol, and blood sugar regularly",
            "Discuss appropriate screening tests with your doctor",
            "Follow through with recommended vaccinations",
            "Maintain open communication with your healthcare provider",
        ],
        impact: "Regular preventive care enables early intervention",
    },
];

/// Build the prevention plan for a factor map.
#[must_use]
pub fn recommend(factors: &FactorMap) -> RecommendationSet {
    let mut set = RecommendationSet::new();

    for (factor, template) in &CATALOG {
        if factors.is_elevated(*factor) {
            set.insert(template.to_recommendation());
        }
    }

    let triggered = set.len();
    if triggered < MIN_RECOMMENDATIONS {
        // All three fallbacks are offered, not just enough to reach the minimum.
        for template in &FALLBACKS {
            set.insert(template.to_recommendation());
        }
    }

    tracing::debug!(
        triggered,
        total = set.len(),
        "Recommendations generated"
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NEUTRAL, TIPS_PER_RECOMMENDATION};

    fn keys(set: &RecommendationSet) -> Vec<&str> {
        set.keys().collect()
    }

    #[test]
    fn test_neutral_map_gets_fallbacks_only() {
        let set = recommend(&FactorMap::neutral());
        assert_eq!(keys(&set), vec!["Diet", "Exercise", "Preventive Care"]);
        assert_eq!(
            set.get("Diet").map(|r| r.title.as_str()),
            Some("Heart-Healthy Diet")
        );
    }

    #[test]
    fn test_reference_scenario_needs_no_backfill() {
        let factors = FactorMap::neutral()
            .with(RiskFactor::MaleSex, 1.2)
            .with(RiskFactor::Smoking, 1.3)
            .with(RiskFactor::HighBloodPressure, 1.2)
            .with(RiskFactor::HighCholesterol, 1.2)
            .with(RiskFactor::HighBmi, 1.2)
            .with(RiskFactor::SedentaryLifestyle, 1.3);

        let set = recommend(&factors);
        assert_eq!(
            keys(&set),
            vec!["Smoking", "Blood Pressure", "Cholesterol", "Weight", "Exercise"]
        );
        assert_eq!(
            set.get("Exercise").map(|r| r.title.as_str()),
            Some("Increase Physical Activity")
        );
    }

    #[test]
    fn test_backfill_skips_keys_already_triggered() {
        let factors = FactorMap::neutral()
            .with(RiskFactor::UnhealthyDiet, 1.1)
            .with(RiskFactor::ShortSleep, 1.3);

        let set = recommend(&factors);
        assert_eq!(keys(&set), vec!["Diet", "Sleep", "Exercise", "Preventive Care"]);
        // The triggered diet template wins over the general one.
        assert_eq!(
            set.get("Diet").map(|r| r.title.as_str()),
            Some("Improve Diet Quality")
        );
    }

    #[test]
    fn test_exactly_three_triggered_skips_backfill() {
        let factors = FactorMap::neutral()
            .with(RiskFactor::Smoking, 1.3)
            .with(RiskFactor::FrequentAlcohol, 1.2)
            .with(RiskFactor::ShortSleep, 1.3);

        let set = recommend(&factors);
        assert_eq!(keys(&set), vec!["Smoking", "Alcohol", "Sleep"]);
    }

    #[test]
    fn test_non_catalog_factors_do_not_trigger() {
        let factors = FactorMap::neutral()
            .with(RiskFactor::Diabetes, 1.4)
            .with(RiskFactor::FamilyHistory, 1.4)
            .with(RiskFactor::MaleSex, 1.2);

        let set = recommend(&factors);
        assert_eq!(keys(&set), vec!["Diet", "Exercise", "Preventive Care"]);
    }

    #[test]
    fn test_every_factor_elevated() {
        let factors = RiskFactor::ALL
            .iter()
            .fold(FactorMap::neutral(), |m, f| m.with(*f, 1.3));
        let set = recommend(&factors);
        assert_eq!(
            keys(&set),
            vec![
                "Smoking",
                "Blood Pressure",
                "Cholesterol",
                "Weight",
                "Exercise",
                "Diet",
                "Alcohol",
                "Sleep"
            ]
        );
    }

    #[test]
    fn test_neutral_multiplier_is_not_elevated() {
        let factors = FactorMap::neutral().with(RiskFactor::Smoking, NEUTRAL);
        assert!(!recommend(&factors).contains("Smoking"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let factors = FactorMap::neutral()
            .with(RiskFactor::HighBmi, 1.2)
            .with(RiskFactor::Smoking, 1.3);
        assert_eq!(recommend(&factors), recommend(&factors));
    }

    #[test]
    fn test_catalog_content_is_complete() {
        for template in CATALOG.iter().map(|(_, t)| t).chain(FALLBACKS.iter()) {
            let rec = template.to_recommendation();
            assert_eq!(rec.tips.len(), TIPS_PER_RECOMMENDATION);
            assert!(rec.tips.iter().all(|t| !t.is_empty()));
            assert!(!rec.title.is_empty());
            assert!(!rec.impact_statement.is_empty());
        }
    }
}
