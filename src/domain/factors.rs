//! Risk factor labels and the per-assessment multiplier map.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Multiplier applied when a factor is absent, false or not specified.
pub const NEUTRAL: f64 = 1.0;

/// One row of the scoring table.
///
/// Declaration order is the table order; `Ord` follows it so that a
/// [`FactorMap`] always iterates the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "Sex (Male)")]
    MaleSex,
    #[serde(rename = "Smoking")]
    Smoking,
    #[serde(rename = "Diabetes")]
    Diabetes,
    #[serde(rename = "High Blood Pressure")]
    HighBloodPressure,
    #[serde(rename = "High Cholesterol")]
    HighCholesterol,
    #[serde(rename = "High BMI")]
    HighBmi,
    #[serde(rename = "Atrial Fibrillation")]
    AtrialFibrillation,
    #[serde(rename = "Rheumatoid Arthritis")]
    RheumatoidArthritis,
    #[serde(rename = "Sedentary Lifestyle")]
    SedentaryLifestyle,
    #[serde(rename = "Unhealthy Diet")]
    UnhealthyDiet,
    #[serde(rename = "Frequent Alcohol Consumption")]
    FrequentAlcohol,
    #[serde(rename = "Family History")]
    FamilyHistory,
    #[serde(rename = "Mental Health Issues")]
    MentalHealthIssues,
    #[serde(rename = "Short Sleep Duration")]
    ShortSleep,
    #[serde(rename = "Chronic Kidney Disease")]
    ChronicKidneyDisease,
    #[serde(rename = "Migraine History")]
    MigraineHistory,
}

impl RiskFactor {
    /// Every factor, in table order.
    pub const ALL: [Self; 16] = [
        Self::MaleSex,
        Self::Smoking,
        Self::Diabetes,
        Self::HighBloodPressure,
        Self::HighCholesterol,
        Self::HighBmi,
        Self::AtrialFibrillation,
        Self::RheumatoidArthritis,
        Self::SedentaryLifestyle,
        Self::UnhealthyDiet,
        Self::FrequentAlcohol,
        Self::FamilyHistory,
        Self::MentalHealthIssues,
        Self::ShortSleep,
        Self::ChronicKidneyDisease,
        Self::MigraineHistory,
    ];

    /// Human-readable factor name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MaleSex => "Sex (Male)",
            Self::Smoking => "Smoking",
            Self::Diabetes => "Diabetes",
            Self::HighBloodPressure => "High Blood Pressure",
            Self::HighCholesterol => "High Cholesterol",
            Self::HighBmi => "High BMI",
            Self::AtrialFibrillation => "Atrial Fibrillation",
            Self::RheumatoidArthritis => "Rheumatoid Arthritis",
            Self::SedentaryLifestyle => "Sedentary Lifestyle",
            Self::UnhealthyDiet => "Unhealthy Diet",
            Self::FrequentAlcohol => "Frequent Alcohol Consumption",
            Self::FamilyHistory => "Family History",
            Self::MentalHealthIssues => "Mental Health Issues",
            Self::ShortSleep => "Short Sleep Duration",
            Self::ChronicKidneyDisease => "Chronic Kidney Disease",
            Self::MigraineHistory => "Migraine History",
        }
    }

    /// Whether lifestyle change or treatment can move this factor.
    #[must_use]
    pub fn is_modifiable(self) -> bool {
        !matches!(self, Self::MaleSex | Self::FamilyHistory)
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a deserialized multiplier map is incomplete or malformed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactorMapError {
    #[error("Missing multiplier for factor: {0}")]
    Missing(RiskFactor),

    #[error("Multiplier for {factor} must be positive and finite, got {value}")]
    InvalidMultiplier { factor: RiskFactor, value: f64 },
}

/// Complete set of per-factor multipliers for one assessment.
///
/// Every [`RiskFactor`] is always present; a factor that did not apply
/// carries [`NEUTRAL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<RiskFactor, f64>", into = "BTreeMap<RiskFactor, f64>")]
pub struct FactorMap {
    multipliers: BTreeMap<RiskFactor, f64>,
}

impl FactorMap {
    /// A map with every factor at the neutral value.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            multipliers: RiskFactor::ALL.iter().map(|f| (*f, NEUTRAL)).collect(),
        }
    }

    /// Return a copy with `factor` set to `multiplier`.
    #[must_use]
    pub fn with(mut self, factor: RiskFactor, multiplier: f64) -> Self {
        self.set(factor, multiplier);
        self
    }

    /// Set the multiplier for one factor.
    pub fn set(&mut self, factor: RiskFactor, multiplier: f64) {
        self.multipliers.insert(factor, multiplier);
    }

    /// Multiplier for `factor`.
    #[must_use]
    pub fn get(&self, factor: RiskFactor) -> f64 {
        self.multipliers.get(&factor).copied().unwrap_or(NEUTRAL)
    }

    /// Whether `factor` raises the risk (multiplier strictly above neutral).
    #[must_use]
    pub fn is_elevated(&self, factor: RiskFactor) -> bool {
        self.get(factor) > NEUTRAL
    }

    /// Iterate over (factor, multiplier) pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (RiskFactor, f64)> + '_ {
        self.multipliers.iter().map(|(f, m)| (*f, *m))
    }

    /// Number of factors (always the full table).
    #[must_use]
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// Factors that raise the risk, in table order.
    pub fn elevated(&self) -> impl Iterator<Item = (RiskFactor, f64)> + '_ {
        self.iter().filter(|(_, m)| *m > NEUTRAL)
    }

    /// All factors sorted by multiplier, highest first.
    ///
    /// The sort is stable, so equal multipliers keep table order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(RiskFactor, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// The `n` strongest elevated factors; neutral factors are never returned.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(RiskFactor, f64)> {
        self.ranked()
            .into_iter()
            .filter(|(_, m)| *m > NEUTRAL)
            .take(n)
            .collect()
    }
}

impl Default for FactorMap {
    fn default() -> Self {
        Self::neutral()
    }
}

impl TryFrom<BTreeMap<RiskFactor, f64>> for FactorMap {
    type Error = FactorMapError;

    fn try_from(multipliers: BTreeMap<RiskFactor, f64>) -> Result<Self, Self::Error> {
        for factor in RiskFactor::ALL {
            let value = *multipliers
                .get(&factor)
                .ok_or(FactorMapError::Missing(factor))?;
            if !value.is_finite() || value <= 0.0 {
                return Err(FactorMapError::InvalidMultiplier { factor, value });
            }
        }
        Ok(Self { multipliers })
    }
}

impl From<FactorMap> for BTreeMap<RiskFactor, f64> {
    fn from(map: FactorMap) -> Self {
        map.multipliers
    }
}
