//! Recommendation records produced for an assessment.

use serde::{Deserialize, Serialize};

/// Number of action steps every recommendation carries.
pub const TIPS_PER_RECOMMENDATION: usize = 5;

/// One actionable recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Short unique key, e.g. "Blood Pressure"
    pub key: String,

    /// Display title
    pub title: String,

    /// Ordered action steps
    pub tips: [String; TIPS_PER_RECOMMENDATION],

    /// Expected benefit of following the advice
    pub impact_statement: String,
}

/// Ordered, key-unique collection of recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    items: Vec<Recommendation>,
}

impl RecommendationSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recommendation unless its key is already present.
    ///
    /// Returns `true` if it was inserted.
    pub fn insert(&mut self, recommendation: Recommendation) -> bool {
        if self.contains(&recommendation.key) {
            return false;
        }
        self.items.push(recommendation);
        true
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|r| r.key == key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Recommendation> {
        self.items.iter().find(|r| r.key == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|r| r.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recommendation at `index` in insertion order.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<&Recommendation> {
        self.items.get(index)
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(key: &str) -> Recommendation {
        Recommendation {
            key: key.to_string(),
            title: format!("{key} title"),
            tips: std::array::from_fn(|i| format!("tip {i}")),
            impact_statement: "helps".to_string(),
        }
    }

    #[test]
    fn test_insert_keeps_order_and_rejects_duplicates() {
        let mut set = RecommendationSet::new();
        assert!(set.insert(rec("Smoking")));
        assert!(set.insert(rec("Diet")));
        assert!(!set.insert(rec("Smoking")));

        assert_eq!(set.len(), 2);
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["Smoking", "Diet"]);
        assert_eq!(set.nth(1).map(|r| r.key.as_str()), Some("Diet"));
        assert!(set.get("Sleep").is_none());
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let mut set = RecommendationSet::new();
        set.insert(rec("Weight"));
        let json = serde_json::to_value(&set).expect("Should serialize");
        assert_eq!(json[0]["key"], "Weight");
        assert_eq!(json[0]["impactStatement"], "helps");
        assert_eq!(json[0]["tips"].as_array().map(Vec::len), Some(5));
    }
}
