//! Extracted entity bag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Words that follow "patient" in ordinary searches without naming one
const NON_IDENTIFIER_WORDS: &[&str] = &[
    "with", "who", "whose", "from", "for", "and", "or", "that", "in", "on", "at", "of", "is",
    "over", "under", "above", "below", "aged", "age", "born", "having", "has", "named", "name",
    "records", "record", "data", "history", "information", "details", "list", "id", "the", "a",
    "by", "to",
];

/// Whether a token captured after "patient" identifies a patient
///
/// Tokens containing a digit always count.
pub fn is_patient_identifier(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit()) || !NON_IDENTIFIER_WORDS.contains(&token)
}

/// Fixed extraction buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Conditions,
    Ages,
    Genders,
    Names,
    PatientIds,
    Observations,
    Medications,
    Symptoms,
    BodyParts,
    TimePeriods,
    Numbers,
    SeverityIndicators,
}

impl EntityCategory {
    /// All categories in canonical order
    pub const ALL: [EntityCategory; 12] = [
        Self::Conditions,
        Self::Ages,
        Self::Genders,
        Self::Names,
        Self::PatientIds,
        Self::Observations,
        Self::Medications,
        Self::Symptoms,
        Self::BodyParts,
        Self::TimePeriods,
        Self::Numbers,
        Self::SeverityIndicators,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Conditions => "conditions",
            Self::Ages => "ages",
            Self::Genders => "genders",
            Self::Names => "names",
            Self::PatientIds => "patient_ids",
            Self::Observations => "observations",
            Self::Medications => "medications",
            Self::Symptoms => "symptoms",
            Self::BodyParts => "body_parts",
            Self::TimePeriods => "time_periods",
            Self::Numbers => "numbers",
            Self::SeverityIndicators => "severity_indicators",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities recognized in a single query
///
/// Every category keeps discovery order and is not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBag {
    pub conditions: Vec<String>,
    pub ages: Vec<u32>,
    pub genders: Vec<String>,
    pub names: Vec<String>,
    pub patient_ids: Vec<String>,
    pub observations: Vec<String>,
    pub medications: Vec<String>,
    pub symptoms: Vec<String>,
    pub body_parts: Vec<String>,
    pub time_periods: Vec<String>,
    pub numbers: Vec<u32>,
    pub severity_indicators: Vec<String>,
}

impl EntityBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values in a category
    pub fn count(&self, category: EntityCategory) -> usize {
        match category {
            EntityCategory::Ages => self.ages.len(),
            EntityCategory::Numbers => self.numbers.len(),
            other => self.text(other).map_or(0, |v| v.len()),
        }
    }

    /// Whether a category has at least one value
    pub fn has(&self, category: EntityCategory) -> bool {
        self.count(category) > 0
    }

    /// Text values of a category; `None` for the numeric categories
    pub fn text(&self, category: EntityCategory) -> Option<&[String]> {
        match category {
            EntityCategory::Conditions => Some(&self.conditions),
            EntityCategory::Genders => Some(&self.genders),
            EntityCategory::Names => Some(&self.names),
            EntityCategory::PatientIds => Some(&self.patient_ids),
            EntityCategory::Observations => Some(&self.observations),
            EntityCategory::Medications => Some(&self.medications),
            EntityCategory::Symptoms => Some(&self.symptoms),
            EntityCategory::BodyParts => Some(&self.body_parts),
            EntityCategory::TimePeriods => Some(&self.time_periods),
            EntityCategory::SeverityIndicators => Some(&self.severity_indicators),
            EntityCategory::Ages | EntityCategory::Numbers => None,
        }
    }

    /// Values of a category rendered as strings
    pub fn values(&self, category: EntityCategory) -> Vec<String> {
        match category {
            EntityCategory::Ages => self.ages.iter().map(u32::to_string).collect(),
            EntityCategory::Numbers => self.numbers.iter().map(u32::to_string).collect(),
            other => self.text(other).map(<[String]>::to_vec).unwrap_or_default(),
        }
    }

    /// Total number of values across all categories
    pub fn total_values(&self) -> usize {
        EntityCategory::ALL.iter().map(|c| self.count(*c)).sum()
    }

    /// Categories holding at least one value, in canonical order
    pub fn non_empty_categories(&self) -> impl Iterator<Item = EntityCategory> + '_ {
        EntityCategory::ALL.into_iter().filter(|c| self.has(*c))
    }

    pub fn is_empty(&self) -> bool {
        self.total_values() == 0
    }

    /// Patient ids that name a patient, skipping connectives such as
    /// "with" in "patient with diabetes"
    pub fn patient_references(&self) -> impl Iterator<Item = &str> + '_ {
        self.patient_ids
            .iter()
            .map(String::as_str)
            .filter(|id| is_patient_identifier(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_and_categories() {
        let bag = EntityBag {
            conditions: vec!["diabetes".into()],
            ages: vec![50, 65],
            ..Default::default()
        };
        assert_eq!(bag.total_values(), 3);
        assert_eq!(
            bag.non_empty_categories().collect::<Vec<_>>(),
            vec![EntityCategory::Conditions, EntityCategory::Ages]
        );
        assert_eq!(bag.values(EntityCategory::Ages), vec!["50", "65"]);
        assert!(bag.text(EntityCategory::Ages).is_none());
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&EntityBag::new()).unwrap();
        let keys: Vec<&str> = EntityCategory::ALL.iter().map(|c| c.as_str()).collect();
        let mut last = 0;
        for key in keys {
            let pos = json.find(&format!("\"{key}\"")).unwrap();
            assert!(pos >= last, "{key} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_patient_references_skip_connectives() {
        let bag = EntityBag {
            patient_ids: vec!["with".into(), "123".into(), "jdoe".into(), "over".into()],
            ..Default::default()
        };
        assert_eq!(bag.patient_references().collect::<Vec<_>>(), vec!["123", "jdoe"]);
        assert!(is_patient_identifier("a-17"));
        assert!(!is_patient_identifier("named"));
    }

    #[test]
    fn test_empty_bag() {
        assert!(EntityBag::new().is_empty());
        assert_eq!(EntityBag::new().non_empty_categories().count(), 0);
    }
}
