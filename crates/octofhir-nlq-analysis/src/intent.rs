//! Intent classification
//!
//! Intents are assigned by an ordered rule table evaluated first-match-wins.
//! Urgent and specific rules come before the generic resource-find rules;
//! reordering the table changes results.

use crate::entities::EntityBag;
use octofhir_nlq_lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Classified purpose of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    EmergencyQuery,
    SymptomReporting,
    FindMedications,
    MedicationInquiry,
    FindPatients,
    FindConditions,
    FindObservations,
    FindAppointments,
    ScheduleAppointment,
    HealthInformation,
    GeneralInquiry,
}

impl Intent {
    pub const ALL: [Intent; 11] = [
        Self::EmergencyQuery,
        Self::SymptomReporting,
        Self::FindMedications,
        Self::MedicationInquiry,
        Self::FindPatients,
        Self::FindConditions,
        Self::FindObservations,
        Self::FindAppointments,
        Self::ScheduleAppointment,
        Self::HealthInformation,
        Self::GeneralInquiry,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmergencyQuery => "emergency_query",
            Self::SymptomReporting => "symptom_reporting",
            Self::FindMedications => "find_medications",
            Self::MedicationInquiry => "medication_inquiry",
            Self::FindPatients => "find_patients",
            Self::FindConditions => "find_conditions",
            Self::FindObservations => "find_observations",
            Self::FindAppointments => "find_appointments",
            Self::ScheduleAppointment => "schedule_appointment",
            Self::HealthInformation => "health_information",
            Self::GeneralInquiry => "general_inquiry",
        }
    }

    /// The fallback label assigned when no rule matches
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::GeneralInquiry)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const EMERGENCY_KEYWORDS: &[&str] =
    &["emergency", "urgent", "critical", "severe pain", "difficulty breathing"];
pub const REPORTING_VERBS: &[&str] = &["feel", "experiencing", "having", "suffering"];
pub const SYMPTOM_NOUNS: &[&str] = &["pain", "ache", "symptom", "problem"];
pub const MEDICATION_KEYWORDS: &[&str] = &["medication", "prescription", "drug", "pill", "dosage"];
pub const ACTION_VERBS: &[&str] = &["find", "show", "get", "list", "search"];
/// Verbs that turn a medication mention into a medication search
pub const MEDICATION_ACTION_VERBS: &[&str] = &["find", "show", "get", "list"];
pub const CONDITION_WORDS: &[&str] = &["condition", "diagnosis", "disease"];
pub const OBSERVATION_WORDS: &[&str] = &["observation", "vital", "measurement", "test", "result"];
pub const SCHEDULING_WORDS: &[&str] = &["schedule", "book", "appointment", "visit"];
pub const INFORMATION_PHRASES: &[&str] = &["what is", "tell me about", "explain", "information"];

/// Facts about a query that rule predicates inspect
pub struct Cues<'a> {
    lowered: &'a str,
    entities: &'a EntityBag,
    lexicon: &'a Lexicon,
}

impl<'a> Cues<'a> {
    /// `lowered` must already be lowercased
    pub fn new(lowered: &'a str, entities: &'a EntityBag, lexicon: &'a Lexicon) -> Self {
        Self {
            lowered,
            entities,
            lexicon,
        }
    }

    fn any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.lowered.contains(w))
    }

    fn has(&self, word: &str) -> bool {
        self.lowered.contains(word)
    }

    fn action(&self) -> bool {
        self.any(ACTION_VERBS)
    }

    fn condition_term(&self) -> bool {
        self.lexicon.conditions().contains_any(self.lowered)
    }

    fn observation_term(&self) -> bool {
        self.lexicon.observations().contains_any(self.lowered)
    }
}

/// One row of the classification table
pub struct IntentRule {
    pub name: &'static str,
    pub intent: Intent,
    predicate: fn(&Cues<'_>) -> bool,
}

impl IntentRule {
    pub fn matches(&self, cues: &Cues<'_>) -> bool {
        (self.predicate)(cues)
    }
}

impl fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentRule")
            .field("name", &self.name)
            .field("intent", &self.intent)
            .finish()
    }
}

/// Classification rules in priority order
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        name: "emergency",
        intent: Intent::EmergencyQuery,
        predicate: |c| c.any(EMERGENCY_KEYWORDS),
    },
    IntentRule {
        name: "symptom_report",
        intent: Intent::SymptomReporting,
        predicate: |c| c.any(REPORTING_VERBS) && c.any(SYMPTOM_NOUNS),
    },
    IntentRule {
        name: "medication_find",
        intent: Intent::FindMedications,
        predicate: |c| c.any(MEDICATION_KEYWORDS) && c.any(MEDICATION_ACTION_VERBS),
    },
    IntentRule {
        name: "medication_inquiry",
        intent: Intent::MedicationInquiry,
        predicate: |c| c.any(MEDICATION_KEYWORDS),
    },
    // patients as the search target; a patient referenced by id defers to
    // the resource cues below
    IntentRule {
        name: "patient_find",
        intent: Intent::FindPatients,
        predicate: |c| {
            c.action() && c.has("patient") && c.entities.patient_references().next().is_none()
        },
    },
    IntentRule {
        name: "condition_find",
        intent: Intent::FindConditions,
        predicate: |c| c.action() && (c.any(CONDITION_WORDS) || c.condition_term()),
    },
    IntentRule {
        name: "observation_find",
        intent: Intent::FindObservations,
        predicate: |c| c.action() && (c.any(OBSERVATION_WORDS) || c.observation_term()),
    },
    IntentRule {
        name: "appointment_find",
        intent: Intent::FindAppointments,
        predicate: |c| c.action() && c.has("appointment"),
    },
    IntentRule {
        name: "patient_lookup",
        intent: Intent::FindPatients,
        predicate: |c| c.action() && c.has("patient"),
    },
    IntentRule {
        name: "schedule",
        intent: Intent::ScheduleAppointment,
        predicate: |c| c.any(SCHEDULING_WORDS),
    },
    IntentRule {
        name: "information",
        intent: Intent::HealthInformation,
        predicate: |c| c.any(INFORMATION_PHRASES),
    },
    IntentRule {
        name: "implicit_patients",
        intent: Intent::FindPatients,
        predicate: |c| c.condition_term() && c.has("patient"),
    },
];

/// Assigns one [`Intent`] per query
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    lexicon: Arc<Lexicon>,
}

impl IntentClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// The rule table, in evaluation order
    pub fn rules(&self) -> &'static [IntentRule] {
        INTENT_RULES
    }

    pub fn classify(&self, query: &str, entities: &EntityBag) -> Intent {
        self.matching_rule(query, entities)
            .map_or(Intent::GeneralInquiry, |rule| rule.intent)
    }

    /// The first rule matching the query, if any
    pub fn matching_rule(&self, query: &str, entities: &EntityBag) -> Option<&'static IntentRule> {
        let lowered = query.to_lowercase();
        let cues = Cues::new(&lowered, entities, &self.lexicon);
        let rule = INTENT_RULES.iter().find(|rule| rule.matches(&cues));
        log::debug!(
            "intent rule for {:?}: {}",
            query,
            rule.map_or("default", |r| r.name)
        );
        rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<_> = INTENT_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "emergency",
                "symptom_report",
                "medication_find",
                "medication_inquiry",
                "patient_find",
                "condition_find",
                "observation_find",
                "appointment_find",
                "patient_lookup",
                "schedule",
                "information",
                "implicit_patients",
            ]
        );
    }

    #[test]
    fn test_every_non_default_intent_reachable() {
        for intent in Intent::ALL.iter().filter(|i| !i.is_default()) {
            assert!(
                INTENT_RULES.iter().any(|r| r.intent == *intent),
                "{intent} has no rule"
            );
        }
    }

    #[test]
    fn test_intent_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&Intent::FindObservations).unwrap();
        assert_eq!(json, "\"find_observations\"");
    }
}
