//! Heuristic confidence scoring

use crate::entities::{EntityBag, EntityCategory};
use crate::intent::Intent;
use crate::sentiment::SentimentResult;

const BASE: f64 = 0.2;
const CLASSIFIED_BONUS: f64 = 0.3;
const CLINICAL_BONUS: f64 = 0.1;
const URGENCY_BONUS: f64 = 0.05;
const COMPLEXITY_BONUS: f64 = 0.05;
const COMPLEXITY_THRESHOLD: f64 = 0.7;

/// Weight added once for each non-empty category
///
/// Categories not listed contribute nothing.
pub const CATEGORY_WEIGHTS: &[(EntityCategory, f64)] = &[
    (EntityCategory::Conditions, 0.15),
    (EntityCategory::Observations, 0.15),
    (EntityCategory::Medications, 0.12),
    (EntityCategory::Symptoms, 0.10),
    (EntityCategory::Ages, 0.08),
    (EntityCategory::Genders, 0.05),
    (EntityCategory::Names, 0.08),
    (EntityCategory::PatientIds, 0.15),
    (EntityCategory::BodyParts, 0.07),
    (EntityCategory::SeverityIndicators, 0.05),
];

/// Query complexity in [0, 1]
///
/// `min(1, 0.1 * values + 0.15 * non-empty categories)`
pub fn query_complexity(entities: &EntityBag) -> f64 {
    let values = entities.total_values() as f64;
    let categories = entities.non_empty_categories().count() as f64;
    (0.1 * values + 0.15 * categories).min(1.0)
}

/// Scores how well a query was understood
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Confidence in [0, 1]
    pub fn score(&self, intent: Intent, entities: &EntityBag, sentiment: &SentimentResult) -> f64 {
        let mut confidence = BASE;

        if !intent.is_default() {
            confidence += CLASSIFIED_BONUS;
        }
        if matches!(intent, Intent::EmergencyQuery | Intent::SymptomReporting) {
            confidence += CLINICAL_BONUS;
        }

        confidence += CATEGORY_WEIGHTS
            .iter()
            .filter(|(category, _)| entities.has(*category))
            .map(|(_, weight)| weight)
            .sum::<f64>();

        if sentiment.urgency_score > 3 {
            confidence += URGENCY_BONUS;
        }
        if query_complexity(entities) > COMPLEXITY_THRESHOLD {
            confidence += COMPLEXITY_BONUS;
        }

        confidence.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_base_only() {
        let score = ConfidenceScorer.score(
            Intent::GeneralInquiry,
            &EntityBag::new(),
            &SentimentResult::default(),
        );
        assert!(approx(score, 0.2));
    }

    #[test]
    fn test_classified_with_entities() {
        let entities = EntityBag {
            conditions: vec!["diabetes".into()],
            ages: vec![50],
            ..Default::default()
        };
        let score =
            ConfidenceScorer.score(Intent::FindPatients, &entities, &SentimentResult::default());
        assert!(approx(score, 0.2 + 0.3 + 0.15 + 0.08));
    }

    #[test]
    fn test_clamped_to_one() {
        let entities = EntityBag {
            conditions: vec!["asthma".into()],
            observations: vec!["weight".into()],
            medications: vec!["insulin".into()],
            symptoms: vec!["pain".into(), "fever".into()],
            severity_indicators: vec!["severe".into()],
            ..Default::default()
        };
        let sentiment = SentimentResult {
            urgency_score: 5,
            ..Default::default()
        };
        let score = ConfidenceScorer.score(Intent::EmergencyQuery, &entities, &sentiment);
        assert!(approx(score, 1.0));
    }

    #[test]
    fn test_complexity() {
        assert!(approx(query_complexity(&EntityBag::new()), 0.0));
        let entities = EntityBag {
            conditions: vec!["diabetes".into()],
            ages: vec![50],
            ..Default::default()
        };
        assert!(approx(query_complexity(&entities), 0.2 + 0.3));
        let busy = EntityBag {
            symptoms: vec!["pain".into(); 12],
            ..Default::default()
        };
        assert!(approx(query_complexity(&busy), 1.0));
    }
}
