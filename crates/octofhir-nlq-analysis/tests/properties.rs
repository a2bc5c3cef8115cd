//! Property tests for the analysis pipeline

use octofhir_nlq_analysis::intent::EMERGENCY_KEYWORDS;
use octofhir_nlq_analysis::{Intent, NlpPipeline};
use octofhir_nlq_lexicon::Lexicon;
use proptest::prelude::*;
use proptest::sample::select;

/// Words that carry no intent, urgency or resource cue
const FILLER: &[&str] = &["the", "cohort", "with", "older", "local", "recent", "cases", "many"];

fn condition_terms() -> Vec<String> {
    Lexicon::standard().conditions().terms().map(String::from).collect()
}

fn urgency_keywords() -> Vec<(String, u8)> {
    Lexicon::standard()
        .urgency()
        .iter()
        .map(|(k, w)| (k.to_string(), w))
        .collect()
}

proptest! {
    #[test]
    fn confidence_and_complexity_are_bounded(query in "\\PC{0,80}") {
        let analysis = NlpPipeline::default().analyze(&query);
        prop_assert!((0.0..=1.0).contains(&analysis.confidence));
        prop_assert!((0.0..=1.0).contains(&analysis.query_complexity));
        prop_assert!((1..=5).contains(&analysis.sentiment.urgency_score));
    }

    #[test]
    fn emergency_keyword_dominates(
        prefix in "[a-zA-Z0-9 ]{0,40}",
        keyword in select(EMERGENCY_KEYWORDS),
        suffix in "[a-zA-Z0-9 ]{0,40}",
    ) {
        let query = format!("{prefix} {keyword} {suffix}");
        prop_assert_eq!(NlpPipeline::default().analyze(&query).intent, Intent::EmergencyQuery);
    }

    #[test]
    fn urgency_is_monotonic(
        query in "[a-z ]{0,60}",
        (keyword, weight) in select(urgency_keywords()),
    ) {
        let pipeline = NlpPipeline::default();
        let before = pipeline.analyze(&query).sentiment.urgency_score;
        let after = pipeline.analyze(&format!("{query} {keyword}")).sentiment.urgency_score;
        prop_assert!(after >= before);
        prop_assert!(after >= weight);
    }

    #[test]
    fn condition_with_patient_finds_patients(
        condition in select(condition_terms()),
        filler in proptest::collection::vec(select(FILLER), 0..4),
    ) {
        let query = format!("{} {} patient {}", filler.join(" "), condition, filler.join(" "));
        prop_assert_eq!(NlpPipeline::default().analyze(&query).intent, Intent::FindPatients);
    }

    #[test]
    fn analysis_is_deterministic(query in "\\PC{0,80}") {
        let pipeline = NlpPipeline::default();
        prop_assert_eq!(pipeline.analyze(&query), pipeline.analyze(&query));
    }
}
