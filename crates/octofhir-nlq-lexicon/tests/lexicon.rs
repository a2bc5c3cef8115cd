//! Tests for the standard lexicon and lexicon file loading

use octofhir_nlq_lexicon::{Lexicon, LexiconEntry, TermLexicon, UrgencyTable};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;

#[rstest]
#[case("diabetes", "73211009")]
#[case("hypertension", "38341003")]
#[case("heart disease", "56265001")]
#[case("pneumonia", "233604007")]
fn test_standard_condition_codes(#[case] term: &str, #[case] code: &str) {
    assert_eq!(Lexicon::standard().conditions().code_for(term), Some(code));
}

#[rstest]
#[case("blood pressure", "85354-9")]
#[case("heart rate", "8867-4")]
#[case("oxygen saturation", "59408-5")]
#[case("bmi", "39156-5")]
fn test_standard_observation_codes(#[case] term: &str, #[case] code: &str) {
    assert_eq!(Lexicon::standard().observations().code_for(term), Some(code));
}

#[rstest]
#[case("show me all diabetic patients over 50", vec!["diabetes"])]
#[case("patients with high blood pressure", vec!["hypertension"])]
#[case("asthma and pneumonia follow-up", vec!["asthma", "pneumonia"])]
#[case("hello there", vec![])]
fn test_standard_condition_matches(#[case] query: &str, #[case] expected: Vec<&str>) {
    let lexicon = Lexicon::standard();
    let found: Vec<_> = lexicon.conditions().matches(query).collect();
    assert_eq!(found, expected);
}

#[test]
fn test_pulse_selects_heart_rate() {
    let lexicon = Lexicon::standard();
    let found: Vec<_> = lexicon.observations().matches("check pulse").collect();
    assert_eq!(found, vec!["heart rate"]);
}

#[test]
fn test_standard_urgency_weights_in_range() {
    let lexicon = Lexicon::standard();
    assert_eq!(lexicon.urgency().len(), 13);
    assert!(lexicon.urgency().iter().all(|(_, w)| (1..=5).contains(&w)));
    assert_eq!(lexicon.urgency().weight("chest pain"), Some(5));
    assert_eq!(lexicon.urgency().weight("follow-up"), Some(2));
}

#[test]
fn test_load_from_file_and_merge() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
            "conditions": {{
                "Gout": {{"code": "90560007", "display": "Gout", "category": "musculoskeletal", "aliases": ["podagra"]}}
            }},
            "urgency": {{"sepsis": 5}}
        }}"#
    )
    .unwrap();

    let custom = Lexicon::from_file(file.path()).unwrap();
    let merged = Lexicon::standard().merge(custom);

    assert_eq!(merged.conditions().code_for("gout"), Some("90560007"));
    assert_eq!(merged.conditions().matches("podagra flare").collect::<Vec<_>>(), vec!["gout"]);
    assert_eq!(merged.conditions().terms().last(), Some("gout"));
    assert_eq!(merged.urgency().weight("sepsis"), Some(5));
    // standard entries survive the overlay
    assert_eq!(merged.conditions().code_for("diabetes"), Some("73211009"));
}

#[test]
fn test_load_rejects_unknown_extension() {
    let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    let err = Lexicon::from_file(file.path()).unwrap_err();
    assert!(err.code().is_lexicon_error());
}

#[test]
fn test_load_missing_file_is_system_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Lexicon::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(err.code().is_system_error());
}

#[test]
fn test_build_custom_lexicon() {
    let lexicon = Lexicon::new(
        TermLexicon::new().with("gout", LexiconEntry::new("90560007", "Gout", "musculoskeletal")),
        TermLexicon::new(),
        TermLexicon::new(),
        UrgencyTable::new().with("Stroke", 5),
    );
    assert_eq!(lexicon.urgency().weight("stroke"), Some(5));
    assert!(lexicon.observations().is_empty());
}
