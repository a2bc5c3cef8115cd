//! Translator service scenarios

use chrono::{NaiveDate, NaiveDateTime};
use octofhir_nlq::diagnostics::{ErrorCode, NLQ0004, NLQ0005, NLQ0100};
use octofhir_nlq::{Intent, PriorityLevel, QueryOutcome, QueryTranslator, ResourceType};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;
use std::sync::Arc;
use std::thread;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .unwrap()
}

fn lexicon_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_diabetic_patients_scenario() {
    let translator = QueryTranslator::new();
    let analysis = translator.analyze("Show me all diabetic patients over 50");
    assert_eq!(analysis.entities.conditions, vec!["diabetes"]);
    assert_eq!(analysis.entities.ages, vec![50]);
    assert_eq!(analysis.intent, Intent::FindPatients);

    let outcome = translator.translate_at("Show me all diabetic patients over 50", now());
    let query = outcome.query().unwrap();
    assert_eq!(query.resource_type, ResourceType::Patient);
    assert_eq!(query.parameters.get("birthdate"), Some("le1974"));
    assert_eq!(query.parameters.get("_has:Condition:patient:code"), Some("73211009"));
}

#[test]
fn test_unresolvable_is_not_partial() {
    let outcome = QueryTranslator::new().translate("hello there");
    assert!(matches!(outcome, QueryOutcome::Unresolvable { .. }));
}

#[test]
fn test_process_report() {
    let report = QueryTranslator::new().process_at("critical chest pain for patient 12", now());

    assert_eq!(report.original_query, "critical chest pain for patient 12");
    assert_eq!(report.processed_timestamp, now());
    assert_eq!(report.nlp_analysis.intent, Intent::EmergencyQuery);
    assert_eq!(report.fhir_query.resource_type(), Some(ResourceType::Patient));
    assert_eq!(
        report.clinical_interpretation.urgency_assessment,
        PriorityLevel::Emergency
    );
    assert_eq!(
        report.recommendations.first().map(String::as_str),
        Some("Immediate medical attention required - contact emergency services")
    );
    assert!(report.data_requirements.patient_identification.is_empty());
    assert!(report.formatted_request.starts_with("FHIR API Request:"));
}

#[test]
fn test_report_serialization() {
    let report = QueryTranslator::new().process_at("hello there", now());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["processed_timestamp"], "2024-03-15T10:30:00");
    assert_eq!(json["nlp_analysis"]["intent"], "general_inquiry");
    assert_eq!(json["nlp_analysis"]["nlp_method"], "regex");
    assert_eq!(json["nlp_analysis"]["medical_specialty"], "general_medicine");
    assert!(json["fhir_query"]["error"].is_string());
    assert_eq!(json["clinical_interpretation"]["urgency_assessment"], "routine");
}

#[test]
fn test_custom_base_url() {
    let translator = QueryTranslator::builder()
        .base_url("http://localhost:8080/fhir")
        .build()
        .unwrap();
    let outcome = translator.translate("list female patients");
    assert_eq!(
        outcome.query().map(|q| q.full_url()).as_deref(),
        Some("http://localhost:8080/fhir/Patient?gender=female")
    );
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let err = QueryTranslator::builder()
        .base_url("hapi.fhir.org")
        .build()
        .err()
        .unwrap();
    assert_eq!(err.code(), NLQ0100);
}

#[test]
fn test_lexicon_file_extends_standard() {
    let file = lexicon_file(
        r#"{
            "conditions": {
                "gout": {"code": "90560007", "display": "Gout", "category": "metabolic"}
            },
            "urgency": {"stroke": 5}
        }"#,
    );
    let translator = QueryTranslator::builder()
        .lexicon_file(file.path())
        .build()
        .unwrap();

    let outcome = translator.translate_at("find patients with gout", now());
    assert_eq!(
        outcome.query().and_then(|q| q.parameters.get("_has:Condition:patient:code")),
        Some("90560007")
    );
    assert_eq!(translator.analyze("possible stroke").sentiment.urgency_score, 5);
    assert_eq!(translator.analyze("diabetic patients").entities.conditions, vec!["diabetes"]);
}

#[rstest]
#[case(r#"{"urgency": {"stroke": 9}}"#, ".json", NLQ0004)]
#[case("{}", ".yaml", NLQ0005)]
fn test_bad_lexicon_file(#[case] json: &str, #[case] suffix: &str, #[case] code: ErrorCode) {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    let err = QueryTranslator::builder()
        .lexicon_file(file.path())
        .build()
        .err()
        .unwrap();
    assert_eq!(err.code(), code);
}

#[test]
fn test_suggestions() {
    let translator = QueryTranslator::new();
    assert_eq!(translator.suggestions(None).len(), 15);
    assert_eq!(
        translator.suggestions(Some("ASTHMA")),
        vec!["Show pediatric patients with asthma"]
    );
}

#[test]
fn test_shared_across_threads() {
    let translator = Arc::new(QueryTranslator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let translator = Arc::clone(&translator);
            thread::spawn(move || translator.translate_at("Find conditions for patient 7", now()))
        })
        .collect();

    let expected = translator.translate_at("Find conditions for patient 7", now());
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_formatted_requests() {
    let translator = QueryTranslator::new();
    let format = |query: &str| octofhir_nlq::format_request(&translator.translate_at(query, now()));

    insta::assert_snapshot!(format("Find blood pressure observations for patient 123 from last 30 days"), @r"
    FHIR API Request:
    Method: GET
    Resource: Observation
    URL: https://hapi.fhir.org/baseR4/Observation?subject=Patient/123&code=85354-9&date=ge2024-02-14
    ");

    insta::assert_snapshot!(format("List all female patients named Sarah with heart disease"), @r"
    FHIR API Request:
    Method: GET
    Resource: Patient
    URL: https://hapi.fhir.org/baseR4/Patient?name=Sarah&gender=female&_has:Condition:patient:code=56265001
    ");
}
