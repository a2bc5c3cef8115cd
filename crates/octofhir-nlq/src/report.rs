//! Full processing report

use chrono::NaiveDateTime;
use octofhir_nlq_analysis::{
    recommendations, ClinicalInterpretation, DataRequirements, NlpAnalysis,
};
use octofhir_nlq_fhir::{format_request, QueryOutcome};
use serde::Serialize;

/// Everything produced for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryReport {
    pub original_query: String,
    /// Local time the query was processed
    pub processed_timestamp: NaiveDateTime,
    pub nlp_analysis: NlpAnalysis,
    pub fhir_query: QueryOutcome,
    pub formatted_request: String,
    pub clinical_interpretation: ClinicalInterpretation,
    pub recommendations: Vec<String>,
    pub data_requirements: DataRequirements,
}

impl QueryReport {
    pub fn new(
        query: &str,
        processed_at: NaiveDateTime,
        analysis: NlpAnalysis,
        outcome: QueryOutcome,
    ) -> Self {
        Self {
            original_query: query.to_string(),
            processed_timestamp: processed_at,
            formatted_request: format_request(&outcome),
            clinical_interpretation: ClinicalInterpretation::from_analysis(&analysis),
            recommendations: recommendations(&analysis),
            data_requirements: DataRequirements::from_analysis(&analysis),
            nlp_analysis: analysis,
            fhir_query: outcome,
        }
    }
}
