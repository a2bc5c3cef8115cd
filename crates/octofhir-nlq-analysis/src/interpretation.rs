//! Clinical reading of an analyzed query
//!
//! These reports are heuristic summaries meant for display next to the
//! generated FHIR request. They never influence query construction.

use crate::intent::Intent;
use crate::pipeline::NlpAnalysis;
use crate::sentiment::PriorityLevel;
use serde::{Deserialize, Serialize};

/// First demographic values mentioned in the query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDemographics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PatientDemographics {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.gender.is_none() && self.name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalInterpretation {
    pub primary_concern: String,
    pub urgency_assessment: PriorityLevel,
    pub patient_demographics: PatientDemographics,
    pub clinical_context: String,
    /// Confirmed conditions followed by suggestions; no duplicates
    pub potential_diagnoses: Vec<String>,
    pub required_assessments: Vec<String>,
}

impl ClinicalInterpretation {
    pub fn from_analysis(analysis: &NlpAnalysis) -> Self {
        let entities = &analysis.entities;

        let primary_concern = if !entities.conditions.is_empty() {
            format!("Medical condition: {}", entities.conditions.join(", "))
        } else if !entities.symptoms.is_empty() {
            format!("Reported symptoms: {}", entities.symptoms.join(", "))
        } else if !entities.observations.is_empty() {
            format!("Clinical measurements: {}", entities.observations.join(", "))
        } else if analysis.intent == Intent::EmergencyQuery {
            "Emergency medical situation".to_string()
        } else {
            "General healthcare inquiry".to_string()
        };

        let clinical_context = if !entities.conditions.is_empty() {
            "Chronic disease management"
        } else if !entities.symptoms.is_empty() {
            "Acute symptom assessment"
        } else if !entities.observations.is_empty() {
            "Clinical monitoring"
        } else {
            "General healthcare"
        };

        let patient_demographics = PatientDemographics {
            age: entities.ages.first().copied(),
            gender: entities.genders.first().cloned(),
            name: entities.names.first().cloned(),
        };

        Self {
            primary_concern,
            urgency_assessment: analysis.sentiment.priority_level,
            patient_demographics,
            clinical_context: clinical_context.to_string(),
            potential_diagnoses: potential_diagnoses(analysis),
            required_assessments: required_assessments(analysis),
        }
    }
}

fn mentions(values: &[String], term: &str) -> bool {
    values.iter().any(|v| v == term)
}

fn potential_diagnoses(analysis: &NlpAnalysis) -> Vec<String> {
    let entities = &analysis.entities;
    let mut diagnoses: Vec<String> = Vec::new();
    let mut push = |d: &str| {
        if !diagnoses.iter().any(|x| x == d) {
            diagnoses.push(d.to_string());
        }
    };

    for condition in &entities.conditions {
        push(condition);
    }
    if mentions(&entities.symptoms, "chest pain") || mentions(&entities.body_parts, "chest") {
        push("Possible cardiac condition");
        push("Musculoskeletal chest pain");
    }
    if mentions(&entities.symptoms, "headache") || mentions(&entities.body_parts, "head") {
        push("Tension headache");
        push("Migraine");
    }

    diagnoses
}

fn required_assessments(analysis: &NlpAnalysis) -> Vec<String> {
    let entities = &analysis.entities;
    let mut assessments = Vec::new();

    if mentions(&entities.conditions, "diabetes") {
        assessments.extend(["HbA1c test", "Blood glucose monitoring", "Diabetic foot exam"]);
    }
    if mentions(&entities.conditions, "hypertension") {
        assessments.extend(["Blood pressure measurement", "Cardiovascular risk assessment"]);
    }
    if mentions(&entities.symptoms, "pain") {
        assessments.extend(["Pain assessment scale", "Physical examination"]);
    }

    assessments.into_iter().map(String::from).collect()
}

/// Follow-up advice for an analyzed query, urgency first
pub fn recommendations(analysis: &NlpAnalysis) -> Vec<String> {
    let entities = &analysis.entities;
    let mut out: Vec<&str> = Vec::new();

    match analysis.sentiment.urgency_score {
        5.. => out.push("Immediate medical attention required - contact emergency services"),
        4 => out.push("Urgent care needed - schedule appointment within 24 hours"),
        3 => out.push("Medical evaluation recommended within 48-72 hours"),
        _ => {}
    }

    if mentions(&entities.conditions, "diabetes") {
        out.push("Monitor blood glucose levels regularly");
        out.push("Review medication adherence and dietary habits");
    }
    if mentions(&entities.conditions, "hypertension") {
        out.push("Regular blood pressure monitoring recommended");
        out.push("Consider lifestyle modifications (diet, exercise)");
    }
    if entities.symptoms.iter().any(|s| s == "pain" || s == "ache") {
        out.push("Document pain levels and triggers");
        out.push("Consider pain management consultation if persistent");
    }

    out.into_iter().map(String::from).collect()
}

/// Information that would sharpen the query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRequirements {
    pub patient_identification: Vec<String>,
    pub clinical_data: Vec<String>,
    pub temporal_data: Vec<String>,
    pub additional_context: Vec<String>,
}

impl DataRequirements {
    pub fn from_analysis(analysis: &NlpAnalysis) -> Self {
        let entities = &analysis.entities;
        let mut requirements = Self::default();

        if entities.patient_ids.is_empty() && entities.names.is_empty() {
            requirements
                .patient_identification
                .push("Patient identifier or name required".to_string());
        }
        if !entities.conditions.is_empty() && entities.observations.is_empty() {
            requirements
                .clinical_data
                .push("Recent vital signs and lab results".to_string());
        }
        if !entities.symptoms.is_empty() && entities.severity_indicators.is_empty() {
            requirements
                .clinical_data
                .push("Symptom severity and duration details".to_string());
        }
        if entities.time_periods.is_empty()
            && matches!(analysis.intent, Intent::FindObservations | Intent::FindConditions)
        {
            requirements
                .temporal_data
                .push("Time frame for data retrieval".to_string());
        }

        requirements
    }

    pub fn is_empty(&self) -> bool {
        self.patient_identification.is_empty()
            && self.clinical_data.is_empty()
            && self.temporal_data.is_empty()
            && self.additional_context.is_empty()
    }
}
