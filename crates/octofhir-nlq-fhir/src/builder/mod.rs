//! Query construction
//!
//! [`QueryBuilder`] maps an intent to a resource type, falling back to a
//! keyword sniff for intents that do not name one, and fills in search
//! parameters with the per-resource builders. Only the first value of each
//! entity category is used.

mod appointment;
mod condition;
mod medication;
mod observation;
mod patient;

use crate::params::SearchParameters;
use crate::query::{FhirQuery, QueryOutcome, DEFAULT_BASE_URL};
use crate::resource::ResourceType;
use chrono::NaiveDateTime;
use octofhir_nlq_analysis::{EntityBag, Intent};
use octofhir_nlq_lexicon::Lexicon;
use std::sync::Arc;

/// Resource sniffed from query text when the intent names none, in priority order
pub const RESOURCE_CUES: &[(&[&str], ResourceType)] = &[
    (&["patient"], ResourceType::Patient),
    (&["observation", "vital", "blood pressure"], ResourceType::Observation),
    (&["condition", "diagnosis", "disease"], ResourceType::Condition),
    (&["medication", "drug", "prescription"], ResourceType::MedicationRequest),
    (&["appointment", "schedule"], ResourceType::Appointment),
];

/// Inputs shared by the per-resource builders
pub struct BuildContext<'a> {
    pub entities: &'a EntityBag,
    /// Lowercased query text
    pub lowered: &'a str,
    pub lexicon: &'a Lexicon,
    pub now: NaiveDateTime,
}

impl BuildContext<'_> {
    fn mentions(&self, word: &str) -> bool {
        self.lowered.contains(word)
    }

    /// `Patient/<id>` for the first extracted patient id
    fn patient_reference(&self) -> Option<String> {
        self.entities
            .patient_references()
            .next()
            .map(|id| format!("Patient/{id}"))
    }
}

/// Builds FHIR search queries from analyzed text
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: String,
    lexicon: Arc<Lexicon>,
}

impl QueryBuilder {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lexicon,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a query using the local clock for relative dates
    pub fn build(&self, intent: Intent, entities: &EntityBag, query: &str) -> QueryOutcome {
        self.build_at(intent, entities, query, chrono::Local::now().naive_local())
    }

    /// Build a query with relative dates computed from `now`
    pub fn build_at(
        &self,
        intent: Intent,
        entities: &EntityBag,
        query: &str,
        now: NaiveDateTime,
    ) -> QueryOutcome {
        let lowered = query.to_lowercase();

        let resource = match resource_for(intent) {
            Some(resource) => resource,
            None => match sniff_resource(&lowered) {
                Some(resource) => resource,
                None => {
                    log::debug!("no resource for {:?} (intent {})", query, intent);
                    return QueryOutcome::unresolvable();
                }
            },
        };

        let ctx = BuildContext {
            entities,
            lowered: &lowered,
            lexicon: &self.lexicon,
            now,
        };
        let query =
            FhirQuery::search(&self.base_url, resource).with_parameters(parameters(resource, &ctx));
        log::debug!("built {}", query.full_url());
        query.into()
    }
}

/// Resource type named by an intent
pub const fn resource_for(intent: Intent) -> Option<ResourceType> {
    match intent {
        Intent::FindPatients => Some(ResourceType::Patient),
        Intent::FindConditions => Some(ResourceType::Condition),
        Intent::FindObservations => Some(ResourceType::Observation),
        Intent::FindMedications => Some(ResourceType::MedicationRequest),
        Intent::FindAppointments => Some(ResourceType::Appointment),
        Intent::EmergencyQuery
        | Intent::SymptomReporting
        | Intent::MedicationInquiry
        | Intent::ScheduleAppointment
        | Intent::HealthInformation
        | Intent::GeneralInquiry => None,
    }
}

/// First resource whose cue words occur in the lowercased text
pub fn sniff_resource(lowered: &str) -> Option<ResourceType> {
    RESOURCE_CUES
        .iter()
        .find(|(cues, _)| cues.iter().any(|cue| lowered.contains(cue)))
        .map(|(_, resource)| *resource)
}

fn parameters(resource: ResourceType, ctx: &BuildContext<'_>) -> SearchParameters {
    match resource {
        ResourceType::Patient => patient::parameters(ctx),
        ResourceType::Condition => condition::parameters(ctx),
        ResourceType::Observation => observation::parameters(ctx),
        ResourceType::MedicationRequest => medication::parameters(ctx),
        ResourceType::Appointment => appointment::parameters(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_priority() {
        assert_eq!(sniff_resource("patient blood pressure"), Some(ResourceType::Patient));
        assert_eq!(sniff_resource("vital signs"), Some(ResourceType::Observation));
        assert_eq!(sniff_resource("disease history"), Some(ResourceType::Condition));
        assert_eq!(sniff_resource("drug list"), Some(ResourceType::MedicationRequest));
        assert_eq!(sniff_resource("schedule a visit"), Some(ResourceType::Appointment));
        assert_eq!(sniff_resource("hello there"), None);
    }

    #[test]
    fn test_dispatch_covers_find_intents() {
        let resolved: Vec<_> = Intent::ALL.iter().filter_map(|i| resource_for(*i)).collect();
        assert_eq!(resolved.len(), ResourceType::SUPPORTED.len());
    }
}
