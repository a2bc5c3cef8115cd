//! FHIR query descriptors

use crate::params::SearchParameters;
use crate::resource::ResourceType;
use serde::{Deserialize, Serialize};

/// Public HAPI FHIR R4 test server
pub const DEFAULT_BASE_URL: &str = "https://hapi.fhir.org/baseR4";

/// Message reported when no resource type can be identified
pub const UNRESOLVABLE_MESSAGE: &str = "Unable to parse query. Supported resources: Patient, Observation, Condition, MedicationRequest, Appointment";

/// A FHIR REST search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FhirQuery {
    pub resource_type: ResourceType,
    pub method: String,
    /// `<base>/<resource type>`, without parameters
    pub url: String,
    pub parameters: SearchParameters,
}

impl FhirQuery {
    /// A `GET` search against `base_url` with no parameters
    pub fn search(base_url: &str, resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            method: "GET".to_string(),
            url: format!("{}/{}", base_url.trim_end_matches('/'), resource_type),
            parameters: SearchParameters::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: SearchParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// URL with the query string appended when there are parameters
    pub fn full_url(&self) -> String {
        if self.parameters.is_empty() {
            self.url.clone()
        } else {
            format!("{}?{}", self.url, self.parameters.to_query_string())
        }
    }
}

/// Result of building a query
///
/// An unresolvable query is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Query(FhirQuery),
    Unresolvable {
        #[serde(rename = "error")]
        message: String,
        supported_resources: Vec<ResourceType>,
    },
}

impl QueryOutcome {
    pub fn unresolvable() -> Self {
        Self::Unresolvable {
            message: UNRESOLVABLE_MESSAGE.to_string(),
            supported_resources: ResourceType::SUPPORTED.to_vec(),
        }
    }

    pub fn query(&self) -> Option<&FhirQuery> {
        match self {
            Self::Query(query) => Some(query),
            Self::Unresolvable { .. } => None,
        }
    }

    pub fn into_query(self) -> Option<FhirQuery> {
        match self {
            Self::Query(query) => Some(query),
            Self::Unresolvable { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    pub fn resource_type(&self) -> Option<ResourceType> {
        self.query().map(|q| q.resource_type)
    }
}

impl From<FhirQuery> for QueryOutcome {
    fn from(query: FhirQuery) -> Self {
        Self::Query(query)
    }
}
