//! Human-readable rendering of query outcomes

use crate::query::QueryOutcome;

/// Render an outcome as a display block
///
/// ```text
/// FHIR API Request:
/// Method: GET
/// Resource: Patient
/// URL: https://hapi.fhir.org/baseR4/Patient?gender=female
/// ```
///
/// Parameter values are written verbatim, without percent encoding.
pub fn format_request(outcome: &QueryOutcome) -> String {
    match outcome {
        QueryOutcome::Query(query) => format!(
            "FHIR API Request:\nMethod: {}\nResource: {}\nURL: {}",
            query.method,
            query.resource_type,
            query.full_url()
        ),
        QueryOutcome::Unresolvable { message, .. } => format!("Error: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FhirQuery, DEFAULT_BASE_URL, UNRESOLVABLE_MESSAGE};
    use crate::resource::ResourceType;

    #[test]
    fn test_format_without_parameters() {
        let outcome = FhirQuery::search(DEFAULT_BASE_URL, ResourceType::Appointment).into();
        insta::assert_snapshot!(format_request(&outcome), @r"
        FHIR API Request:
        Method: GET
        Resource: Appointment
        URL: https://hapi.fhir.org/baseR4/Appointment
        ");
    }

    #[test]
    fn test_format_unresolvable() {
        assert_eq!(
            format_request(&QueryOutcome::unresolvable()),
            format!("Error: {UNRESOLVABLE_MESSAGE}")
        );
    }
}
