//! MedicationRequest search parameters

use super::BuildContext;
use crate::params::SearchParameters;

pub fn parameters(ctx: &BuildContext<'_>) -> SearchParameters {
    let mut params = SearchParameters::new();

    if let Some(subject) = ctx.patient_reference() {
        params.insert("subject", subject);
    }
    if let Some(code) = ctx
        .entities
        .medications
        .first()
        .and_then(|m| ctx.lexicon.medications().code_for(m))
    {
        params.insert("code", code);
    }
    if ctx.mentions("active") {
        params.insert("status", "active");
    }

    params
}
