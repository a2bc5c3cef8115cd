//! Condition search parameters

use super::BuildContext;
use crate::params::SearchParameters;

pub fn parameters(ctx: &BuildContext<'_>) -> SearchParameters {
    let mut params = SearchParameters::new();

    if let Some(subject) = ctx.patient_reference() {
        params.insert("subject", subject);
    }
    if let Some(code) = ctx
        .entities
        .conditions
        .first()
        .and_then(|c| ctx.lexicon.conditions().code_for(c))
    {
        params.insert("code", code);
    }

    if ctx.mentions("active") {
        params.insert("clinical-status", "active");
    } else if ctx.mentions("resolved") {
        params.insert("clinical-status", "resolved");
    }

    params
}
