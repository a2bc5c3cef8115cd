//! Appointment search parameters

use super::BuildContext;
use crate::params::SearchParameters;
use chrono::TimeDelta;

pub fn parameters(ctx: &BuildContext<'_>) -> SearchParameters {
    let mut params = SearchParameters::new();

    if let Some(actor) = ctx.patient_reference() {
        params.insert("actor", actor);
    }

    if ctx.mentions("today") {
        let today = ctx.now.format("%Y-%m-%d");
        params.append("date", format!("ge{today}"));
        params.append("date", format!("lt{today}T23:59:59"));
    } else if ctx.mentions("next week") {
        if let Some(start) = ctx.now.checked_add_signed(TimeDelta::days(7)) {
            params.insert("date", format!("ge{}", start.format("%Y-%m-%d")));
        }
    }

    if ctx.mentions("scheduled") {
        params.insert("status", "booked");
    }

    params
}
