//! Observation search parameters

use super::BuildContext;
use crate::params::SearchParameters;
use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;

static LAST_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"last\s+(\d+)\s+days?").expect("Invalid date window regex pattern"));

pub fn parameters(ctx: &BuildContext<'_>) -> SearchParameters {
    let mut params = SearchParameters::new();

    if let Some(subject) = ctx.patient_reference() {
        params.insert("subject", subject);
    }
    if let Some(code) = ctx
        .entities
        .observations
        .first()
        .and_then(|o| ctx.lexicon.observations().code_for(o))
    {
        params.insert("code", code);
    }

    if let Some(since) = LAST_DAYS
        .captures(ctx.lowered)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .and_then(TimeDelta::try_days)
        .and_then(|window| ctx.now.checked_sub_signed(window))
    {
        params.insert("date", format!("ge{}", since.format("%Y-%m-%d")));
    }

    params
}
