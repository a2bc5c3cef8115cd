//! Patient search parameters

use super::BuildContext;
use crate::params::SearchParameters;
use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

static AGE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:to|-)\s*(\d+)\s+years?\s*old").expect("Invalid age range regex pattern")
});

pub fn parameters(ctx: &BuildContext<'_>) -> SearchParameters {
    let mut params = SearchParameters::new();
    let entities = ctx.entities;

    if let Some(name) = entities.names.first() {
        params.insert("name", name.as_str());
    }
    if let Some(gender) = entities.genders.first() {
        params.insert("gender", gender.as_str());
    }

    let year = i64::from(ctx.now.year());
    if let Some((youngest, oldest)) = age_range(ctx.lowered) {
        params.append("birthdate", format!("ge{}", year - oldest));
        params.append("birthdate", format!("le{}", year - youngest));
    } else if let Some(age) = entities.ages.first() {
        let birth_year = year - i64::from(*age);
        let prefix = if ctx.mentions("over") || ctx.mentions("above") {
            "le"
        } else {
            "ap"
        };
        params.insert("birthdate", format!("{prefix}{birth_year}"));
    }

    if let Some(code) = entities
        .conditions
        .first()
        .and_then(|c| ctx.lexicon.conditions().code_for(c))
    {
        params.insert("_has:Condition:patient:code", code);
    }

    params
}

/// `(youngest, oldest)` from "N to M years old" or "N-M years old"
fn age_range(lowered: &str) -> Option<(i64, i64)> {
    let caps = AGE_RANGE.captures(lowered)?;
    let a: i64 = caps[1].parse().ok()?;
    let b: i64 = caps[2].parse().ok()?;
    Some((a.min(b), a.max(b)))
}
