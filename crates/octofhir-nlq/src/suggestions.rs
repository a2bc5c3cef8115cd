//! Example queries offered to users

/// Curated example queries, in display order
pub const SUGGESTIONS: [&str; 15] = [
    "Show me all diabetic patients over 50",
    "Find blood pressure observations for recent patients",
    "Get active diabetes conditions",
    "List all female patients with hypertension",
    "Show heart rate measurements from last month",
    "Find patients with chest pain symptoms",
    "Get medication list for diabetes patients",
    "Show recent emergency room visits",
    "Find patients with abnormal lab results",
    "List hypertensive patients on ACE inhibitors",
    "Show pediatric patients with asthma",
    "Get cardiac patients over 65",
    "Find patients with depression diagnosis",
    "Show pregnant patients due this month",
    "Get patients with chronic kidney disease",
];

/// Most suggestions returned for a filter
pub const MAX_FILTERED: usize = 10;

/// All suggestions, or at most [`MAX_FILTERED`] containing `filter`
///
/// Matching is a case-insensitive substring test. An empty or blank filter
/// returns every suggestion.
pub fn suggestions(filter: Option<&str>) -> Vec<&'static str> {
    let needle = filter.map(str::trim).unwrap_or_default().to_lowercase();
    if needle.is_empty() {
        return SUGGESTIONS.to_vec();
    }
    SUGGESTIONS
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .take(MAX_FILTERED)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unfiltered_returns_all() {
        assert_eq!(suggestions(None).len(), 15);
        assert_eq!(suggestions(Some("  ")).len(), 15);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        assert_eq!(
            suggestions(Some("DIABET")),
            vec![
                "Show me all diabetic patients over 50",
                "Get active diabetes conditions",
                "Get medication list for diabetes patients",
            ]
        );
    }

    #[test]
    fn test_filter_is_capped() {
        assert_eq!(suggestions(Some("patients")).len(), MAX_FILTERED);
        assert!(suggestions(Some("xyz")).is_empty());
    }
}
