//! Coded term entries and ordered term tables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A coded medical term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Coded identifier (SNOMED CT, LOINC, RxNorm, ...)
    pub code: String,
    /// Human-readable display name
    pub display: String,
    /// Clinical category (e.g. "endocrine", "vital_signs", "antidiabetic")
    pub category: String,
    /// Alternate surface forms that also select this entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl LexiconEntry {
    /// Create a new entry without aliases
    pub fn new(
        code: impl Into<String>,
        display: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display: display.into(),
            category: category.into(),
            aliases: Vec::new(),
        }
    }

    /// Add an alternate surface form
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }
}

/// Ordered table of canonical term -> entry
///
/// Keys and aliases are stored lowercased. Iteration follows insertion order,
/// which is also the order in which matches are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermLexicon {
    entries: IndexMap<String, LexiconEntry>,
}

impl TermLexicon {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry; returns the previous entry for the term
    pub fn insert(&mut self, term: impl Into<String>, mut entry: LexiconEntry) -> Option<LexiconEntry> {
        entry.aliases = entry.aliases.iter().map(|a| a.to_lowercase()).collect();
        self.entries.insert(term.into().to_lowercase(), entry)
    }

    /// Builder-style insert
    pub fn with(mut self, term: impl Into<String>, entry: LexiconEntry) -> Self {
        self.insert(term, entry);
        self
    }

    /// Look up an entry by canonical term (case-insensitive)
    pub fn get(&self, term: &str) -> Option<&LexiconEntry> {
        self.entries
            .get(term)
            .or_else(|| self.entries.get(&term.to_lowercase()))
    }

    /// Coded identifier for a canonical term
    pub fn code_for(&self, term: &str) -> Option<&str> {
        self.get(term).map(|e| e.code.as_str())
    }

    /// Canonical terms in table order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LexiconEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical terms whose term or alias occurs in `lowered`
    ///
    /// `lowered` must already be lowercased. Each entry is reported at most
    /// once, in table order.
    pub fn matches<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(term, entry)| {
                lowered.contains(term.as_str())
                    || entry.aliases.iter().any(|a| lowered.contains(a.as_str()))
            })
            .map(|(term, _)| term.as_str())
    }

    /// Whether any term or alias occurs in `lowered`
    pub fn contains_any(&self, lowered: &str) -> bool {
        self.matches(lowered).next().is_some()
    }

    /// Add or override entries from another table, keeping existing order
    pub fn extend(&mut self, other: TermLexicon) {
        for (term, entry) in other.entries {
            self.entries.insert(term, entry);
        }
    }
}

impl FromIterator<(String, LexiconEntry)> for TermLexicon {
    fn from_iter<I: IntoIterator<Item = (String, LexiconEntry)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (term, entry) in iter {
            table.insert(term, entry);
        }
        table
    }
}
