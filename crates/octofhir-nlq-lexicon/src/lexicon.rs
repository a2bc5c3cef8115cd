//! The lexicon bundle and its JSON representation

use crate::entry::{LexiconEntry, TermLexicon};
use indexmap::IndexMap;
use octofhir_nlq_diagnostics::{NlqError, Result, NLQ0001, NLQ0002, NLQ0003, NLQ0004, NLQ0005};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lowest urgency weight
pub const MIN_URGENCY: u8 = 1;
/// Highest urgency weight
pub const MAX_URGENCY: u8 = 5;

/// Ordered urgency keyword -> weight table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UrgencyTable {
    weights: IndexMap<String, u8>,
}

impl UrgencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; the keyword is lowercased
    pub fn with(mut self, keyword: impl Into<String>, weight: u8) -> Self {
        self.insert(keyword, weight);
        self
    }

    /// Insert a keyword; the weight is clamped to `MIN_URGENCY..=MAX_URGENCY`
    pub fn insert(&mut self, keyword: impl Into<String>, weight: u8) -> Option<u8> {
        self.weights
            .insert(keyword.into().to_lowercase(), weight.clamp(MIN_URGENCY, MAX_URGENCY))
    }

    pub fn weight(&self, keyword: &str) -> Option<u8> {
        self.weights.get(keyword).copied()
    }

    /// Keywords occurring in `lowered`, with their weights, in table order
    pub fn matches<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = (&'a str, u8)> + 'a {
        self.weights
            .iter()
            .filter(move |(keyword, _)| lowered.contains(keyword.as_str()))
            .map(|(keyword, weight)| (keyword.as_str(), *weight))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.weights.iter().map(|(k, w)| (k.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Serialized form of a lexicon; every section is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconDocument {
    #[serde(default)]
    pub conditions: IndexMap<String, LexiconEntry>,
    #[serde(default)]
    pub observations: IndexMap<String, LexiconEntry>,
    #[serde(default)]
    pub medications: IndexMap<String, LexiconEntry>,
    #[serde(default)]
    pub urgency: IndexMap<String, u8>,
}

/// Immutable bundle of term tables used by the translation pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lexicon {
    conditions: TermLexicon,
    observations: TermLexicon,
    medications: TermLexicon,
    urgency: UrgencyTable,
}

impl Lexicon {
    /// Assemble a lexicon from its tables
    pub fn new(
        conditions: TermLexicon,
        observations: TermLexicon,
        medications: TermLexicon,
        urgency: UrgencyTable,
    ) -> Self {
        Self {
            conditions,
            observations,
            medications,
            urgency,
        }
    }

    /// Condition terms (SNOMED CT)
    pub fn conditions(&self) -> &TermLexicon {
        &self.conditions
    }

    /// Observation terms (LOINC)
    pub fn observations(&self) -> &TermLexicon {
        &self.observations
    }

    /// Medication terms (RxNorm)
    pub fn medications(&self) -> &TermLexicon {
        &self.medications
    }

    /// Urgency keyword weights
    pub fn urgency(&self) -> &UrgencyTable {
        &self.urgency
    }

    /// Parse and validate a lexicon from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: LexiconDocument = serde_json::from_str(json)
            .map_err(|e| NlqError::lexicon(NLQ0001, format!("invalid lexicon JSON: {e}")))?;
        Self::from_document(doc)
    }

    /// Validate a parsed lexicon document
    pub fn from_document(doc: LexiconDocument) -> Result<Self> {
        let conditions = validated_table("conditions", doc.conditions)?;
        let observations = validated_table("observations", doc.observations)?;
        let medications = validated_table("medications", doc.medications)?;

        let mut urgency = UrgencyTable::new();
        for (keyword, weight) in doc.urgency {
            if keyword.trim().is_empty() {
                return Err(NlqError::lexicon(NLQ0002, "empty urgency keyword"));
            }
            if !(MIN_URGENCY..=MAX_URGENCY).contains(&weight) {
                return Err(NlqError::lexicon_term(
                    NLQ0004,
                    format!("urgency weight {weight} for '{keyword}' is outside {MIN_URGENCY}..={MAX_URGENCY}"),
                    keyword,
                ));
            }
            urgency.insert(keyword, weight);
        }

        Ok(Self::new(conditions, observations, medications, urgency))
    }

    /// Load a lexicon from a `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {}
            Some(ext) => {
                return Err(NlqError::lexicon(
                    NLQ0005,
                    format!("unsupported lexicon file extension: .{ext}. Expected .json"),
                ));
            }
            None => {
                return Err(NlqError::lexicon(
                    NLQ0005,
                    "no file extension found. Expected .json",
                ));
            }
        }

        let json = std::fs::read_to_string(path)
            .map_err(|e| NlqError::io(&e, path.display().to_string()))?;
        let lexicon = Self::from_json(&json)
            .map_err(|e| e.with_context(path.display().to_string()))?;
        log::info!(
            "loaded lexicon from {}: {} conditions, {} observations, {} medications, {} urgency keywords",
            path.display(),
            lexicon.conditions.len(),
            lexicon.observations.len(),
            lexicon.medications.len(),
            lexicon.urgency.len(),
        );
        Ok(lexicon)
    }

    /// Overlay `other` on top of this lexicon
    ///
    /// Terms present in both take the entry from `other`; new terms are
    /// appended after the existing ones.
    pub fn merge(mut self, other: Lexicon) -> Self {
        self.conditions.extend(other.conditions);
        self.observations.extend(other.observations);
        self.medications.extend(other.medications);
        for (keyword, weight) in other.urgency.weights {
            self.urgency.weights.insert(keyword, weight);
        }
        self
    }
}

fn validated_table(section: &str, entries: IndexMap<String, LexiconEntry>) -> Result<TermLexicon> {
    let mut table = TermLexicon::new();
    for (term, entry) in entries {
        if term.trim().is_empty() {
            return Err(NlqError::lexicon(NLQ0002, format!("empty term in {section}")));
        }
        if entry.code.trim().is_empty() {
            return Err(NlqError::lexicon_term(
                NLQ0003,
                format!("term '{term}' in {section} has an empty code"),
                term,
            ));
        }
        table.insert(term, entry);
    }
    Ok(table)
}
