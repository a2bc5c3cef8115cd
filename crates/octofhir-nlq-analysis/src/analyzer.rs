//! Optional text-analysis capability
//!
//! The pipeline can be enriched by an external analyzer providing named
//! entity annotations and sentiment polarity. Both are best-effort: an
//! analyzer that returns `Ok(None)` or an error leaves the pipeline on its
//! regex and keyword rules with neutral defaults.

use octofhir_nlq_diagnostics::NlqError;
use serde::{Deserialize, Serialize};

/// Label assigned to an annotated span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanLabel {
    Person,
    Date,
    Cardinal,
    Organization,
    Location,
    Other,
}

/// A labelled span of the query text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSpan {
    pub text: String,
    pub label: SpanLabel,
}

impl AnnotatedSpan {
    pub fn new(text: impl Into<String>, label: SpanLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// A token with the coarse syntactic facts the extractor uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Part of speech is a noun
    pub is_noun: bool,
    /// Token is the subject or direct object of its clause
    pub is_core_argument: bool,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_noun: false,
            is_core_argument: false,
        }
    }

    pub fn noun(mut self, core_argument: bool) -> Self {
        self.is_noun = true;
        self.is_core_argument = core_argument;
        self
    }
}

/// Annotations produced by an analyzer for one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    pub spans: Vec<AnnotatedSpan>,
    pub tokens: Vec<Token>,
}

/// Trait for optional text analyzers
///
/// Implementations must be free of observable side effects; the pipeline
/// may call them concurrently from several threads.
pub trait TextAnalyzer: Send + Sync {
    /// Name used in log messages
    fn name(&self) -> &str;

    /// Named-entity annotations for the lowercased query text
    fn annotate(&self, _text: &str) -> Result<Option<Annotations>, NlqError> {
        Ok(None)
    }

    /// Sentiment polarity in [-1, 1]
    fn polarity(&self, _text: &str) -> Result<Option<f64>, NlqError> {
        Ok(None)
    }
}

/// Analyzer that contributes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpAnalyzer;

impl TextAnalyzer for NoOpAnalyzer {
    fn name(&self) -> &str {
        "noop"
    }
}

/// Polarity from small positive/negative word lists
///
/// Polarity is `(positive - negative) / (positive + negative)` over the
/// matching words, or 0 when none match.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListPolarity;

const POSITIVE_WORDS: &[&str] = &[
    "good", "better", "great", "well", "improving", "improved", "stable", "normal", "fine",
    "healthy", "recovered", "happy", "relieved",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "worse", "worst", "terrible", "awful", "severe", "sick", "ill", "poor", "worried",
    "scared", "dizzy", "tired", "pain", "hurts",
];

impl TextAnalyzer for WordListPolarity {
    fn name(&self) -> &str {
        "word-list"
    }

    fn polarity(&self, text: &str) -> Result<Option<f64>, NlqError> {
        let lowered = text.to_lowercase();
        let (mut positive, mut negative) = (0u32, 0u32);
        for word in lowered.split(|c: char| !c.is_alphabetic()).filter(|w| !w.is_empty()) {
            if POSITIVE_WORDS.contains(&word) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&word) {
                negative += 1;
            }
        }
        let total = positive + negative;
        if total == 0 {
            return Ok(Some(0.0));
        }
        Ok(Some((f64::from(positive) - f64::from(negative)) / f64::from(total)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_contributes_nothing() {
        assert_eq!(NoOpAnalyzer.annotate("anything").unwrap(), None);
        assert_eq!(NoOpAnalyzer.polarity("anything").unwrap(), None);
    }

    #[test]
    fn test_word_list_polarity() {
        let p = WordListPolarity;
        assert_eq!(p.polarity("I feel terrible and dizzy").unwrap(), Some(-1.0));
        assert_eq!(p.polarity("Blood pressure is stable and normal").unwrap(), Some(1.0));
        assert_eq!(p.polarity("feeling better but still in pain").unwrap(), Some(0.0));
        assert_eq!(p.polarity("list patients").unwrap(), Some(0.0));
    }

    #[test]
    fn test_word_list_ignores_annotations() {
        assert_eq!(WordListPolarity.annotate("John Smith").unwrap(), None);
    }
}
