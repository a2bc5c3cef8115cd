//! Lexicon and pattern driven entity extraction

use crate::analyzer::{Annotations, NoOpAnalyzer, SpanLabel, TextAnalyzer};
use crate::entities::EntityBag;
use octofhir_nlq_lexicon::Lexicon;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};

/// How the entities of a query were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NlpMethod {
    /// An analyzer contributed annotations before the rule pass
    Annotated,
    /// Lexicon and regex rules only
    Regex,
}

impl NlpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annotated => "annotated",
            Self::Regex => "regex",
        }
    }
}

static SYMPTOM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(pain|ache|hurt|sore|tender)\b",
        r"\b(fever|temperature|hot|cold)\b",
        r"\b(nausea|dizzy|tired|fatigue)\b",
        r"\b(cough|sneeze|runny nose)\b",
        r"\b(headache|migraine|head pain)\b",
        r"\b(shortness of breath|difficulty breathing)\b",
    ])
});

static SEVERITY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(severe|mild|moderate|chronic|acute)\b",
        r"\b(intense|sharp|dull|throbbing)\b",
        r"\b(persistent|occasional|frequent)\b",
    ])
});

static AGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"over\s+(\d+)",
        r"above\s+(\d+)",
        r"(\d+)\s+years?\s*old",
        r"age\s+(\d+)",
        r"aged\s+(\d+)",
    ])
});

static MALE: LazyLock<Regex> = LazyLock::new(|| compile_one(r"\bmale\b"));
static FEMALE: LazyLock<Regex> = LazyLock::new(|| compile_one(r"\bfemale\b"));
static PATIENT_ID: LazyLock<Regex> = LazyLock::new(|| compile_one(r"patient\s+([a-z0-9-]+)"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| compile_one(r"(?i)\bnamed?\s+([a-z]+(?:\s+[a-z]+)*)"));

/// Words that end a name captured after "name"/"named"
const NAME_STOP_WORDS: &[&str] = &[
    "with", "who", "whose", "from", "for", "and", "or", "that", "in", "on", "at", "of", "is",
    "over", "under", "above", "below", "aged", "age", "born", "having", "has",
];

/// Substrings marking an annotated noun as a symptom
const SYMPTOM_WORDS: &[&str] = &["pain", "ache", "swelling", "rash", "fever"];

/// Tokens recognized as body parts
const BODY_PART_WORDS: &[&str] = &[
    "head", "chest", "back", "leg", "arm", "stomach", "heart", "lung", "kidney", "liver",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile_one(p)).collect()
}

fn compile_one(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid extraction regex pattern")
}

/// Extracts structured entities from free-text queries
#[derive(Clone)]
pub struct EntityExtractor {
    lexicon: Arc<Lexicon>,
    analyzer: Arc<dyn TextAnalyzer>,
}

impl EntityExtractor {
    /// Create an extractor without an external analyzer
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            analyzer: Arc::new(NoOpAnalyzer),
        }
    }

    /// Use an external analyzer for annotation merging
    pub fn with_analyzer(mut self, analyzer: Arc<dyn TextAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Extract entities from a query
    pub fn extract(&self, query: &str) -> EntityBag {
        self.extract_detailed(query).0
    }

    /// Extract entities and report whether annotations contributed
    pub fn extract_detailed(&self, query: &str) -> (EntityBag, NlpMethod) {
        let lowered = query.to_lowercase();
        let mut bag = EntityBag::new();

        let method = match self.analyzer.annotate(&lowered) {
            Ok(Some(annotations)) => {
                merge_annotations(&mut bag, &annotations);
                NlpMethod::Annotated
            }
            Ok(None) => NlpMethod::Regex,
            Err(e) => {
                log::warn!(
                    "annotation failed, using rules only: {}",
                    e.from_analyzer(self.analyzer.name())
                );
                NlpMethod::Regex
            }
        };

        bag.conditions
            .extend(self.lexicon.conditions().matches(&lowered).map(String::from));
        bag.observations
            .extend(self.lexicon.observations().matches(&lowered).map(String::from));
        bag.medications
            .extend(self.lexicon.medications().matches(&lowered).map(String::from));

        bag.symptoms.extend(captures(&SYMPTOM_PATTERNS, &lowered));
        bag.severity_indicators
            .extend(captures(&SEVERITY_PATTERNS, &lowered));

        bag.ages.extend(
            captures(&AGE_PATTERNS, &lowered).filter_map(|age| age.parse::<u32>().ok()),
        );

        if let Some(gender) = gender(&lowered) {
            bag.genders.push(gender.to_string());
        }

        bag.patient_ids.extend(
            PATIENT_ID
                .captures_iter(&lowered)
                .map(|c| c[1].to_string()),
        );

        if bag.names.is_empty() {
            if let Some(name) = named(query) {
                bag.names.push(name);
            }
        }

        log::debug!("extracted {} entities from {:?}", bag.total_values(), query);
        (bag, method)
    }
}

/// First capture group of every match of every pattern, in pattern order
fn captures<'a>(patterns: &'a [Regex], text: &'a str) -> impl Iterator<Item = String> + 'a {
    patterns
        .iter()
        .flat_map(move |re| re.captures_iter(text).map(|c| c[1].to_string()))
}

/// Gender mentioned in the lowercased query
///
/// A query naming both genders resolves to "female".
fn gender(lowered: &str) -> Option<&'static str> {
    if MALE.is_match(lowered) && !FEMALE.is_match(lowered) {
        Some("male")
    } else if FEMALE.is_match(lowered) {
        Some("female")
    } else {
        None
    }
}

/// Title-cased name following "name"/"named"
fn named(query: &str) -> Option<String> {
    let caps = NAME.captures(query)?;
    let words: Vec<String> = caps[1]
        .split_whitespace()
        .take_while(|w| !NAME_STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .map(title_case)
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn merge_annotations(bag: &mut EntityBag, annotations: &Annotations) {
    for span in &annotations.spans {
        match span.label {
            SpanLabel::Person => bag.names.push(
                span.text.split_whitespace().map(title_case).collect::<Vec<_>>().join(" "),
            ),
            SpanLabel::Date => bag.time_periods.push(span.text.to_lowercase()),
            SpanLabel::Cardinal => {
                if !span.text.is_empty() && span.text.chars().all(|c| c.is_ascii_digit()) {
                    if let Ok(n) = span.text.parse::<u32>() {
                        bag.numbers.push(n);
                    }
                }
            }
            // organizations and locations land in body_parts
            SpanLabel::Organization | SpanLabel::Location => {
                bag.body_parts.push(span.text.to_lowercase())
            }
            SpanLabel::Other => {}
        }
    }

    for token in &annotations.tokens {
        let text = token.text.to_lowercase();
        if token.is_noun
            && token.is_core_argument
            && SYMPTOM_WORDS.iter().any(|w| text.contains(w))
        {
            bag.symptoms.push(text.clone());
        }
        if BODY_PART_WORDS.contains(&text.as_str()) {
            bag.body_parts.push(text);
        }
    }
}
