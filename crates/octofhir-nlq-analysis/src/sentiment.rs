//! Urgency and sentiment scoring

use crate::analyzer::{NoOpAnalyzer, TextAnalyzer};
use octofhir_nlq_lexicon::{Lexicon, MIN_URGENCY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Clinical priority derived from the urgency score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Routine,
    Moderate,
    Urgent,
    Emergency,
}

impl PriorityLevel {
    /// Map an urgency score (1-5) to a priority
    pub const fn from_urgency(score: u8) -> Self {
        match score {
            5.. => Self::Emergency,
            4 => Self::Urgent,
            3 => Self::Moderate,
            _ => Self::Routine,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Moderate => "moderate",
            Self::Urgent => "urgent",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment and urgency of one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Polarity in [-1, 1]; 0.0 when no analyzer provides one
    pub polarity: f64,
    /// Highest urgency weight matched, 1 when none
    pub urgency_score: u8,
    /// Urgency keywords found in the query
    pub emotional_indicators: Vec<String>,
    pub priority_level: PriorityLevel,
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self {
            polarity: 0.0,
            urgency_score: MIN_URGENCY,
            emotional_indicators: Vec::new(),
            priority_level: PriorityLevel::Routine,
        }
    }
}

/// Scores urgency from lexicon keywords and polarity from an optional analyzer
#[derive(Clone)]
pub struct SentimentScorer {
    lexicon: Arc<Lexicon>,
    analyzer: Arc<dyn TextAnalyzer>,
}

impl SentimentScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            analyzer: Arc::new(NoOpAnalyzer),
        }
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn TextAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn score(&self, query: &str) -> SentimentResult {
        let mut result = SentimentResult::default();

        match self.analyzer.polarity(query) {
            Ok(Some(polarity)) if polarity.is_finite() => {
                result.polarity = polarity.clamp(-1.0, 1.0);
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!(
                    "polarity scoring failed, using neutral: {}",
                    e.from_analyzer(self.analyzer.name())
                );
            }
        }

        let lowered = query.to_lowercase();
        for (keyword, weight) in self.lexicon.urgency().matches(&lowered) {
            result.emotional_indicators.push(keyword.to_string());
            result.urgency_score = result.urgency_score.max(weight);
        }
        result.priority_level = PriorityLevel::from_urgency(result.urgency_score);

        result
    }
}
