//! Natural-language analysis of clinical queries
//!
//! This crate turns free text into the structured facts needed to build a
//! FHIR search:
//!
//! - **Entities**: conditions, observations and medications from the lexicon,
//!   plus symptoms, severity, ages, gender, patient ids and names from
//!   regular expressions ([`EntityExtractor`])
//! - **Sentiment**: urgency score and priority from weighted keywords, and
//!   optional polarity ([`SentimentScorer`])
//! - **Intent**: an ordered first-match rule table ([`IntentClassifier`])
//! - **Confidence**: an additive heuristic in [0, 1] ([`ConfidenceScorer`])
//! - **Interpretation**: specialty, clinical summary, recommendations and
//!   data requirements
//!
//! [`NlpPipeline`] runs the stages in order and returns an [`NlpAnalysis`].
//! Every stage is deterministic and infallible. An external
//! [`TextAnalyzer`] may enrich extraction and polarity; its failures are
//! logged and ignored.
//!
//! # Example
//!
//! ```
//! use octofhir_nlq_analysis::{Intent, NlpPipeline};
//!
//! let analysis = NlpPipeline::default().analyze("Show me diabetic patients over 50");
//! assert_eq!(analysis.intent, Intent::FindPatients);
//! assert_eq!(analysis.entities.conditions, vec!["diabetes"]);
//! assert_eq!(analysis.entities.ages, vec![50]);
//! ```

pub mod analyzer;
pub mod confidence;
pub mod entities;
pub mod extractor;
pub mod intent;
pub mod interpretation;
pub mod pipeline;
pub mod sentiment;
pub mod specialty;

pub use analyzer::{
    AnnotatedSpan, Annotations, NoOpAnalyzer, SpanLabel, TextAnalyzer, Token, WordListPolarity,
};
pub use confidence::{query_complexity, ConfidenceScorer};
pub use entities::{EntityBag, EntityCategory};
pub use extractor::{EntityExtractor, NlpMethod};
pub use intent::{Intent, IntentClassifier, IntentRule};
pub use interpretation::{
    recommendations, ClinicalInterpretation, DataRequirements, PatientDemographics,
};
pub use pipeline::{NlpAnalysis, NlpPipeline};
pub use sentiment::{PriorityLevel, SentimentResult, SentimentScorer};
pub use specialty::MedicalSpecialty;
