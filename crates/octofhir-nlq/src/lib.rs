//! Natural-language to FHIR query translation
//!
//! This crate ties the workspace together:
//! - [`lexicon`]: coded term tables and urgency weights
//! - [`analysis`]: entity extraction, intent, urgency and confidence
//! - [`fhir`]: search query construction and display formatting
//! - [`QueryTranslator`]: the service combining them, plus clinical reports
//!   and example queries
//!
//! # Example
//!
//! ```
//! use octofhir_nlq::QueryTranslator;
//!
//! let translator = QueryTranslator::new();
//! let report = translator.process("List all female patients named Sarah with heart disease");
//!
//! assert_eq!(report.nlp_analysis.entities.names, vec!["Sarah"]);
//! assert!(report.formatted_request.contains("gender=female"));
//! ```

pub use octofhir_nlq_analysis as analysis;
pub use octofhir_nlq_diagnostics as diagnostics;
pub use octofhir_nlq_fhir as fhir;
pub use octofhir_nlq_lexicon as lexicon;

mod config;
mod report;
mod suggestions;
mod translator;

pub use config::{validate_base_url, TranslatorBuilder, TranslatorConfig};
pub use report::QueryReport;
pub use suggestions::{suggestions, MAX_FILTERED, SUGGESTIONS};
pub use translator::QueryTranslator;

// Convenience re-exports
pub use octofhir_nlq_analysis::{Intent, NlpAnalysis, PriorityLevel, TextAnalyzer};
pub use octofhir_nlq_diagnostics::{NlqError, Result};
pub use octofhir_nlq_fhir::{format_request, FhirQuery, QueryOutcome, ResourceType};
pub use octofhir_nlq_lexicon::Lexicon;

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
