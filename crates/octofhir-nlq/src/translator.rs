//! Query translation service

use crate::config::{TranslatorBuilder, TranslatorConfig};
use crate::report::QueryReport;
use crate::suggestions;
use chrono::NaiveDateTime;
use octofhir_nlq_analysis::{NlpAnalysis, NlpPipeline};
use octofhir_nlq_fhir::{QueryBuilder, QueryOutcome};

/// Translates free-text clinical queries into FHIR search requests
///
/// The translator is immutable after construction and can be shared across
/// threads.
///
/// # Example
///
/// ```
/// use octofhir_nlq::{QueryTranslator, ResourceType};
///
/// let translator = QueryTranslator::new();
/// let outcome = translator.translate("Show me all diabetic patients over 50");
/// assert_eq!(outcome.resource_type(), Some(ResourceType::Patient));
///
/// let hello = translator.translate("hello there");
/// assert!(!hello.is_resolved());
/// ```
#[derive(Clone)]
pub struct QueryTranslator {
    config: TranslatorConfig,
    pipeline: NlpPipeline,
    builder: QueryBuilder,
}

impl QueryTranslator {
    /// Standard lexicon, public HAPI base URL, no external analyzer
    pub fn new() -> Self {
        Self::from_config(TranslatorConfig::default())
    }

    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    pub fn from_config(config: TranslatorConfig) -> Self {
        let pipeline =
            NlpPipeline::new(config.lexicon.clone()).with_analyzer(config.analyzer.clone());
        let builder =
            QueryBuilder::new(config.lexicon.clone()).with_base_url(config.base_url.clone());
        Self {
            config,
            pipeline,
            builder,
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn analyze(&self, query: &str) -> NlpAnalysis {
        self.pipeline.analyze(query)
    }

    pub fn translate(&self, query: &str) -> QueryOutcome {
        let analysis = self.analyze(query);
        self.builder.build(analysis.intent, &analysis.entities, query)
    }

    /// Translate with relative dates computed from `now`
    pub fn translate_at(&self, query: &str, now: NaiveDateTime) -> QueryOutcome {
        let analysis = self.analyze(query);
        self.builder
            .build_at(analysis.intent, &analysis.entities, query, now)
    }

    /// Full report: analysis, query, interpretation and follow-ups
    pub fn process(&self, query: &str) -> QueryReport {
        self.process_at(query, chrono::Local::now().naive_local())
    }

    pub fn process_at(&self, query: &str, now: NaiveDateTime) -> QueryReport {
        let analysis = self.analyze(query);
        let outcome = self
            .builder
            .build_at(analysis.intent, &analysis.entities, query, now);
        log::debug!("processed {:?}: resolved={}", query, outcome.is_resolved());
        QueryReport::new(query, now, analysis, outcome)
    }

    /// Example queries, optionally filtered by a case-insensitive substring
    pub fn suggestions(&self, filter: Option<&str>) -> Vec<&'static str> {
        suggestions::suggestions(filter)
    }
}

impl Default for QueryTranslator {
    fn default() -> Self {
        Self::new()
    }
}
