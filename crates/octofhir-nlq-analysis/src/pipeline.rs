//! Query analysis pipeline

use crate::analyzer::TextAnalyzer;
use crate::confidence::{query_complexity, ConfidenceScorer};
use crate::entities::EntityBag;
use crate::extractor::{EntityExtractor, NlpMethod};
use crate::intent::{Intent, IntentClassifier};
use crate::sentiment::{SentimentResult, SentimentScorer};
use crate::specialty::MedicalSpecialty;
use octofhir_nlq_lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything learned about one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NlpAnalysis {
    pub intent: Intent,
    pub entities: EntityBag,
    pub sentiment: SentimentResult,
    pub confidence: f64,
    pub nlp_method: NlpMethod,
    pub query_complexity: f64,
    pub medical_specialty: MedicalSpecialty,
}

/// Runs extraction, sentiment, intent and confidence over a query
///
/// Extraction and sentiment scoring are independent; intent depends on the
/// extracted entities and confidence on all three.
#[derive(Clone)]
pub struct NlpPipeline {
    lexicon: Arc<Lexicon>,
    extractor: EntityExtractor,
    sentiment: SentimentScorer,
    classifier: IntentClassifier,
    confidence: ConfidenceScorer,
}

impl NlpPipeline {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            extractor: EntityExtractor::new(lexicon.clone()),
            sentiment: SentimentScorer::new(lexicon.clone()),
            classifier: IntentClassifier::new(lexicon.clone()),
            confidence: ConfidenceScorer::new(),
            lexicon,
        }
    }

    /// Route annotation and polarity through `analyzer`
    pub fn with_analyzer(mut self, analyzer: Arc<dyn TextAnalyzer>) -> Self {
        self.extractor = self.extractor.with_analyzer(analyzer.clone());
        self.sentiment = self.sentiment.with_analyzer(analyzer);
        self
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn analyze(&self, query: &str) -> NlpAnalysis {
        let (entities, nlp_method) = self.extractor.extract_detailed(query);
        let sentiment = self.sentiment.score(query);
        let intent = self.classifier.classify(query, &entities);
        let confidence = self.confidence.score(intent, &entities, &sentiment);

        log::debug!("analyzed {:?}: intent={} confidence={:.2}", query, intent, confidence);

        NlpAnalysis {
            query_complexity: query_complexity(&entities),
            medical_specialty: MedicalSpecialty::identify(&entities),
            intent,
            entities,
            sentiment,
            confidence,
            nlp_method,
        }
    }
}

impl Default for NlpPipeline {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AnnotatedSpan, Annotations, SpanLabel};
    use octofhir_nlq_diagnostics::NlqError;

    struct People;

    impl TextAnalyzer for People {
        fn name(&self) -> &str {
            "people"
        }

        fn annotate(&self, _text: &str) -> Result<Option<Annotations>, NlqError> {
            Ok(Some(Annotations {
                spans: vec![AnnotatedSpan::new("jane doe", SpanLabel::Person)],
                tokens: Vec::new(),
            }))
        }
    }

    #[test]
    fn test_regex_method_by_default() {
        let analysis = NlpPipeline::default().analyze("show me diabetic patients over 50");
        assert_eq!(analysis.nlp_method, NlpMethod::Regex);
        assert_eq!(analysis.intent, Intent::FindPatients);
        assert_eq!(analysis.medical_specialty, MedicalSpecialty::Endocrinology);
    }

    #[test]
    fn test_annotations_switch_method() {
        let analysis = NlpPipeline::default()
            .with_analyzer(Arc::new(People))
            .analyze("find patient records named bob");
        assert_eq!(analysis.nlp_method, NlpMethod::Annotated);
        assert_eq!(analysis.entities.names, vec!["Jane Doe"]);
    }
}
