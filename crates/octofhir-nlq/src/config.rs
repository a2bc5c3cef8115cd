//! Translator configuration

use crate::translator::QueryTranslator;
use octofhir_nlq_analysis::{NoOpAnalyzer, TextAnalyzer};
use octofhir_nlq_diagnostics::{NlqError, Result, NLQ0100, NLQ0101};
use octofhir_nlq_fhir::DEFAULT_BASE_URL;
use octofhir_nlq_lexicon::Lexicon;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Validated translator settings
#[derive(Clone)]
pub struct TranslatorConfig {
    /// FHIR service root, without a trailing slash
    pub base_url: String,
    pub lexicon: Arc<Lexicon>,
    pub analyzer: Arc<dyn TextAnalyzer>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lexicon: Arc::new(Lexicon::standard()),
            analyzer: Arc::new(NoOpAnalyzer),
        }
    }
}

impl fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("base_url", &self.base_url)
            .field("analyzer", &self.analyzer.name())
            .finish_non_exhaustive()
    }
}

/// Builder for [`QueryTranslator`]
///
/// ```
/// use octofhir_nlq::QueryTranslator;
///
/// let translator = QueryTranslator::builder()
///     .base_url("http://localhost:8080/fhir/")
///     .build()
///     .unwrap();
/// assert_eq!(translator.config().base_url, "http://localhost:8080/fhir");
/// ```
#[derive(Default)]
pub struct TranslatorBuilder {
    base_url: Option<String>,
    lexicon: Option<Lexicon>,
    lexicon_file: Option<PathBuf>,
    analyzer: Option<Arc<dyn TextAnalyzer>>,
}

impl TranslatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Replace the standard lexicon
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Overlay terms from a JSON lexicon file on the base lexicon
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_file = Some(path.into());
        self
    }

    pub fn analyzer(mut self, analyzer: Arc<dyn TextAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Validate settings and assemble the translator
    pub fn build(self) -> Result<QueryTranslator> {
        let base_url = match self.base_url {
            Some(url) => validate_base_url(&url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };

        let mut lexicon = self.lexicon.unwrap_or_else(Lexicon::standard);
        if let Some(path) = self.lexicon_file {
            lexicon = lexicon.merge(Lexicon::from_file(&path)?);
        }

        let config = TranslatorConfig {
            base_url,
            lexicon: Arc::new(lexicon),
            analyzer: self.analyzer.unwrap_or_else(|| Arc::new(NoOpAnalyzer)),
        };
        log::debug!("translator configured: {config:?}");
        Ok(QueryTranslator::from_config(config))
    }
}

/// Check a FHIR base URL and strip trailing slashes
pub fn validate_base_url(url: &str) -> Result<String> {
    let url = url.trim();
    let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return Err(NlqError::config(
            NLQ0100,
            format!("base URL '{url}' must start with http:// or https://"),
        ));
    };

    if rest.trim_end_matches('/').is_empty() || rest.starts_with('/') {
        return Err(NlqError::config(NLQ0101, format!("base URL '{url}' has no host")));
    }
    if rest.contains(['?', '#']) {
        return Err(NlqError::config(
            NLQ0101,
            format!("base URL '{url}' must not carry a query string or fragment"),
        ));
    }

    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_base_urls() {
        assert_eq!(validate_base_url("https://hapi.fhir.org/baseR4").unwrap(), DEFAULT_BASE_URL);
        assert_eq!(
            validate_base_url(" http://localhost:8080/fhir// ").unwrap(),
            "http://localhost:8080/fhir"
        );
    }

    #[test]
    fn test_invalid_base_urls() {
        assert_eq!(validate_base_url("ftp://example.org").unwrap_err().code(), NLQ0100);
        assert_eq!(validate_base_url("example.org/fhir").unwrap_err().code(), NLQ0100);
        assert_eq!(validate_base_url("https://").unwrap_err().code(), NLQ0101);
        assert_eq!(validate_base_url("https://x.org/fhir?a=b").unwrap_err().code(), NLQ0101);
    }
}
