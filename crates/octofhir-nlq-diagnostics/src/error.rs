//! Translator error types

use crate::{ErrorCode, NLQ0300};
use thiserror::Error;

/// Main translator error type
#[derive(Debug, Clone, Error)]
pub enum NlqError {
    /// Lexicon loading or validation error
    #[error("{code}: {message}")]
    Lexicon {
        code: ErrorCode,
        message: String,
        term: Option<String>,
        context: Option<String>,
    },

    /// Configuration error
    #[error("{code}: {message}")]
    Config {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Optional text analyzer failure
    #[error(
        "{code}: {message}{}",
        .analyzer.as_deref().map(|a| format!(" (analyzer '{a}')")).unwrap_or_default()
    )]
    Analyzer {
        code: ErrorCode,
        message: String,
        analyzer: Option<String>,
    },

    /// System error
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl NlqError {
    /// Create a lexicon error
    pub fn lexicon(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Lexicon {
            code,
            message: message.into(),
            term: None,
            context: None,
        }
    }

    /// Create a lexicon error for a specific term
    pub fn lexicon_term(
        code: ErrorCode,
        message: impl Into<String>,
        term: impl Into<String>,
    ) -> Self {
        Self::Lexicon {
            code,
            message: message.into(),
            term: Some(term.into()),
            context: None,
        }
    }

    /// Create a configuration error
    pub fn config(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create an analyzer error
    pub fn analyzer(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Analyzer {
            code,
            message: message.into(),
            analyzer: None,
        }
    }

    /// Wrap an I/O error
    pub fn io(err: &std::io::Error, context: impl Into<String>) -> Self {
        Self::System {
            code: NLQ0300,
            message: err.to_string(),
            context: Some(context.into()),
        }
    }

    /// Attach context to lexicon, config and system errors
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        match &mut self {
            Self::Lexicon { context, .. }
            | Self::Config { context, .. }
            | Self::System { context, .. } => *context = Some(ctx.into()),
            Self::Analyzer { .. } => {}
        }
        self
    }

    /// Name the analyzer that produced an analyzer error
    pub fn from_analyzer(mut self, name: impl Into<String>) -> Self {
        if let Self::Analyzer { analyzer, .. } = &mut self {
            *analyzer = Some(name.into());
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Lexicon { code, .. } => *code,
            Self::Config { code, .. } => *code,
            Self::Analyzer { code, .. } => *code,
            Self::System { code, .. } => *code,
        }
    }

    /// Get the attached context, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Lexicon { context, .. }
            | Self::Config { context, .. }
            | Self::System { context, .. } => context.as_deref(),
            Self::Analyzer { .. } => None,
        }
    }

    /// Help text for the error code, if registered
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NLQ0004, NLQ0100, NLQ0200};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lexicon_error_display() {
        let err = NlqError::lexicon_term(NLQ0004, "weight 9 for 'sepsis' is out of range", "sepsis");
        assert_eq!(err.to_string(), "NLQ0004: weight 9 for 'sepsis' is out of range");
        assert_eq!(err.code(), NLQ0004);
        assert!(err.help().is_some());
    }

    #[test]
    fn test_with_context() {
        let err = NlqError::config(NLQ0100, "invalid base url 'ftp://x'")
            .with_context("--base-url");
        assert_eq!(err.context(), Some("--base-url"));
    }

    #[test]
    fn test_analyzer_error_has_no_context() {
        let err = NlqError::analyzer(NLQ0200, "model unavailable")
            .from_analyzer("spacy")
            .with_context("ignored");
        assert!(err.context().is_none());
        assert!(matches!(err, NlqError::Analyzer { analyzer: Some(ref a), .. } if a == "spacy"));
    }

    #[test]
    fn test_analyzer_error_display_names_analyzer() {
        let err = NlqError::analyzer(NLQ0200, "model unavailable");
        assert_eq!(err.to_string(), "NLQ0200: model unavailable");
        assert_eq!(
            err.from_analyzer("spacy").to_string(),
            "NLQ0200: model unavailable (analyzer 'spacy')"
        );
    }

    #[test]
    fn test_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = NlqError::io(&io, "lexicon.json");
        assert!(err.code().is_system_error());
        assert_eq!(err.context(), Some("lexicon.json"));
    }
}
