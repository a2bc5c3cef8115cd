//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - NLQ0001-NLQ0099: Lexicon errors (term tables, JSON lexicon files)
//! - NLQ0100-NLQ0199: Configuration errors (base URL, translator setup)
//! - NLQ0200-NLQ0299: Analyzer errors (optional text annotation / polarity)
//! - NLQ0300-NLQ0399: System errors (I/O)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a lexicon error (0001-0099)
    pub const fn is_lexicon_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a configuration error (0100-0199)
    pub const fn is_config_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an analyzer error (0200-0299)
    pub const fn is_analyzer_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0300-0399)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NLQ{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Lexicon errors (0001-0099)
    map.insert(1, ErrorInfo::new("Malformed lexicon document")
        .with_help("Lexicon files are JSON objects with optional conditions, observations, medications and urgency sections"));
    map.insert(2, ErrorInfo::new("Empty lexicon term"));
    map.insert(3, ErrorInfo::new("Empty coded identifier"));
    map.insert(4, ErrorInfo::new("Urgency weight out of range")
        .with_help("Urgency weights must be integers between 1 and 5"));
    map.insert(5, ErrorInfo::new("Unsupported lexicon file format"));

    // Configuration errors (0100-0199)
    map.insert(100, ErrorInfo::new("Invalid base URL")
        .with_help("The FHIR base URL must start with http:// or https://"));
    map.insert(101, ErrorInfo::new("Invalid translator configuration"));

    // Analyzer errors (0200-0299)
    map.insert(200, ErrorInfo::new("Text annotation failed"));
    map.insert(201, ErrorInfo::new("Polarity analysis failed"));

    // System errors (0300-0399)
    map.insert(300, ErrorInfo::new("I/O error"));

    map
});

// Lexicon errors
pub const NLQ0001: ErrorCode = ErrorCode::new(1);
pub const NLQ0002: ErrorCode = ErrorCode::new(2);
pub const NLQ0003: ErrorCode = ErrorCode::new(3);
pub const NLQ0004: ErrorCode = ErrorCode::new(4);
pub const NLQ0005: ErrorCode = ErrorCode::new(5);

// Configuration errors
pub const NLQ0100: ErrorCode = ErrorCode::new(100);
pub const NLQ0101: ErrorCode = ErrorCode::new(101);

// Analyzer errors
pub const NLQ0200: ErrorCode = ErrorCode::new(200);
pub const NLQ0201: ErrorCode = ErrorCode::new(201);

// System errors
pub const NLQ0300: ErrorCode = ErrorCode::new(300);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(NLQ0001.to_string(), "NLQ0001");
        assert_eq!(NLQ0100.to_string(), "NLQ0100");
        assert_eq!(NLQ0300.to_string(), "NLQ0300");
    }

    #[test]
    fn test_error_code_ranges() {
        assert!(NLQ0004.is_lexicon_error());
        assert!(NLQ0100.is_config_error());
        assert!(NLQ0201.is_analyzer_error());
        assert!(NLQ0300.is_system_error());
        assert!(!NLQ0300.is_lexicon_error());
    }

    #[test]
    fn test_error_info_lookup() {
        assert_eq!(NLQ0004.info().description, "Urgency weight out of range");
        assert!(NLQ0100.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
