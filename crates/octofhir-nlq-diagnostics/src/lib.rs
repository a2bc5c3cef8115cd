//! Diagnostics for the natural-language query translator
//!
//! This crate provides the error handling infrastructure shared by the
//! lexicon, analysis and FHIR query crates: structured error codes and
//! the [`NlqError`] type.
//!
//! Query translation itself never fails. Errors only arise while loading
//! configuration (custom lexicons, base URLs) or from external text
//! analyzers, whose failures are logged and swallowed by the pipeline.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, NlqError>;
