//! CLI functionality for the nlq tool
//!
//! This module contains all CLI-related functionality including:
//! - Query translation
//! - Analysis and full processing reports
//! - Example query suggestions
//! - REPL
//! - Output formatting

pub mod analyze;
pub mod output;
pub mod process;
pub mod repl;
pub mod suggest;
pub mod translate;

use crate::QueryTranslator;
use anyhow::{Context, Result};
use octofhir_nlq_analysis::WordListPolarity;
use std::path::PathBuf;
use std::sync::Arc;

/// Translator settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct TranslatorOptions {
    pub base_url: Option<String>,
    pub lexicon: Option<PathBuf>,
    /// Score polarity with the built-in word lists
    pub polarity: bool,
}

impl TranslatorOptions {
    pub fn build(&self) -> Result<QueryTranslator> {
        let mut builder = QueryTranslator::builder();
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.clone());
        }
        if let Some(path) = &self.lexicon {
            builder = builder.lexicon_file(path.clone());
        }
        if self.polarity {
            builder = builder.analyzer(Arc::new(WordListPolarity));
        }
        builder.build().context("Failed to configure translator")
    }
}

/// Join positional words into one query, rejecting blank input
pub fn join_query(words: &[String]) -> Result<String> {
    let query = words.join(" ");
    if query.trim().is_empty() {
        anyhow::bail!("Query text is empty");
    }
    Ok(query)
}
