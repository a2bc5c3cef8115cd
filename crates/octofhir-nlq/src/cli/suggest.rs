//! Suggest command implementation

use super::output::{self, OutputFormat};
use crate::QueryTranslator;
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for suggest command
pub struct SuggestConfig {
    pub filter: Option<String>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Print example queries
pub fn suggest(translator: &QueryTranslator, config: SuggestConfig) -> Result<()> {
    let suggestions = translator.suggestions(config.filter.as_deref());

    match config.format {
        OutputFormat::Text => {
            let content = if suggestions.is_empty() {
                "No matching suggestions".to_string()
            } else {
                suggestions
                    .iter()
                    .enumerate()
                    .map(|(i, s)| format!("  {}. {}", i + 1, s))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            output::write_output(&content, config.output_file.as_deref())
        }
        format => output::print_output(&suggestions, format, config.output_file.as_deref()),
    }
}
