//! Translate command implementation

use super::output::{self, OutputFormat};
use crate::{format_request, QueryTranslator};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for translate command
pub struct TranslateConfig {
    pub query: String,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Translate a query and print the FHIR request
pub fn translate(translator: &QueryTranslator, config: TranslateConfig) -> Result<()> {
    let outcome = translator.translate(&config.query);

    match config.format {
        OutputFormat::Text => {
            output::write_output(&format_request(&outcome), config.output_file.as_deref())
        }
        format => output::print_output(&outcome, format, config.output_file.as_deref()),
    }
}
