//! Process command implementation

use super::output::{self, OutputFormat};
use crate::{QueryReport, QueryTranslator};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Configuration for process command
pub struct ProcessConfig {
    pub query: String,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Process a query and print the full report
pub fn process(translator: &QueryTranslator, config: ProcessConfig) -> Result<()> {
    let report = translator.process(&config.query);

    match config.format {
        OutputFormat::Text => {
            output::write_output(&report_summary(&report), config.output_file.as_deref())
        }
        format => output::print_output(&report, format, config.output_file.as_deref()),
    }
}

/// Human-readable summary of a report
pub fn report_summary(report: &QueryReport) -> String {
    let interpretation = &report.clinical_interpretation;
    let mut lines = vec![
        report.formatted_request.clone(),
        String::new(),
        format!("{} {}", "Concern:".bold(), interpretation.primary_concern),
        format!("{} {}", "Urgency:".bold(), interpretation.urgency_assessment),
        format!("{} {}", "Context:".bold(), interpretation.clinical_context),
    ];

    if !interpretation.potential_diagnoses.is_empty() {
        lines.push(format!(
            "{} {}",
            "Diagnoses:".bold(),
            interpretation.potential_diagnoses.join(", ")
        ));
    }
    if !interpretation.required_assessments.is_empty() {
        lines.push(format!(
            "{} {}",
            "Assessments:".bold(),
            interpretation.required_assessments.join(", ")
        ));
    }
    if !report.recommendations.is_empty() {
        lines.push("Recommendations:".bold().to_string());
        lines.extend(report.recommendations.iter().map(|r| format!("  - {r}")));
    }

    lines.join("\n")
}
