//! Analyze command implementation

use super::output::{self, OutputFormat};
use crate::{NlpAnalysis, QueryTranslator};
use anyhow::Result;
use octofhir_nlq_analysis::EntityCategory;
use std::path::PathBuf;

/// Configuration for analyze command
pub struct AnalyzeConfig {
    pub query: String,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Analyze a query and print the NLP analysis
pub fn analyze(translator: &QueryTranslator, config: AnalyzeConfig) -> Result<()> {
    let analysis = translator.analyze(&config.query);

    match config.format {
        OutputFormat::Table | OutputFormat::Text => {
            output::write_output(&analysis_table(&analysis), config.output_file.as_deref())
        }
        format => output::print_output(&analysis, format, config.output_file.as_deref()),
    }
}

/// Key/value table of an analysis, listing only non-empty entity categories
pub fn analysis_table(analysis: &NlpAnalysis) -> String {
    let sentiment = &analysis.sentiment;
    let mut rows: Vec<(String, String)> = vec![
        ("intent".into(), analysis.intent.to_string()),
        ("confidence".into(), format!("{:.2}", analysis.confidence)),
        ("complexity".into(), format!("{:.2}", analysis.query_complexity)),
        ("specialty".into(), analysis.medical_specialty.to_string()),
        ("method".into(), analysis.nlp_method.as_str().to_string()),
        ("urgency".into(), sentiment.urgency_score.to_string()),
        ("priority".into(), sentiment.priority_level.to_string()),
        ("polarity".into(), format!("{:.2}", sentiment.polarity)),
    ];

    rows.extend(EntityCategory::ALL.iter().filter_map(|category| {
        let values = analysis.entities.values(*category);
        (!values.is_empty()).then(|| (category.to_string(), values.join(", ")))
    }));

    output::format_rows(rows)
}
