//! Output formatting utilities

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    Json,
    JsonPretty,
    Table,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "pretty" | "json-pretty" => Ok(Self::JsonPretty),
            "table" => Ok(Self::Table),
            other => bail!("Unsupported output format: {other}. Use text, json, pretty or table"),
        }
    }

    /// Parse an optional flag value, falling back to `default`
    pub fn or_default(value: Option<&str>, default: Self) -> Result<Self> {
        value.map_or(Ok(default), Self::parse)
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stdout().is_terminal()),
    }
}

pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!(
                "{}",
                format_success(&format!("Output written to {}", path.display()))
            );
        }
        None => println!("{content}"),
    }
    Ok(())
}

/// Serialize a value as JSON
pub fn format_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

#[derive(Tabled)]
struct KeyValue {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render key/value pairs as a table
pub fn format_rows<K: Into<String>>(rows: impl IntoIterator<Item = (K, String)>) -> String {
    let rows: Vec<KeyValue> = rows
        .into_iter()
        .map(|(key, value)| KeyValue {
            key: key.into(),
            value,
        })
        .collect();
    Table::new(rows).with(Style::modern()).to_string()
}

/// Render a JSON object as a key/value table
pub fn format_as_table(value: &Value) -> Option<String> {
    match value {
        Value::Object(obj) => Some(format_rows(
            obj.iter().map(|(k, v)| (k.clone(), format_value(v))),
        )),
        Value::Array(items) if items.is_empty() => Some("(empty list)".to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| format!("  {}. {}", i + 1, format_value(v)))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        _ => None,
    }
}

/// Format a simple value for display
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) if arr.iter().all(|v| !v.is_array() && !v.is_object()) => arr
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{}} with {} fields", obj.len()),
    }
}

/// Print a serializable value in a structured format
///
/// [`OutputFormat::Text`] has no generic rendering and falls back to pretty
/// JSON.
pub fn print_output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let content = match format {
        OutputFormat::Json => format_json(value, false)?,
        OutputFormat::JsonPretty | OutputFormat::Text => format_json(value, true)?,
        OutputFormat::Table => {
            let json = serde_json::to_value(value).context("Failed to serialize JSON")?;
            match format_as_table(&json) {
                Some(table) => table,
                None => format_json(&json, true)?,
            }
        }
    };

    write_output(&content, output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("json-pretty").unwrap(), OutputFormat::JsonPretty);
        assert!(OutputFormat::parse("xml").is_err());
        assert_eq!(
            OutputFormat::or_default(None, OutputFormat::Table).unwrap(),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(["a", "b"])), "a, b");
        assert_eq!(format_value(&json!([[1], [2]])), "[2 items]");
        assert_eq!(format_value(&json!(0.5)), "0.5");
    }

    #[test]
    fn test_table_has_rows() {
        let table = format_as_table(&json!({"intent": "find_patients"})).unwrap();
        assert!(table.contains("intent"));
        assert!(table.contains("find_patients"));
    }
}
