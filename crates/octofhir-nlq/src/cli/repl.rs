//! REPL implementation

use super::{analyze, output, process};
use crate::{format_request, QueryTranslator};
use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const HISTORY_FILE: &str = ".nlq_history";

/// What the loop should do after a command
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the interactive REPL
pub fn run(translator: &QueryTranslator) -> Result<()> {
    println!("{}", "FHIR Natural-Language Query REPL".cyan().bold());
    println!("Type {} for help, {} to quit", ":help".green(), ":quit".green());
    println!("Base URL: {}", translator.config().base_url);
    println!();

    let mut rl = DefaultEditor::new()?;

    let history_file: Option<PathBuf> = dirs::home_dir().map(|home| home.join(HISTORY_FILE));
    if let Some(path) = &history_file {
        if rl.load_history(path).is_err() {
            log::debug!("no REPL history at {}", path.display());
        }
    }

    loop {
        match rl.readline("nlq> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                if line.starts_with(':') {
                    match handle_command(line, translator) {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => eprintln!("{}", output::format_error(&e)),
                    }
                    continue;
                }

                let outcome = translator.translate(line);
                if outcome.is_resolved() {
                    println!("{}", format_request(&outcome).green());
                } else {
                    println!("{}", output::format_warning(&format_request(&outcome)));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }

    if let Some(path) = &history_file {
        if let Err(e) = rl.save_history(path) {
            log::warn!("failed to save REPL history to {}: {}", path.display(), e);
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Handle REPL commands (starting with :)
fn handle_command(line: &str, translator: &QueryTranslator) -> Result<Flow> {
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        ":help" | ":h" => print_help(),
        ":quit" | ":q" | ":exit" => return Ok(Flow::Quit),
        ":analyze" | ":a" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: :analyze <query>");
            }
            println!("{}", analyze::analysis_table(&translator.analyze(rest)));
        }
        ":report" | ":r" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: :report <query>");
            }
            println!("{}", process::report_summary(&translator.process(rest)));
        }
        ":suggest" | ":s" => {
            let filter = (!rest.is_empty()).then_some(rest);
            for suggestion in translator.suggestions(filter) {
                println!("  {}", suggestion.cyan());
            }
        }
        other => anyhow::bail!("Unknown command: {other}. Type :help for help"),
    }

    Ok(Flow::Continue)
}

fn print_help() {
    println!("{}", "REPL Commands:".bold());
    println!();
    println!("  {}  Show this help message", ":help, :h".green());
    println!("  {}  Quit the REPL", ":quit, :q, :exit".green());
    println!("  {}  Show the NLP analysis of a query", ":analyze <query>, :a".green());
    println!("  {}  Show the clinical report for a query", ":report <query>, :r".green());
    println!("  {}  List example queries", ":suggest [filter], :s".green());
    println!();
    println!("Any other input is translated into a FHIR request.");
    println!();
    println!("{}", "Examples:".bold());
    println!();
    println!("  {}", "Show me all diabetic patients over 50".cyan());
    println!("  {}", ":analyze severe chest pain".cyan());
    println!("  {}", ":suggest diabetes".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        let translator = QueryTranslator::new();
        assert_eq!(handle_command(":quit", &translator).unwrap(), Flow::Quit);
        assert_eq!(handle_command(":s diabetes", &translator).unwrap(), Flow::Continue);
        assert!(handle_command(":analyze", &translator).is_err());
        assert!(handle_command(":nope", &translator).is_err());
    }
}
