//! nlq command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use octofhir_nlq::cli::analyze::{self, AnalyzeConfig};
use octofhir_nlq::cli::output::{self, OutputFormat};
use octofhir_nlq::cli::process::{self, ProcessConfig};
use octofhir_nlq::cli::suggest::{self, SuggestConfig};
use octofhir_nlq::cli::translate::{self, TranslateConfig};
use octofhir_nlq::cli::{join_query, repl, TranslatorOptions};
use std::path::PathBuf;

/// Natural-language FHIR query tool
#[derive(Parser)]
#[command(name = "nlq")]
#[command(author, version, about = "Translate clinical questions into FHIR search requests", long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// FHIR server base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// JSON lexicon merged over the standard one
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Score sentiment polarity with built-in word lists
    #[arg(long, global = true)]
    polarity: bool,

    /// Output format (text, json, pretty, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a query into a FHIR request
    Translate {
        /// Query text
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Show the NLP analysis of a query
    Analyze {
        /// Query text
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Produce the full processing report for a query
    Process {
        /// Query text
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// List example queries
    Suggest {
        /// Case-insensitive substring filter
        filter: Option<String>,
    },

    /// Start interactive REPL
    Repl,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<()> {
    let translator = TranslatorOptions {
        base_url: cli.base_url,
        lexicon: cli.lexicon,
        polarity: cli.polarity,
    }
    .build()?;

    let format = cli.format.as_deref();
    let output_file = cli.output;

    match cli.command {
        Commands::Translate { query } => translate::translate(
            &translator,
            TranslateConfig {
                query: join_query(&query)?,
                format: OutputFormat::or_default(format, OutputFormat::Text)?,
                output_file,
            },
        ),
        Commands::Analyze { query } => analyze::analyze(
            &translator,
            AnalyzeConfig {
                query: join_query(&query)?,
                format: OutputFormat::or_default(format, OutputFormat::JsonPretty)?,
                output_file,
            },
        ),
        Commands::Process { query } => process::process(
            &translator,
            ProcessConfig {
                query: join_query(&query)?,
                format: OutputFormat::or_default(format, OutputFormat::JsonPretty)?,
                output_file,
            },
        ),
        Commands::Suggest { filter } => suggest::suggest(
            &translator,
            SuggestConfig {
                filter,
                format: OutputFormat::or_default(format, OutputFormat::Text)?,
                output_file,
            },
        ),
        Commands::Repl => repl::run(&translator),
    }
}
