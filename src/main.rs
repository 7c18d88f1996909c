//! `versefind` CLI: compile scripture corpora and look up references.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use versefind::bible::{format_result, SearchResponse};
use versefind::config::Config;
use versefind::constants::repl;
use versefind::corpus_files;
use versefind::services::scripture::{ScriptureProvider, ScriptureService};

#[derive(Parser)]
#[command(
    name = "versefind",
    version,
    about = "Compile scripture corpora and look up verse references"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a directory of raw `.txt` verse dumps into a JSON document.
    Convert {
        /// Directory to scan recursively (defaults to BIBLE_SOURCE_DIR).
        input: Option<PathBuf>,

        /// Output document path (defaults to BIBLE_PATH).
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Version label stored in the document (defaults to BIBLE_VERSION).
        #[arg(long)]
        bible_version: Option<String>,
    },

    /// Look up a reference, e.g. `genesis 1:1` or `1 samuel 1:1-5`.
    Search {
        /// Reference query; multiple words are joined with spaces.
        #[arg(required = true)]
        query: Vec<String>,

        /// Compiled document to search (defaults to BIBLE_PATH).
        #[arg(long)]
        bible: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin, one per line.
    Repl {
        /// Compiled document to search (defaults to BIBLE_PATH).
        #[arg(long)]
        bible: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Convert { input, output, bible_version } => {
            let input = config.resolve_source_dir(input)?;
            let output = config.resolve_bible_path(output)?;
            let version = bible_version.unwrap_or_else(|| config.bible_version.clone());
            convert(&input, &output, &version)
        }
        Commands::Search { query, bible, json } => {
            let service = open_service(&config, bible)?;
            Ok(search(&service, &query.join(" "), json))
        }
        Commands::Repl { bible } => {
            let service = open_service(&config, bible)?;
            run_repl(&service, &config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn open_service(config: &Config, bible: Option<PathBuf>) -> Result<ScriptureService> {
    let path = config.resolve_bible_path(bible)?;
    let service = ScriptureService::new();
    service
        .load_from(&path)
        .with_context(|| format!("Failed to load Bible document {}", path.display()))?;
    Ok(service)
}

fn convert(input: &Path, output: &Path, version: &str) -> Result<ExitCode> {
    let summary = corpus_files::convert_directory(input, output, version)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    for warning in &summary.report.warnings {
        eprintln!("warning: {warning}");
    }
    println!("Processed {} files", summary.files.len());
    println!(
        "JSON file created: {} ({} books, {} verses)",
        summary.output.display(),
        summary.books,
        summary.verses
    );
    Ok(ExitCode::SUCCESS)
}

fn search(service: &ScriptureService, query: &str, json: bool) -> ExitCode {
    let result = service.search(query);
    if json {
        match serde_json::to_string_pretty(&SearchResponse::from(&result)) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("Failed to serialize result: {e}"),
        }
    } else {
        println!("{}", format_result(&result));
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_repl(service: &ScriptureService, config: &Config) -> Result<()> {
    let version = service.version().unwrap_or_default();
    eprintln!("{} {} - {version}", config.app_name(), config.app_version());
    answer_queries(service, io::stdin().lock(), &mut io::stdout())
}

/// Answer one query per input line until EOF or an exit command.
fn answer_queries(
    service: &impl ScriptureProvider,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    write!(out, "{}", repl::PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        match line {
            Ok(line) => {
                let query = line.trim();
                if is_exit_command(query) {
                    break;
                }
                if !query.is_empty() {
                    writeln!(out, "{}\n", format_result(&service.search(query)))?;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                writeln!(out, "Error: input line is not valid UTF-8\n")?;
            }
            Err(e) => return Err(e.into()),
        }
        write!(out, "{}", repl::PROMPT)?;
        out.flush()?;
    }
    Ok(())
}

fn is_exit_command(input: &str) -> bool {
    repl::EXIT_COMMANDS
        .iter()
        .any(|command| input.eq_ignore_ascii_case(command))
}
