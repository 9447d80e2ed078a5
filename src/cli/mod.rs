//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{SearchError, SearchErrorKind, SearchResult};
use crate::parser::filter::normalize_extensions;
use crate::report::OutputFormat;
use crate::search::{load_keys_from_file, KeySet, MatchMode, SearchOptions};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonseek")]
#[command(about = "Search JSON files for keys and values, reporting JSON pointer paths")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Path to a JSON file or a directory to scan
    #[arg()]
    pub path: Option<String>,

    /// Read a single JSON document from standard input instead of a path
    #[arg(long, conflicts_with = "path")]
    pub stdin: bool,

    /// Comma-separated list of search terms (e.g. 'name,email,token')
    #[arg(long, conflicts_with = "keys_file")]
    pub keys: Option<String>,

    /// A single search term, repeatable
    #[arg(long = "key", action = clap::ArgAction::Append)]
    pub key: Vec<String>,

    /// File containing search terms (JSON array or newline-separated text)
    #[arg(long)]
    pub keys_file: Option<PathBuf>,

    /// Enable case-sensitive matching (default: case-insensitive)
    #[arg(long)]
    pub case_sensitive: bool,

    /// Match only against object keys
    #[arg(long, conflicts_with = "values_only")]
    pub keys_only: bool,

    /// Match only against scalar values
    #[arg(long)]
    pub values_only: bool,

    /// File extensions to scan in directories, comma-separated
    #[arg(long, default_value = "json")]
    pub extensions: String,

    /// Do not descend into subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub output: Output,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Pretty,
    Json,
}

impl From<Output> for OutputFormat {
    fn from(output: Output) -> Self {
        match output {
            Output::Pretty => OutputFormat::Pretty,
            Output::Json => OutputFormat::Json,
        }
    }
}

/// Validated run configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub keys: KeySet,
    pub options: SearchOptions,
    pub format: OutputFormat,
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl RunConfig {
    /// Create a run configuration from arguments, collecting and
    /// normalizing search terms from all three key sources
    pub fn from_args(args: &Args) -> SearchResult<Self> {
        let terms = collect_terms(args)?;
        let keys = KeySet::from_terms(terms, args.case_sensitive);
        if keys.is_empty() {
            return Err(SearchError::search(SearchErrorKind::EmptyKeySet));
        }

        let extensions = normalize_extensions(&args.extensions);
        if extensions.is_empty() {
            return Err(SearchError::search(SearchErrorKind::configuration(
                format!("No usable extensions in '{}'", args.extensions),
            )));
        }

        let mode = MatchMode::from_flags(args.keys_only, args.values_only);

        Ok(Self {
            keys,
            options: SearchOptions::new(mode, args.case_sensitive),
            format: args.output.into(),
            extensions,
            recursive: !args.no_recursive,
            verbose: args.verbose,
            quiet: args.quiet,
        })
    }
}

/// Gather terms from --keys, --key, and --keys-file in that order
fn collect_terms(args: &Args) -> SearchResult<Vec<String>> {
    let mut terms = Vec::new();

    if let Some(list) = &args.keys {
        terms.extend(list.split(',').map(|t| t.trim().to_string()));
    }

    terms.extend(args.key.iter().map(|t| t.trim().to_string()));

    if let Some(path) = &args.keys_file {
        terms.extend(load_keys_from_file(path)?);
    }

    Ok(terms)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &SearchError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    if matches!(
        error,
        SearchError::Search {
            kind: SearchErrorKind::EmptyKeySet,
            ..
        }
    ) {
        eprintln!("\nTip: pass terms with --keys name,email or repeat --key");
    }

    eprintln!("\nTry 'jsonseek --help' for usage information.");
}
