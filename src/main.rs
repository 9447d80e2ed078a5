// Allow dead code for features exported but not yet used by the CLI
#![allow(dead_code)]

use clap::Parser;
use std::path::{Path, PathBuf};

mod cli;
mod error;
mod parser;
mod report;
mod search;

use crate::cli::{Args, CliUtils, RunConfig};
use crate::error::{SearchError, SearchErrorKind, SearchResult};
use crate::parser::JsonSource;
use crate::report::OutputFormat;
use crate::search::{aggregate, search_document, FileOutcome, RunReport};

fn main() {
    let args = Args::parse();

    let config = match RunConfig::from_args(&args) {
        Ok(config) => config,
        Err(error) => {
            cli::handle_error(&error);
            std::process::exit(2);
        }
    };

    match run(&args, &config) {
        Ok(report) => {
            let use_color =
                config.format == OutputFormat::Pretty && CliUtils::should_use_color();
            print!("{}", report::render(&report, config.format, use_color));
        }
        Err(error) => {
            cli::handle_error(&error);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, config: &RunConfig) -> SearchResult<RunReport> {
    if args.stdin {
        return Ok(search_stdin(config));
    }

    if let Some(input) = &args.path {
        let root = PathBuf::from(input);
        if !root.exists() {
            return Err(SearchError::search(SearchErrorKind::PathNotFound {
                path: root,
            }));
        }
        search_path(&root, config)
    } else {
        Err(SearchError::search(SearchErrorKind::configuration(
            "No input provided. Use --stdin or provide a path".to_string(),
        )))
    }
}

fn search_stdin(config: &RunConfig) -> RunReport {
    let outcome = search_source(&JsonSource::Stdin, config);
    let per_file = vec![("<stdin>".to_string(), outcome)];
    aggregate(per_file, &config.keys, &config.options, "<stdin>")
}

fn search_path(root: &Path, config: &RunConfig) -> SearchResult<RunReport> {
    let files = if root.is_file() {
        vec![root.to_path_buf()]
    } else {
        let found =
            parser::directory::find_search_files(root, &config.extensions, config.recursive)
                .map_err(|e| {
                    SearchError::search(SearchErrorKind::io(
                        format!("Failed scanning directory: {}", e),
                        Some(root.to_path_buf()),
                    ))
                })?;

        if config.verbose {
            eprintln!("Found {} files under {}", found.len(), root.display());
        }
        found
    };

    let mut per_file = Vec::with_capacity(files.len());
    for file in files {
        let outcome = search_source(&JsonSource::File(file.clone()), config);
        if let FileOutcome::Failed(message) = &outcome {
            CliUtils::show_warning(
                &format!("Skipping {}: {}", file.display(), message),
                config.quiet,
            );
        }
        per_file.push((file.display().to_string(), outcome));
    }

    Ok(aggregate(
        per_file,
        &config.keys,
        &config.options,
        &root.display().to_string(),
    ))
}

/// Search one document source. Load or decode failures become a per-file
/// error marker rather than a run failure.
fn search_source(source: &JsonSource, config: &RunConfig) -> FileOutcome {
    match source.parse() {
        Ok(document) => {
            FileOutcome::Searched(search_document(&document, &config.keys, &config.options))
        }
        Err(error) => {
            let mut message = error.to_string();
            if let Some(preview) = &error.input_preview {
                message.push_str(&format!(" (near '{}')", preview.trim()));
            }
            FileOutcome::Failed(message)
        }
    }
}
