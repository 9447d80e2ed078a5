//! jsonseek — recursive key/value search for JSON documents
//!
//! A Rust CLI tool and library for searching JSON files for user-supplied
//! terms, matching object keys and/or scalar values, and reporting the JSON
//! pointer path of every match.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod error;
pub mod parser;
pub mod report;
pub mod search;

// Re-export commonly used types
pub use error::{ParseError, SearchError, SearchErrorKind, SearchResult};
pub use parser::JsonSource;
pub use report::{render, OutputFormat};
pub use search::{
    aggregate, search_document, FileOutcome, KeySet, MatchMap, MatchMode, RunReport,
    SearchOptions,
};

/// Search a parsed JSON document with default options (both keys and
/// values, case-insensitive)
pub fn search_json<I, S>(document: &serde_json::Value, terms: I) -> MatchMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    search_json_with_options(document, terms, &SearchOptions::default())
}

/// Search a parsed JSON document with custom options
pub fn search_json_with_options<I, S>(
    document: &serde_json::Value,
    terms: I,
    options: &SearchOptions,
) -> MatchMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let keys = KeySet::from_terms(terms, options.case_sensitive);
    search_document(document, &keys, options)
}
