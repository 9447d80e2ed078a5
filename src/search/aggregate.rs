//! Result aggregation
//!
//! Folds per-file match maps into a single `RunReport`: per-file, per-key
//! pointer listings plus the set of keys never found anywhere. A file the
//! collaborating loader could not parse is carried as an error marker and
//! never aborts the rest of the run.

use crate::search::engine::MatchMap;
use crate::search::keys::KeySet;
use crate::search::options::SearchOptions;

/// What happened to one file during the run
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// The file was parsed and searched
    Searched(MatchMap),
    /// The file could not be loaded or parsed
    Failed(String),
}

/// Per-file entry in the report. Keys with zero matches in this file are
/// omitted from `matches`.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub file: String,
    /// (display key, pointers) pairs in key set order
    pub matches: Vec<(String, Vec<String>)>,
    pub error: Option<String>,
}

impl FileReport {
    /// Pointers recorded for a key in this file, looked up by display form
    pub fn pointers_for(&self, display_key: &str) -> Option<&[String]> {
        self.matches
            .iter()
            .find(|(key, _)| key == display_key)
            .map(|(_, pointers)| pointers.as_slice())
    }
}

/// The root aggregate of one invocation. Immutable once built.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub searched_root: String,
    /// Display forms of all requested keys, in input order
    pub keys: Vec<String>,
    pub case_sensitive: bool,
    pub mode: &'static str,
    /// Per-file entries in input order
    pub files: Vec<FileReport>,
    /// Display forms of keys with zero matches across every file
    pub missing_keys: Vec<String>,
}

impl RunReport {
    /// True if no file produced any match
    pub fn is_empty(&self) -> bool {
        self.files.iter().all(|f| f.matches.is_empty())
    }

    /// Total number of recorded pointers across all files
    pub fn total_matches(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| f.matches.iter())
            .map(|(_, pointers)| pointers.len())
            .sum()
    }
}

/// Fold per-file outcomes into a `RunReport`.
///
/// File order is preserved. Within a file, keys appear in key set order and
/// carry their display spelling; zero-match keys are omitted per file but
/// still count toward `missing_keys` when absent everywhere.
pub fn aggregate(
    per_file: Vec<(String, FileOutcome)>,
    keys: &KeySet,
    options: &SearchOptions,
    searched_root: &str,
) -> RunReport {
    let mut found = vec![false; keys.len()];
    let mut files = Vec::with_capacity(per_file.len());

    for (file, outcome) in per_file {
        match outcome {
            FileOutcome::Searched(match_map) => {
                let mut matches = Vec::new();
                for (index, key) in keys.iter().enumerate() {
                    if let Some(pointers) = match_map.get(key.normalized()) {
                        if !pointers.is_empty() {
                            found[index] = true;
                            matches.push((key.display().to_string(), pointers.clone()));
                        }
                    }
                }
                files.push(FileReport {
                    file,
                    matches,
                    error: None,
                });
            }
            FileOutcome::Failed(message) => {
                files.push(FileReport {
                    file,
                    matches: Vec::new(),
                    error: Some(message),
                });
            }
        }
    }

    let missing_keys = keys
        .iter()
        .zip(&found)
        .filter(|(_, found)| !**found)
        .map(|(key, _)| key.display().to_string())
        .collect();

    RunReport {
        searched_root: searched_root.to_string(),
        keys: keys.iter().map(|k| k.display().to_string()).collect(),
        case_sensitive: options.case_sensitive,
        mode: options.mode.as_str(),
        files,
        missing_keys,
    }
}
