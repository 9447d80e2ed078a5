//! Recursive key/value search module
//!
//! This module contains the traversal engine, search key handling,
//! JSON pointer accumulation, and result aggregation.

pub mod aggregate;
pub mod engine;
pub mod keys;
pub mod options;
pub mod pointer;

pub use aggregate::{aggregate, FileOutcome, FileReport, RunReport};
pub use engine::{search_document, MatchMap};
pub use keys::{load_keys_from_file, KeySet, SearchKey};
pub use options::{MatchMode, SearchOptions};
