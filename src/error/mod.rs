//! Error types and handling infrastructure for JSON key/value search

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Core error kinds for a search run
#[derive(Debug, thiserror::Error)]
pub enum SearchErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("No search keys provided")]
    EmptyKeySet,

    #[error("Invalid key file '{path}': {message}")]
    KeyFile { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },
}

impl SearchErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn key_file(path: PathBuf, message: String) -> Self {
        Self::KeyFile { path, message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for search operations
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Search {
        kind: SearchErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl SearchError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn search(kind: SearchErrorKind) -> Self {
        Self::Search { kind, source: None }
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    )
                } else {
                    format!("JSON parse error: {}", err.message)
                }
            }
            Self::Search { kind, .. } => match kind {
                SearchErrorKind::EmptyKeySet => {
                    "No search keys provided. Use --keys, --key, or --keys-file".to_string()
                }
                SearchErrorKind::PathNotFound { path } => {
                    format!("Path not found: {}", path.display())
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
