//! JSON decoding module
//!
//! Turns raw input (string, file, stdin) into `serde_json::Value` trees for
//! the search engine. Decode failures carry line/column information and a
//! short preview of the offending line.

pub mod directory;
pub mod filter;

use crate::error::{ParseError, ParseResult};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Source of a single JSON document
#[derive(Debug, Clone)]
pub enum JsonSource {
    String(String),
    File(PathBuf),
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        match self {
            JsonSource::String(content) => parse_from_string(content),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin(),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

}

/// Parse JSON from a string
fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("Empty JSON input".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        let location = Some((e.line(), e.column()));
        ParseError::new(format!("Invalid JSON: {}", e), location)
            .with_preview(error_line_preview(trimmed, e.line()))
    })
}

/// Parse JSON from a file
fn parse_from_file(path: &Path) -> ParseResult<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ParseError::new(format!("Failed to read file: {}", e), None))?;

    parse_from_string(&content)
}

/// Parse JSON from standard input
fn parse_from_stdin() -> ParseResult<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("Failed to read stdin: {}", e), None))?;

    parse_from_string(buffer.trim())
}

/// Extract the line the decoder stopped at, truncated for display
fn error_line_preview(content: &str, line: usize) -> String {
    const MAX_PREVIEW: usize = 80;

    match content.lines().nth(line.saturating_sub(1)) {
        Some(text) => {
            if text.len() > MAX_PREVIEW {
                let mut cut = MAX_PREVIEW;
                while !text.is_char_boundary(cut) {
                    cut -= 1;
                }
                format!("{}...", &text[..cut])
            } else {
                text.to_string()
            }
        }
        None => "Context not available".to_string(),
    }
}
