//! Search key normalization and key set handling

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{SearchError, SearchErrorKind, SearchResult};

/// A single search term, carrying both the spelling the user supplied
/// (for display) and the normalized form used for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKey {
    display: String,
    normalized: String,
}

impl SearchKey {
    /// The first-seen user spelling, used in reports
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The matching form: trimmed, lowercased in case-insensitive mode
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// An order-preserving set of search keys, deduplicated by normalized form.
///
/// Normalization is applied once here so the traversal engine never
/// re-folds a key during comparison. Empty and whitespace-only terms are
/// dropped before they reach the engine.
#[derive(Debug, Clone)]
pub struct KeySet {
    keys: Vec<SearchKey>,
    by_normalized: HashMap<String, usize>,
    case_sensitive: bool,
}

impl KeySet {
    /// Build a key set from user-supplied terms, preserving first-seen order
    /// and spelling
    pub fn from_terms<I, S>(terms: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys: Vec<SearchKey> = Vec::new();
        let mut by_normalized: HashMap<String, usize> = HashMap::new();

        for term in terms {
            let display = term.as_ref().trim();
            if display.is_empty() {
                continue;
            }

            let normalized = if case_sensitive {
                display.to_string()
            } else {
                display.to_lowercase()
            };

            if by_normalized.contains_key(&normalized) {
                continue;
            }

            by_normalized.insert(normalized.clone(), keys.len());
            keys.push(SearchKey {
                display: display.to_string(),
                normalized,
            });
        }

        Self {
            keys,
            by_normalized,
            case_sensitive,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Iterate keys in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &SearchKey> {
        self.keys.iter()
    }

    /// Fold candidate text the same way the keys were normalized
    pub fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }

    /// Look up an already-folded candidate; returns the matching key if the
    /// candidate is exactly equal to it
    pub fn lookup(&self, folded: &str) -> Option<&SearchKey> {
        self.by_normalized.get(folded).map(|&i| &self.keys[i])
    }
}

/// Load search terms from a file: either a JSON array of strings, or plain
/// text with one term per line (commas also accepted as separators)
pub fn load_keys_from_file(path: &Path) -> SearchResult<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        SearchError::search(SearchErrorKind::key_file(path.to_path_buf(), e.to_string()))
    })?;

    let text = text.trim();

    // JSON array form, e.g. ["alpha", "beta"]
    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str::<serde_json::Value>(text) {
        if items.iter().all(|v| v.is_string()) {
            return Ok(items
                .into_iter()
                .filter_map(|v| match v {
                    serde_json::Value::String(s) => {
                        let s = s.trim().to_string();
                        (!s.is_empty()).then_some(s)
                    }
                    _ => None,
                })
                .collect());
        }
    }

    // Plain text form: newline- or comma-separated, CR tolerated
    Ok(text
        .replace('\r', "\n")
        .replace(',', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect())
}
