//! Core traversal engine
//!
//! Recursive descent over a parsed JSON document, testing object keys and
//! scalar values against the key set and recording the JSON pointer of each
//! match. Pure computation: never fails on well-formed input, performs no
//! I/O, and does not mutate the document.

use serde_json::Value;
use std::collections::HashMap;

use crate::search::keys::KeySet;
use crate::search::options::SearchOptions;
use crate::search::pointer::PointerBuf;

/// Matches found within one document: normalized key -> pointers in
/// discovery (pre-order) order. Keys with no matches are absent.
pub type MatchMap = HashMap<String, Vec<String>>;

/// Search a parsed JSON document for every key in the set.
///
/// Matching is exact equality between the normalized key and the candidate
/// text, never substring containment. An empty key set is a no-op.
pub fn search_document(document: &Value, keys: &KeySet, options: &SearchOptions) -> MatchMap {
    let mut traversal = Traversal {
        keys,
        options,
        path: PointerBuf::new(),
        matches: MatchMap::new(),
    };

    if !keys.is_empty() {
        traversal.visit(document);
    }

    traversal.matches
}

struct Traversal<'a> {
    keys: &'a KeySet,
    options: &'a SearchOptions,
    path: PointerBuf,
    matches: MatchMap,
}

impl Traversal<'_> {
    fn visit(&mut self, value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.path.push(key);
                    // A key match points at the value the key maps to
                    if self.options.mode.includes_keys() {
                        self.record_if_match(key);
                    }
                    self.visit(child);
                    self.path.pop();
                }
            }
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.path.push_index(index);
                    self.visit(item);
                    self.path.pop();
                }
            }
            Value::String(s) => {
                if self.options.mode.includes_values() {
                    self.record_if_match(s);
                }
            }
            Value::Number(n) => {
                if self.options.mode.includes_values() {
                    self.record_if_match(&n.to_string());
                }
            }
            Value::Bool(b) => {
                if self.options.mode.includes_values() {
                    self.record_if_match(if *b { "true" } else { "false" });
                }
            }
            Value::Null => {
                if self.options.mode.includes_values() {
                    self.record_if_match("null");
                }
            }
        }
    }

    fn record_if_match(&mut self, candidate: &str) {
        let folded = self.keys.fold(candidate);
        if let Some(key) = self.keys.lookup(folded.as_ref()) {
            self.matches
                .entry(key.normalized().to_string())
                .or_default()
                .push(self.path.render());
        }
    }
}
