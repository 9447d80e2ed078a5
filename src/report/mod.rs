//! Report rendering
//!
//! Turns a `RunReport` into either a human-readable listing or a
//! machine-readable JSON object. Both renderers only read the report; all
//! match semantics live in the search module.

use console::style;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::search::RunReport;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Render the report in the selected format
pub fn render(report: &RunReport, format: OutputFormat, use_color: bool) -> String {
    match format {
        OutputFormat::Pretty => render_pretty(report, use_color),
        OutputFormat::Json => render_machine(report),
    }
}

/// Human-readable rendering: per file, per key, a checkmark/count line with
/// an indented pointer list, or a dash marker when the key had no matches
/// in that file. Missing keys are implied by the dash markers.
pub fn render_pretty(report: &RunReport, use_color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("Searched: {}\n", report.searched_root));
    out.push_str(&format!(
        "Keys ({}): {}\n",
        if report.case_sensitive {
            "case-sensitive"
        } else {
            "case-insensitive"
        },
        report.keys.join(", ")
    ));
    out.push_str(&format!("Mode: {}\n\n", mode_label(report.mode)));

    if report.files.is_empty() {
        out.push_str("No files searched.\n");
        return out;
    }

    for file in &report.files {
        out.push_str(&format!("File: {}\n", file.file));

        if let Some(error) = &file.error {
            let marker = paint("✗", use_color, MarkerColor::Red);
            out.push_str(&format!("  {} {}\n", marker, error));
            out.push('\n');
            continue;
        }

        for key in &report.keys {
            match file.pointers_for(key) {
                Some(pointers) => {
                    let marker = paint("✓", use_color, MarkerColor::Green);
                    let noun = if pointers.len() == 1 { "match" } else { "matches" };
                    out.push_str(&format!(
                        "  {} {} ({} {})\n",
                        key,
                        marker,
                        pointers.len(),
                        noun
                    ));
                    for pointer in pointers {
                        out.push_str(&format!("    - {}\n", pointer));
                    }
                }
                None => {
                    out.push_str(&format!("  {} —\n", key));
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Serialized shape of the machine-readable report. `results` and `errors`
/// are insertion-ordered maps; the `errors` field is omitted when no file
/// failed.
#[derive(Serialize)]
struct MachineReport<'a> {
    searched_root: &'a str,
    keys: &'a [String],
    case_sensitive: bool,
    mode: &'a str,
    results: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    errors: Map<String, Value>,
    missing_keys: &'a [String],
}

impl<'a> MachineReport<'a> {
    fn from_report(report: &'a RunReport) -> Self {
        let mut results = Map::new();
        let mut errors = Map::new();

        for file in &report.files {
            if let Some(error) = &file.error {
                errors.insert(file.file.clone(), Value::String(error.clone()));
                continue;
            }

            let mut per_key = Map::new();
            for (key, pointers) in &file.matches {
                per_key.insert(
                    key.clone(),
                    Value::Array(pointers.iter().cloned().map(Value::String).collect()),
                );
            }
            results.insert(file.file.clone(), Value::Object(per_key));
        }

        Self {
            searched_root: &report.searched_root,
            keys: &report.keys,
            case_sensitive: report.case_sensitive,
            mode: report.mode,
            results,
            errors,
            missing_keys: &report.missing_keys,
        }
    }
}

/// Machine-readable rendering. File order and key order match the report;
/// zero-match keys are omitted per file.
pub fn render_machine(report: &RunReport) -> String {
    // Serializing a struct of strings and maps cannot fail
    serde_json::to_string_pretty(&MachineReport::from_report(report))
        .unwrap_or_else(|_| "{}".to_string())
}

/// Build the machine-readable object for a report
pub fn to_machine_value(report: &RunReport) -> Value {
    serde_json::to_value(MachineReport::from_report(report)).unwrap_or(Value::Null)
}

fn mode_label(mode: &str) -> &'static str {
    match mode {
        "keys" => "keys-only",
        "values" => "values-only",
        _ => "keys + values",
    }
}

enum MarkerColor {
    Green,
    Red,
}

fn paint(marker: &str, use_color: bool, color: MarkerColor) -> String {
    if !use_color {
        return marker.to_string();
    }
    match color {
        MarkerColor::Green => style(marker).green().to_string(),
        MarkerColor::Red => style(marker).red().to_string(),
    }
}
