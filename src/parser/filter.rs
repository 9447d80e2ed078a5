use std::path::Path;

/// Normalize a user-supplied extension list: trim, strip leading dots,
/// lowercase, drop empties. `"json, JSONL"` becomes `["json", "jsonl"]`.
pub fn normalize_extensions(list: &str) -> Vec<String> {
    list.split(',')
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Return true if the file exists and its extension is in the allowed set
/// (compared case-insensitively)
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                extensions.iter().any(|allowed| *allowed == ext)
            })
}
