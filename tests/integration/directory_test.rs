//! Integration tests for directory scanning and per-file aggregation

#[cfg(test)]
mod directory_tests {
    use jsonseek::parser::directory::find_search_files;
    use jsonseek::parser::filter::normalize_extensions;
    use jsonseek::{aggregate, search_document, FileOutcome, JsonSource, KeySet, SearchOptions};
    use std::fs;
    use tempfile::tempdir;

    fn search_tree(
        root: &std::path::Path,
        terms: &[&str],
        extensions: &str,
        recursive: bool,
    ) -> jsonseek::RunReport {
        let keys = KeySet::from_terms(terms.iter().copied(), false);
        let options = SearchOptions::default();
        let exts = normalize_extensions(extensions);

        let files = find_search_files(root, &exts, recursive).unwrap();
        let per_file = files
            .into_iter()
            .map(|path| {
                let outcome = match JsonSource::File(path.clone()).parse() {
                    Ok(doc) => FileOutcome::Searched(search_document(&doc, &keys, &options)),
                    Err(e) => FileOutcome::Failed(e.to_string()),
                };
                (path.display().to_string(), outcome)
            })
            .collect();

        aggregate(per_file, &keys, &options, &root.display().to_string())
    }

    #[test]
    fn test_recursive_tree_search() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("sub");
        fs::create_dir_all(&nested).unwrap();

        fs::write(tmp.path().join("a.json"), r#"{"name": "Alice"}"#).unwrap();
        fs::write(nested.join("b.json"), r#"{"user": {"name": "Bob"}}"#).unwrap();
        fs::write(nested.join("ignored.txt"), r#"{"name": "nope"}"#).unwrap();

        let report = search_tree(tmp.path(), &["name"], "json", true);

        assert_eq!(report.files.len(), 2);
        assert!(report.missing_keys.is_empty());
        assert_eq!(report.total_matches(), 2);
        assert!(report
            .files
            .iter()
            .any(|f| f.pointers_for("name") == Some(&["/user/name".to_string()][..])));
    }

    #[test]
    fn test_flat_scan_skips_subdirectories() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("sub");
        fs::create_dir_all(&nested).unwrap();

        fs::write(tmp.path().join("a.json"), r#"{"name": "x"}"#).unwrap();
        fs::write(nested.join("b.json"), r#"{"name": "y"}"#).unwrap();

        let report = search_tree(tmp.path(), &["name"], "json", false);
        assert_eq!(report.files.len(), 1);
    }

    #[test]
    fn test_custom_extensions() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.geojson"), r#"{"type": "Point"}"#).unwrap();
        fs::write(tmp.path().join("b.json"), r#"{"type": "other"}"#).unwrap();

        let report = search_tree(tmp.path(), &["type"], "geojson", true);
        assert_eq!(report.files.len(), 1);
        assert!(report.files[0].file.ends_with("a.geojson"));
    }

    #[test]
    fn test_empty_directory_reports_all_keys_missing() {
        let tmp = tempdir().unwrap();

        let report = search_tree(tmp.path(), &["name", "email"], "json", true);
        assert!(report.files.is_empty());
        assert_eq!(report.missing_keys, vec!["name", "email"]);
    }

    #[test]
    fn test_file_order_matches_scan_order() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("b.json"), "{}").unwrap();
        fs::write(tmp.path().join("a.json"), "{}").unwrap();
        fs::write(tmp.path().join("c.json"), "{}").unwrap();

        let report = search_tree(tmp.path(), &["k"], "json", true);
        let names: Vec<_> = report
            .files
            .iter()
            .map(|f| {
                std::path::Path::new(&f.file)
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
    }
}
