//! Integration tests for partial-failure tolerance: one bad file must
//! never abort the rest of the run

#[cfg(test)]
mod partial_failure_tests {
    use jsonseek::parser::directory::find_search_files;
    use jsonseek::parser::filter::normalize_extensions;
    use jsonseek::{aggregate, search_document, FileOutcome, JsonSource, KeySet, SearchOptions};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_corrupt_file_between_valid_files() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.json"), r#"{"name": "x"}"#).unwrap();
        fs::write(tmp.path().join("b.json"), "{\"name\": ").unwrap();
        fs::write(tmp.path().join("c.json"), r#"{"name": "y"}"#).unwrap();

        let keys = KeySet::from_terms(["name"], false);
        let options = SearchOptions::default();
        let exts = normalize_extensions("json");

        let files = find_search_files(tmp.path(), &exts, true).unwrap();
        assert_eq!(files.len(), 3);

        let per_file: Vec<_> = files
            .into_iter()
            .map(|path| {
                let outcome = match JsonSource::File(path.clone()).parse() {
                    Ok(doc) => FileOutcome::Searched(search_document(&doc, &keys, &options)),
                    Err(e) => FileOutcome::Failed(e.to_string()),
                };
                (path.display().to_string(), outcome)
            })
            .collect();

        let report = aggregate(per_file, &keys, &options, &tmp.path().display().to_string());

        assert_eq!(report.files.len(), 3);

        let a = &report.files[0];
        assert!(a.file.ends_with("a.json"));
        assert_eq!(a.pointers_for("name").unwrap(), ["/name"]);

        let b = &report.files[1];
        assert!(b.file.ends_with("b.json"));
        assert!(b.error.is_some());
        assert!(b.matches.is_empty());

        let c = &report.files[2];
        assert!(c.file.ends_with("c.json"));
        assert_eq!(c.pointers_for("name").unwrap(), ["/name"]);

        // The key was found in A and C, so it is not missing
        assert!(report.missing_keys.is_empty());
    }

    #[test]
    fn test_all_files_failing_yields_all_keys_missing() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.json"), "not json at all").unwrap();
        fs::write(tmp.path().join("b.json"), "[1, 2,").unwrap();

        let keys = KeySet::from_terms(["name"], false);
        let options = SearchOptions::default();
        let exts = normalize_extensions("json");

        let per_file: Vec<_> = find_search_files(tmp.path(), &exts, true)
            .unwrap()
            .into_iter()
            .map(|path| {
                let outcome = match JsonSource::File(path.clone()).parse() {
                    Ok(doc) => FileOutcome::Searched(search_document(&doc, &keys, &options)),
                    Err(e) => FileOutcome::Failed(e.to_string()),
                };
                (path.display().to_string(), outcome)
            })
            .collect();

        let report = aggregate(per_file, &keys, &options, "root");

        assert_eq!(report.files.len(), 2);
        assert!(report.files.iter().all(|f| f.error.is_some()));
        assert_eq!(report.missing_keys, vec!["name"]);
    }
}
