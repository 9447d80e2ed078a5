//! Integration tests for searching a document piped on standard input

#[cfg(test)]
mod stdin_tests {
    use serde_json::json;
    use std::io::Write;
    use std::process::{Command, Stdio};

    fn run_with_stdin(args: &[&str], input: &str) -> (String, String, bool) {
        let mut cmd = Command::new("cargo");
        cmd.args(["run", "--bin", "jsonseek", "--"])
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("failed to spawn jsonseek");
        child
            .stdin
            .take()
            .expect("stdin not captured")
            .write_all(input.as_bytes())
            .expect("failed to write stdin");

        let output = child
            .wait_with_output()
            .expect("failed to wait for jsonseek");
        (
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.success(),
        )
    }

    #[test]
    fn test_stdin_machine_output_uses_stdin_file_id() {
        let (stdout, _stderr, success) = run_with_stdin(
            &["--stdin", "--keys", "name,address", "--output", "json"],
            r#"{"user": {"name": "Alice"}}"#,
        );

        assert!(success);
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["searched_root"], "<stdin>");
        assert_eq!(value["results"]["<stdin>"]["name"], json!(["/user/name"]));
        assert_eq!(value["missing_keys"], json!(["address"]));
    }

    #[test]
    fn test_stdin_pretty_output() {
        let (stdout, _stderr, success) = run_with_stdin(
            &["--stdin", "--keys", "name"],
            r#"{"user": {"name": "Alice"}}"#,
        );

        assert!(success);
        assert!(stdout.contains("Searched: <stdin>"));
        assert!(stdout.contains("File: <stdin>"));
        assert!(stdout.contains("name ✓ (1 match)"));
        assert!(stdout.contains("- /user/name"));
    }

    #[test]
    fn test_stdin_invalid_json_is_a_per_file_error() {
        let (stdout, _stderr, success) = run_with_stdin(
            &["--stdin", "--keys", "name", "--output", "json"],
            "{\"name\": ",
        );

        // A bad document is an error marker, not a run failure
        assert!(success);
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert!(value["errors"]["<stdin>"]
            .as_str()
            .unwrap()
            .contains("Invalid JSON"));
        assert_eq!(value["missing_keys"], json!(["name"]));
    }
}
