//! Integration tests for the comparison report

use super::test_utils::{page, write_doc};
use domdiff::report::{compare_documents, compare_files, CompareOptions};
use domdiff::DomDiffError;
use tempfile::TempDir;

#[test]
fn test_report_written_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_doc(temp_dir.path(), "dom1.html", &page("<p id=\"1\">Hi</p>"));
    let second = write_doc(temp_dir.path(), "dom2.html", &page("<p id=\"2\">Hi</p>"));
    let output = temp_dir.path().join("output.json");

    let report = compare_files(&first, &second, &CompareOptions::default()).unwrap();
    report.write_to(&output, true).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\n  \"tree1\": {"));

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["tree1"]["tag"], "html");
    assert_eq!(value["tree1"]["content"], serde_json::Value::Null);
    assert_eq!(
        value["tree1"]["children"][0]["children"][0]["attributes"],
        serde_json::json!({"id": "1"})
    );
    assert_eq!(
        value["tree2"]["children"][0]["children"][0]["children"][0],
        serde_json::json!({"tag": "text", "attributes": {}, "content": "Hi", "children": []})
    );
    assert_eq!(
        value["comparison"],
        serde_json::json!([
            "root > html[0] > body[0]: Attribute mismatch ({'id': '1'} != {'id': '2'})"
        ])
    );
    assert_ne!(value["hash1"], value["hash2"]);
}

#[test]
fn test_compact_json() {
    let html = page("<p>x</p>");
    let report = compare_documents(&html, &html, &CompareOptions::default()).unwrap();
    let json = report.to_json(false).unwrap();
    assert!(!json.contains('\n'));
}

#[test]
fn test_unreadable_input_names_file() {
    let temp_dir = TempDir::new().unwrap();
    let present = write_doc(temp_dir.path(), "dom1.html", &page(""));
    let missing = temp_dir.path().join("dom2.html");

    let err = compare_files(&present, &missing, &CompareOptions::default()).unwrap_err();
    match &err {
        DomDiffError::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("dom2.html"));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let html = page("");
    let report = compare_documents(&html, &html, &CompareOptions::default()).unwrap();
    let err = report
        .write_to(&temp_dir.path().join("no/such/dir/out.json"), true)
        .unwrap_err();
    assert!(matches!(err, DomDiffError::Write { .. }));
}
