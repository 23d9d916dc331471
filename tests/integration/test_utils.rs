//! Shared test utilities for integration tests

use domdiff::tree::{parse_html_to_tree, Node};
use std::path::{Path, PathBuf};

/// Build a tree, panicking on documents without a root element.
pub fn tree(html: &str) -> Node {
    parse_html_to_tree(html).expect("document should have an <html> element")
}

/// Render differences between two documents as strings.
pub fn diff_docs(first: &str, second: &str) -> Vec<String> {
    domdiff::diff::diff_strings(&tree(first), &tree(second), "root")
}

/// Wrap body markup in a complete document.
pub fn page(body: &str) -> String {
    format!("<html><body>{}</body></html>", body)
}

/// Write a document into `dir` and return its path.
pub fn write_doc(dir: &Path, name: &str, html: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, html).unwrap();
    path
}
