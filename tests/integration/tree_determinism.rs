//! Integration tests for tree building and hashing determinism

use super::test_utils::{page, tree};
use domdiff::tree::TreeBuilder;

/// Building the same document twice yields equal digests
#[test]
fn test_same_document_same_hash() {
    let html = page("<div id=\"main\"><p>one</p><p>two</p></div>");
    assert_eq!(tree(&html).compute_hash(), tree(&html).compute_hash());
}

/// Independent builders agree on byte-identical documents
#[test]
fn test_independent_builders_agree() {
    let html = page("<ul><li>a</li><li>b</li></ul>");
    let first = TreeBuilder::new().build_from_str(&html).unwrap();
    let second = TreeBuilder::new().build_from_str(&html.clone()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.compute_hash(), second.compute_hash());
}

/// Attribute order in the source does not change the digest
#[test]
fn test_attribute_order_irrelevant() {
    let first = tree(&page("<a href=\"/x\" id=\"l\">x</a>"));
    let second = tree(&page("<a id=\"l\" href=\"/x\">x</a>"));
    assert_eq!(first.compute_hash(), second.compute_hash());
}

/// Scripts, styles and incidental whitespace do not change the digest
#[test]
fn test_pruned_content_irrelevant() {
    let first = tree(&page("<p>text</p>"));
    let second = tree(&page(
        "\n  <script>var x = 1;</script>\n  <p>  text  </p>\n  <style>p { color: red }</style>\n",
    ));
    assert_eq!(first.compute_hash(), second.compute_hash());
}

/// Text changes produce different digests
#[test]
fn test_text_change_changes_hash() {
    let first = tree(&page("<p>text</p>"));
    let second = tree(&page("<p>text!</p>"));
    assert_ne!(first.compute_hash(), second.compute_hash());
}

/// Structural changes produce different digests
#[test]
fn test_structure_change_changes_hash() {
    let first = tree(&page("<p>a</p>"));
    let second = tree(&page("<p>a</p><p>a</p>"));
    assert_ne!(first.compute_hash(), second.compute_hash());
}
