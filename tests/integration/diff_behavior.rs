//! Integration tests for positional diff behavior

use super::test_utils::{diff_docs, page, tree};
use domdiff::diff::{compare_trees, diff, NodePath};

/// Byte-identical documents produce no records
#[test]
fn test_reflexive() {
    let html = page("<div><p class=\"a b\">x</p><img src=\"i.png\"></div>");
    assert!(diff_docs(&html, &html).is_empty());

    let root = tree(&html);
    assert!(diff(&root, &root).is_empty());
}

/// A single changed attribute yields exactly one record at that node
#[test]
fn test_single_attribute_sensitivity() {
    let records = diff_docs(
        "<html><body><p id=\"1\">Hi</p></body></html>",
        "<html><body><p id=\"2\">Hi</p></body></html>",
    );
    assert_eq!(
        records,
        vec!["root > html[0] > body[0]: Attribute mismatch ({'id': '1'} != {'id': '2'})"]
    );
}

/// Documents differing only in script content compare equal
#[test]
fn test_script_only_difference_ignored() {
    let records = diff_docs(
        &page("<p>a</p><script>alert(1)</script>"),
        &page("<p>a</p><script>alert(2); more();</script>"),
    );
    assert!(records.is_empty());
}

/// Documents differing only in incidental whitespace compare equal
#[test]
fn test_whitespace_only_difference_ignored() {
    let records = diff_docs(
        "<html><body><ul><li>a</li><li>b</li></ul></body></html>",
        "<html>\n<body>\n  <ul>\n    <li> a </li>\n    <li>b\n</li>\n  </ul>\n</body>\n</html>",
    );
    assert!(records.is_empty());
}

/// An inserted first child shifts every later comparison
#[test]
fn test_positional_shift() {
    let records = diff_docs(
        &page("<p>X</p><p>Y</p>"),
        &page("<p>Z</p><p>X</p><p>Y</p>"),
    );
    assert_eq!(
        records,
        vec![
            "root > html[0]: Number of children differ (2 != 3)",
            "root > html[0] > body[0] > p[0]: Text content mismatch (X != Z)",
            "root > html[0] > body[1] > p[0]: Text content mismatch (Y != X)",
            "root > html[0] > body[2]: Extra node in second tree",
        ]
    );
}

/// Surplus children in the first tree are named with the first tree's tag
#[test]
fn test_extra_nodes_in_first_tree() {
    let records = diff_docs(
        &page("<ul><li>1</li><li>2</li><li>3</li></ul>"),
        &page("<ul><li>1</li></ul>"),
    );
    assert_eq!(
        records,
        vec![
            "root > html[0] > body[0]: Number of children differ (3 != 1)",
            "root > html[0] > body[0] > ul[1]: Extra node in first tree",
            "root > html[0] > body[0] > ul[2]: Extra node in first tree",
        ]
    );
}

/// Records are ordered parent first, then children in order
#[test]
fn test_depth_first_ordering() {
    let records = diff_docs(
        &page("<div title=\"a\"><span>1</span></div><p>x</p>"),
        &page("<section title=\"b\"><span>2</span></section><p>y</p>"),
    );
    assert_eq!(
        records,
        vec![
            "root > html[0] > body[0]: Tag mismatch (div != section)",
            "root > html[0] > body[0]: Attribute mismatch ({'title': 'a'} != {'title': 'b'})",
            "root > html[0] > body[0] > div[0] > span[0]: Text content mismatch (1 != 2)",
            "root > html[0] > body[1] > p[0]: Text content mismatch (x != y)",
        ]
    );
}

/// Text replaced by an element reports every applicable check
#[test]
fn test_text_replaced_by_element() {
    let records = diff_docs(&page("hello"), &page("<b>hello</b>"));
    assert_eq!(
        records,
        vec![
            "root > html[0] > body[0]: Tag mismatch (text != b)",
            "root > html[0] > body[0]: Text content mismatch (hello != None)",
            "root > html[0] > body[0]: Number of children differ (0 != 1)",
            "root > html[0] > body[0] > b[0]: Extra node in second tree",
        ]
    );
}

/// Multi-valued attribute token changes are attribute mismatches
#[test]
fn test_class_token_change() {
    let records = diff_docs(
        &page("<p class=\"a b\">x</p>"),
        &page("<p class=\"b a\">x</p>"),
    );
    assert_eq!(
        records,
        vec!["root > html[0] > body[0]: Attribute mismatch ({'class': ['a', 'b']} != {'class': ['b', 'a']})"]
    );
}

/// Comparing against an absent tree reports a missing node only
#[test]
fn test_missing_tree() {
    let root = tree(&page("<p>x</p>"));
    let records = compare_trees(Some(&root), None, &NodePath::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].to_string(), "root: Node missing in second tree");
}
