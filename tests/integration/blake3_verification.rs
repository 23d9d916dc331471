//! BLAKE3 digest verification
//!
//! Recomputes node digests directly with BLAKE3 to pin down the exact byte
//! sequence the hasher feeds.

use blake3::Hasher as Blake3Hasher;
use domdiff::tree::{compute_node_hash, AttrValue, Attributes, Node};

fn blake3_hex(parts: &[&[u8]]) -> String {
    let mut hasher = Blake3Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize().as_bytes())
}

#[test]
fn test_text_leaf_matches_blake3() {
    let leaf = Node::text("hello").unwrap();
    assert_eq!(compute_node_hash(&leaf), blake3_hex(&[b"text", b"hello"]));
}

#[test]
fn test_attributes_fed_in_sorted_order() {
    let mut attributes = Attributes::new();
    attributes.insert("title".to_string(), AttrValue::from("t"));
    attributes.insert("class".to_string(), AttrValue::from(vec!["a", "b"]));
    let node = Node::element("div", attributes);

    let expected = blake3_hex(&[b"div", b"class", b"['a', 'b']", b"title", b"t"]);
    assert_eq!(compute_node_hash(&node), expected);
}

#[test]
fn test_children_contribute_hex_digests() {
    let first = Node::text("a").unwrap();
    let second = Node::element("br", Attributes::new());
    let parent = Node::element("p", Attributes::new())
        .with_child(first.clone())
        .with_child(second.clone());

    let first_digest = compute_node_hash(&first);
    let second_digest = compute_node_hash(&second);
    let expected = blake3_hex(&[b"p", first_digest.as_bytes(), second_digest.as_bytes()]);
    assert_eq!(compute_node_hash(&parent), expected);
}

#[test]
fn test_empty_content_not_fed() {
    let mut node = Node::element("span", Attributes::new());
    node.content = Some(String::new());
    assert_eq!(compute_node_hash(&node), blake3_hex(&[b"span"]));
}
