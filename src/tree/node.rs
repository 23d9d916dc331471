//! Normalized document node

use crate::tree::attributes::Attributes;
use crate::tree::hasher;
use serde::{Deserialize, Serialize};

/// Tag used for text leaves
pub const TEXT_TAG: &str = "text";

/// A normalized structural unit of a document: an element or a text leaf.
///
/// Serializes to the dictionary projection `{tag, attributes, content, children}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub tag: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element node with no children.
    pub fn element(tag: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            content: None,
            children: Vec::new(),
        }
    }

    /// Create a text leaf.
    ///
    /// Returns `None` when the trimmed text is empty, so whitespace-only text
    /// never produces a node.
    pub fn text(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            tag: TEXT_TAG.to_string(),
            attributes: Attributes::new(),
            content: Some(trimmed.to_string()),
            children: Vec::new(),
        })
    }

    /// Attach a child at the end of the children list.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Node::add_child`].
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    /// Deterministic digest of this node's subtree.
    pub fn compute_hash(&self) -> String {
        hasher::compute_node_hash(self)
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

impl Drop for Node {
    // Flattens the subtree first so dropping a deep tree does not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}
