//! Tree builder for constructing normalized document trees
//!
//! Tokenizes markup into a [`SourceDocument`], locates the root element and
//! converts the elements below it into [`Node`]s. Scripts, styles and
//! whitespace-only text are pruned while building, so they never exist as nodes.

use crate::error::{DomDiffError, TreeError};
use crate::tree::attributes::{AttrValue, Attributes};
use crate::tree::node::Node;
use crate::tree::source::{NodeId, SourceData, SourceDocument};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Tree builder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Element the tree is rooted at
    #[serde(default = "default_root_tag")]
    pub root_tag: String,

    /// Elements dropped together with their whole subtree
    #[serde(default = "default_pruned_tags")]
    pub pruned_tags: Vec<String>,

    /// Keep comments as text leaves
    #[serde(default = "default_true")]
    pub keep_comments: bool,
}

fn default_root_tag() -> String {
    "html".to_string()
}

fn default_pruned_tags() -> Vec<String> {
    vec!["script".to_string(), "style".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            root_tag: default_root_tag(),
            pruned_tags: default_pruned_tags(),
            keep_comments: default_true(),
        }
    }
}

impl BuilderConfig {
    /// Whether elements named `tag` are pruned (case-insensitive).
    pub fn is_pruned(&self, tag: &str) -> bool {
        self.pruned_tags
            .iter()
            .any(|pruned| pruned.eq_ignore_ascii_case(tag))
    }
}

/// Parse `html` and build its tree with the default configuration.
pub fn parse_html_to_tree(html: &str) -> Result<Node, TreeError> {
    TreeBuilder::new().build_from_str(html)
}

/// Tree builder for converting parsed documents into node trees
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: BuilderConfig,
}

impl TreeBuilder {
    /// Create a tree builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree builder with a custom configuration
    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Parse markup and build the tree rooted at the configured root element.
    #[instrument(skip(self, html), fields(bytes = html.len()))]
    pub fn build_from_str(&self, html: &str) -> Result<Node, TreeError> {
        let start = Instant::now();
        let document = SourceDocument::parse(html);
        debug!(
            source_nodes = document.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Parsed document"
        );

        let tree = self.build_from_document(&document)?;

        info!(
            node_count = tree.subtree_size(),
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );
        Ok(tree)
    }

    /// Read a document from disk and build its tree.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn build_from_file(&self, path: &Path) -> Result<Node, DomDiffError> {
        let html = std::fs::read_to_string(path).map_err(|e| DomDiffError::io(path, e))?;
        Ok(self.build_from_str(&html)?)
    }

    /// Build the tree from the first root element of a parsed document.
    ///
    /// There is no fallback: without the root element the tree does not exist.
    pub fn build_from_document(&self, document: &SourceDocument) -> Result<Node, TreeError> {
        self.build_from(document, SourceDocument::ROOT)
    }

    /// Build the tree from the first root element at or below `start`.
    pub fn build_from(&self, document: &SourceDocument, start: NodeId) -> Result<Node, TreeError> {
        let no_root = || TreeError::NoRootElement {
            tag: self.config.root_tag.clone(),
        };

        let root = document
            .find_element_from(start, &self.config.root_tag)
            .ok_or_else(no_root)?;
        self.build_subtree(document, root).ok_or_else(no_root)
    }

    /// Convert the subtree at `id`, returning `None` when it is pruned.
    ///
    /// Uses an explicit stack of partially built nodes, so nesting depth is
    /// bounded by memory rather than by the call stack.
    pub fn build_subtree(&self, document: &SourceDocument, id: NodeId) -> Option<Node> {
        let root = self.convert(document, id)?;
        let mut stack = vec![(root, document.node(id).children.iter())];

        loop {
            let (_, pending) = stack.last_mut()?;
            match pending.next() {
                Some(&child) => {
                    if let Some(node) = self.convert(document, child) {
                        stack.push((node, document.node(child).children.iter()));
                    }
                }
                None => {
                    let (finished, _) = stack.pop()?;
                    match stack.last_mut() {
                        Some((parent, _)) => parent.add_child(finished),
                        None => return Some(finished),
                    }
                }
            }
        }
    }

    /// Convert one source node without its children.
    fn convert(&self, document: &SourceDocument, id: NodeId) -> Option<Node> {
        match &document.node(id).data {
            SourceData::Text(text) => Node::text(text),
            SourceData::Comment(text) if self.config.keep_comments => Node::text(text),
            SourceData::Element { name, attrs } => {
                if self.config.is_pruned(name) {
                    trace!(tag = %name, "Pruned element");
                    return None;
                }

                let mut attributes = Attributes::new();
                for (key, value) in attrs {
                    attributes
                        .entry(key.clone())
                        .or_insert_with(|| AttrValue::from_source(name, key, value));
                }
                Some(Node::element(name.clone(), attributes))
            }
            SourceData::Comment(_) | SourceData::Document => None,
        }
    }
}
