//! Normalized Document Tree
//!
//! Represents an HTML document as a tree of element and text nodes, where each
//! node has a deterministic hash based on its content and the hashes of its
//! children.

pub mod attributes;
pub mod builder;
pub mod hasher;
pub mod node;
pub mod source;

pub use attributes::{AttrValue, Attributes};
pub use builder::{parse_html_to_tree, BuilderConfig, TreeBuilder};
pub use hasher::compute_node_hash;
pub use node::{Node, TEXT_TAG};
pub use source::SourceDocument;
