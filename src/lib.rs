//! domdiff: Deterministic HTML Document Comparison
//!
//! Converts HTML documents into normalized trees, fingerprints them with a
//! Merkle-style BLAKE3 digest, and reports path-annotated structural and
//! textual differences between two versions of a page.

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod report;
pub mod tree;

pub use diff::{compare_trees, Difference};
pub use error::{DomDiffError, TreeError};
pub use report::{compare_documents, compare_files, ComparisonReport};
pub use tree::{compute_node_hash, parse_html_to_tree, Node};
