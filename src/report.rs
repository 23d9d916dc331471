//! Comparison report
//!
//! Builds, hashes and diffs two documents and assembles the combined report
//! that is written out as JSON.

use crate::config::DomDiffConfig;
use crate::diff::{compare_trees, DiffSummary, Difference, NodePath};
use crate::error::DomDiffError;
use crate::tree::{BuilderConfig, Node, TreeBuilder};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Settings the comparison itself depends on
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub builder: BuilderConfig,
    pub root_label: Option<String>,
}

impl CompareOptions {
    pub fn from_config(config: &DomDiffConfig) -> Self {
        Self {
            builder: config.tree.clone(),
            root_label: Some(config.diff.root_label.clone()),
        }
    }

    fn root_path(&self) -> NodePath {
        match &self.root_label {
            Some(label) => NodePath::root(label.clone()),
            None => NodePath::default(),
        }
    }
}

/// Both trees, their digests and the ordered difference records
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub tree1: Node,
    pub tree2: Node,
    pub hash1: String,
    pub hash2: String,
    pub comparison: Vec<Difference>,
}

impl ComparisonReport {
    /// Whether both documents normalize to the same tree.
    pub fn is_identical(&self) -> bool {
        self.comparison.is_empty()
    }

    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_differences(&self.comparison)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, DomDiffError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the report as JSON to `path`.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path, pretty: bool) -> Result<(), DomDiffError> {
        let json = self.to_json(pretty)?;
        std::fs::write(path, json).map_err(|e| DomDiffError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(records = self.comparison.len(), "Report written");
        Ok(())
    }
}

/// Compare two already built trees.
pub fn compare_nodes(tree1: Node, tree2: Node, options: &CompareOptions) -> ComparisonReport {
    let hash1 = tree1.compute_hash();
    let hash2 = tree2.compute_hash();
    debug!(hash1 = %hash1, hash2 = %hash2, "Computed tree digests");

    let comparison = compare_trees(Some(&tree1), Some(&tree2), &options.root_path());

    ComparisonReport {
        tree1,
        tree2,
        hash1,
        hash2,
        comparison,
    }
}

/// Parse and compare two HTML documents held in memory.
#[instrument(skip_all, fields(first_bytes = first.len(), second_bytes = second.len()))]
pub fn compare_documents(
    first: &str,
    second: &str,
    options: &CompareOptions,
) -> Result<ComparisonReport, DomDiffError> {
    let start = Instant::now();
    let builder = TreeBuilder::with_config(options.builder.clone());
    let tree1 = builder.build_from_str(first)?;
    let tree2 = builder.build_from_str(second)?;

    let report = compare_nodes(tree1, tree2, options);
    info!(
        differences = report.comparison.len(),
        identical = report.is_identical(),
        duration_ms = start.elapsed().as_millis(),
        "Comparison completed"
    );
    Ok(report)
}

/// Read and compare two HTML files.
#[instrument(skip(options), fields(first = %first.display(), second = %second.display()))]
pub fn compare_files(
    first: &Path,
    second: &Path,
    options: &CompareOptions,
) -> Result<ComparisonReport, DomDiffError> {
    let first_html = std::fs::read_to_string(first).map_err(|e| DomDiffError::io(first, e))?;
    let second_html = std::fs::read_to_string(second).map_err(|e| DomDiffError::io(second, e))?;
    compare_documents(&first_html, &second_html, options)
}
