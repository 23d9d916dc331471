//! Difference records

use crate::diff::path::NodePath;
use crate::tree::attributes::{render_attributes, Attributes};
use serde::{Serialize, Serializer};
use std::fmt;

/// Which of the two compared trees a record refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// What differs at a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifferenceKind {
    /// The node exists only in the other tree
    Missing { side: Side },
    TagMismatch { first: String, second: String },
    AttributeMismatch { first: Attributes, second: Attributes },
    ContentMismatch {
        first: Option<String>,
        second: Option<String>,
    },
    ChildCountMismatch { first: usize, second: usize },
    /// Surplus child present only in `side`
    ExtraNode { side: Side },
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifferenceKind::Missing { side } => write!(f, "Node missing in {} tree", side),
            DifferenceKind::TagMismatch { first, second } => {
                write!(f, "Tag mismatch ({} != {})", first, second)
            }
            DifferenceKind::AttributeMismatch { first, second } => write!(
                f,
                "Attribute mismatch ({} != {})",
                render_attributes(first),
                render_attributes(second)
            ),
            DifferenceKind::ContentMismatch { first, second } => write!(
                f,
                "Text content mismatch ({} != {})",
                render_content(first),
                render_content(second)
            ),
            DifferenceKind::ChildCountMismatch { first, second } => {
                write!(f, "Number of children differ ({} != {})", first, second)
            }
            DifferenceKind::ExtraNode { side } => write!(f, "Extra node in {} tree", side),
        }
    }
}

fn render_content(content: &Option<String>) -> &str {
    content.as_deref().unwrap_or("None")
}

/// A single discrepancy between two trees, tagged with its path
///
/// Renders as `{path}: {description}` and serializes as that string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    pub path: NodePath,
    pub kind: DifferenceKind,
}

impl Difference {
    pub fn new(path: NodePath, kind: DifferenceKind) -> Self {
        Self { path, kind }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

impl Serialize for Difference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Record counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub total: usize,
    pub missing: usize,
    pub tag: usize,
    pub attribute: usize,
    pub content: usize,
    pub child_count: usize,
    pub extra: usize,
}

impl DiffSummary {
    pub fn from_differences(differences: &[Difference]) -> Self {
        let mut summary = DiffSummary {
            total: differences.len(),
            ..DiffSummary::default()
        };
        for difference in differences {
            match difference.kind {
                DifferenceKind::Missing { .. } => summary.missing += 1,
                DifferenceKind::TagMismatch { .. } => summary.tag += 1,
                DifferenceKind::AttributeMismatch { .. } => summary.attribute += 1,
                DifferenceKind::ContentMismatch { .. } => summary.content += 1,
                DifferenceKind::ChildCountMismatch { .. } => summary.child_count += 1,
                DifferenceKind::ExtraNode { .. } => summary.extra += 1,
            }
        }
        summary
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
