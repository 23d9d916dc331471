//! Breadcrumb paths locating a node for reporting

use std::fmt;

/// Label of the root breadcrumb unless configured otherwise
pub const DEFAULT_ROOT_LABEL: &str = "root";

/// Breadcrumb path such as `root > html[1] > body[0]`
///
/// Each segment is the parent's tag and the child's index among the parent's
/// normalized children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(String);

impl NodePath {
    /// Start a path at the given root label.
    pub fn root(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Path of the child at `index` under a parent tagged `tag`.
    pub fn child(&self, tag: &str, index: usize) -> Self {
        Self(format!("{} > {}[{}]", self.0, tag, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of segments below the root label.
    pub fn depth(&self) -> usize {
        self.0.matches(" > ").count()
    }
}

impl Default for NodePath {
    fn default() -> Self {
        Self::root(DEFAULT_ROOT_LABEL)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
