//! Structural Tree Diff
//!
//! Compares two normalized trees position by position and produces an ordered
//! list of path-annotated difference records.

pub mod compare;
pub mod path;
pub mod record;

pub use compare::{compare_trees, diff, diff_strings};
pub use path::{NodePath, DEFAULT_ROOT_LABEL};
pub use record::{DiffSummary, Difference, DifferenceKind, Side};
