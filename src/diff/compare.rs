//! Positional tree comparison

use crate::diff::path::NodePath;
use crate::diff::record::{Difference, DifferenceKind, Side};
use crate::tree::node::Node;

/// Compare two (possibly absent) trees starting at `path`.
///
/// Records come out depth-first: a node's own records, then each paired child's
/// records in order, then one record per surplus child. Children are paired by
/// index only, so an inserted or removed child shifts every later comparison.
pub fn compare_trees(first: Option<&Node>, second: Option<&Node>, path: &NodePath) -> Vec<Difference> {
    let mut differences = Vec::new();
    let (first, second) = match (first, second) {
        (Some(first), Some(second)) => (first, second),
        (None, Some(_)) => {
            differences.push(Difference::new(
                path.clone(),
                DifferenceKind::Missing { side: Side::First },
            ));
            return differences;
        }
        (Some(_), None) => {
            differences.push(Difference::new(
                path.clone(),
                DifferenceKind::Missing { side: Side::Second },
            ));
            return differences;
        }
        (None, None) => return differences,
    };

    // Work items are popped in output order: each pair's children are pushed
    // above its surplus records, so they drain first.
    let mut pending = vec![Step::Compare(first, second, path.clone())];
    while let Some(step) = pending.pop() {
        match step {
            Step::Emit(difference) => differences.push(difference),
            Step::Compare(first, second, path) => {
                compare_pair(first, second, &path, &mut differences, &mut pending)
            }
        }
    }
    differences
}

/// Compare two trees from the default `root` path.
pub fn diff(first: &Node, second: &Node) -> Vec<Difference> {
    compare_trees(Some(first), Some(second), &NodePath::default())
}

/// Compare two trees and render each record as a string.
pub fn diff_strings(first: &Node, second: &Node, root_label: &str) -> Vec<String> {
    compare_trees(Some(first), Some(second), &NodePath::root(root_label))
        .iter()
        .map(ToString::to_string)
        .collect()
}

enum Step<'a> {
    Compare(&'a Node, &'a Node, NodePath),
    Emit(Difference),
}

fn compare_pair<'a>(
    first: &'a Node,
    second: &'a Node,
    path: &NodePath,
    out: &mut Vec<Difference>,
    pending: &mut Vec<Step<'a>>,
) {
    if first.tag != second.tag {
        out.push(Difference::new(
            path.clone(),
            DifferenceKind::TagMismatch {
                first: first.tag.clone(),
                second: second.tag.clone(),
            },
        ));
    }

    if first.attributes != second.attributes {
        out.push(Difference::new(
            path.clone(),
            DifferenceKind::AttributeMismatch {
                first: first.attributes.clone(),
                second: second.attributes.clone(),
            },
        ));
    }

    if first.content != second.content {
        out.push(Difference::new(
            path.clone(),
            DifferenceKind::ContentMismatch {
                first: first.content.clone(),
                second: second.content.clone(),
            },
        ));
    }

    let (first_len, second_len) = (first.children.len(), second.children.len());
    if first_len != second_len {
        out.push(Difference::new(
            path.clone(),
            DifferenceKind::ChildCountMismatch {
                first: first_len,
                second: second_len,
            },
        ));
    }

    // Surplus paths use the longer side's own tag
    let surplus: Vec<Difference> = if first_len > second_len {
        (second_len..first_len)
            .map(|index| {
                Difference::new(
                    path.child(&first.tag, index),
                    DifferenceKind::ExtraNode { side: Side::First },
                )
            })
            .collect()
    } else {
        (first_len..second_len)
            .map(|index| {
                Difference::new(
                    path.child(&second.tag, index),
                    DifferenceKind::ExtraNode { side: Side::Second },
                )
            })
            .collect()
    };
    pending.extend(surplus.into_iter().rev().map(Step::Emit));

    let pairs = first.children.iter().zip(second.children.iter()).enumerate();
    for (index, (first_child, second_child)) in pairs.rev() {
        pending.push(Step::Compare(
            first_child,
            second_child,
            path.child(&first.tag, index),
        ));
    }
}
