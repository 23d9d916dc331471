//! Hash computation for document nodes using BLAKE3

use crate::tree::node::Node;
use blake3::Hasher;

/// Compute the digest of a node's subtree
///
/// digest = hash(tag || sorted (name || value)* || content || child_digest*)
///
/// Attributes are fed in ascending name order so that attribute order in the
/// source never changes the digest. Each child contributes its own hex digest,
/// making this a Merkle composition over the tree.
pub fn compute_node_hash(node: &Node) -> String {
    // Post-order walk: a node is hashed once all of its children have pushed
    // their digests, which then sit at the top of `digests` in child order.
    let mut pending = vec![(node, false)];
    let mut digests: Vec<String> = Vec::new();

    while let Some((current, children_done)) = pending.pop() {
        if children_done {
            let first_child = digests.len() - current.children.len();
            let digest = hash_node_fields(current, &digests[first_child..]);
            digests.truncate(first_child);
            digests.push(digest);
        } else {
            pending.push((current, true));
            pending.extend(current.children.iter().rev().map(|child| (child, false)));
        }
    }

    digests.pop().unwrap_or_default()
}

fn hash_node_fields(node: &Node, child_digests: &[String]) -> String {
    let mut hasher = Hasher::new();

    hasher.update(node.tag.as_bytes());

    let mut attributes: Vec<_> = node.attributes.iter().collect();
    attributes.sort_by(|a, b| a.0.cmp(b.0));
    for (name, value) in attributes {
        hasher.update(name.as_bytes());
        hasher.update(value.render_plain().as_bytes());
    }

    if let Some(content) = node.content.as_deref().filter(|c| !c.is_empty()) {
        hasher.update(content.as_bytes());
    }

    for digest in child_digests {
        hasher.update(digest.as_bytes());
    }

    hex::encode(hasher.finalize().as_bytes())
}
