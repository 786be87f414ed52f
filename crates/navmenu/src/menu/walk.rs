//! Read-only lookups over a resolved menu.
//!
//! Ids are only unique among siblings (`manage` is both a root and a child
//! of that root), so lookups either follow an explicit id path or take the
//! first match in pre-order.

use super::node::MenuNode;

/// Visit every node under `roots` in pre-order with its parent.
pub fn walk<'a, F>(roots: &'a [MenuNode], mut f: F)
where
    F: FnMut(&'a MenuNode, Option<&'a MenuNode>),
{
    for root in roots {
        root.walk_from(None, &mut f);
    }
}

/// Total number of nodes in the menu.
pub fn count(roots: &[MenuNode]) -> usize {
    let mut n = 0;
    walk(roots, |_, _| n += 1);
    n
}

/// Follow `ids` from the roots down, one level per id.
///
/// Returns `None` for an empty path or as soon as a step has no match.
pub fn find_path<'a>(roots: &'a [MenuNode], ids: &[&str]) -> Option<&'a MenuNode> {
    let (first, rest) = ids.split_first()?;
    let mut node = roots.iter().find(|n| n.id == *first)?;
    for id in rest {
        node = node.child(id)?;
    }
    Some(node)
}

/// Chain of nodes from a root down to the first node whose id is `id`.
pub fn trail<'a>(roots: &'a [MenuNode], id: &str) -> Option<Vec<&'a MenuNode>> {
    let mut path = Vec::new();
    trail_in(roots, id, &mut path).then_some(path)
}

fn trail_in<'a>(nodes: &'a [MenuNode], id: &str, path: &mut Vec<&'a MenuNode>) -> bool {
    for node in nodes {
        path.push(node);
        if node.id == id || trail_in(&node.children, id, path) {
            return true;
        }
        path.pop();
    }
    false
}
