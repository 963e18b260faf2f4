//! Depth-bounded pre-order tree walks.
//!
//! Every search over the scene graph goes through these two functions. The
//! root sits at depth 0; only container nodes are descended into, and a node
//! that matches the predicate is never descended into.

use crate::document::Document;
use crate::node::{Node, NodeId};

/// How far below the root a walk may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Visit nodes at most this many levels below the root.
    Limit(usize),
    Unbounded,
}

impl Depth {
    fn allows(self, depth: usize) -> bool {
        match self {
            Self::Limit(max) => depth <= max,
            Self::Unbounded => true,
        }
    }
}

/// Collect every node within `depth` of `root` matching `pred`, in pre-order.
pub fn collect<P>(doc: &Document, root: NodeId, depth: Depth, pred: P) -> Vec<NodeId>
where
    P: Fn(&Node) -> bool,
{
    let mut out = Vec::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((id, level)) = stack.pop() {
        let node = doc.node(id);
        if pred(node) {
            out.push(id);
            continue;
        }
        if node.kind.is_container() && depth.allows(level + 1) {
            // Reverse so the leftmost child is popped first.
            for &child in node.children().iter().rev() {
                stack.push((child, level + 1));
            }
        }
    }

    out
}

/// First node within `depth` of `root` matching `pred`, in pre-order.
pub fn find_first<P>(doc: &Document, root: NodeId, depth: Depth, pred: P) -> Option<NodeId>
where
    P: Fn(&Node) -> bool,
{
    let mut stack = vec![(root, 0usize)];

    while let Some((id, level)) = stack.pop() {
        let node = doc.node(id);
        if pred(node) {
            return Some(id);
        }
        if node.kind.is_container() && depth.allows(level + 1) {
            for &child in node.children().iter().rev() {
                stack.push((child, level + 1));
            }
        }
    }

    None
}
