//! Cell discovery over the current selection.
//!
//! Tables are expected to nest as table > row > cell, so a selected root is
//! searched at most two levels down. A selected component or instance that is
//! not itself a cell is treated as a row: only its direct children are cells.

use std::collections::HashSet;

use crate::document::Document;
use crate::node::NodeId;
use crate::walk::{self, Depth};

/// Default name identifying a cell.
pub const DEFAULT_CELL_NAME: &str = "cell";

/// Search depth below a generic container root (table > row > cell).
pub const CELL_SEARCH_DEPTH: usize = 2;

/// Search depth below a component-like root that is not a cell (row > cell).
pub const COMPONENT_CELL_SEARCH_DEPTH: usize = 1;

/// How far below `root` cells are looked for.
fn search_depth(doc: &Document, root: NodeId, cell_name: &str) -> usize {
    let node = doc.node(root);
    if node.is_named(cell_name) {
        0
    } else if node.kind.is_component_like() {
        COMPONENT_CELL_SEARCH_DEPTH
    } else if node.kind.is_container() {
        CELL_SEARCH_DEPTH
    } else {
        0
    }
}

/// Collect the cells reachable from `selection`, in discovery order.
///
/// A cell reachable from several selected roots is reported once.
pub fn collect_cells(doc: &Document, selection: &[NodeId], cell_name: &str) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut cells = Vec::new();

    for &root in selection {
        let depth = search_depth(doc, root, cell_name);
        let found = walk::collect(doc, root, Depth::Limit(depth), |n| n.is_named(cell_name));
        for id in found {
            if seen.insert(id) {
                cells.push(id);
            }
        }
    }

    tracing::debug!(roots = selection.len(), cells = cells.len(), "collected cells");
    cells
}
