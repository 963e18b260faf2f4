//! Value slots and the fonts they need.

use std::collections::BTreeSet;

use crate::document::Document;
use crate::node::{FontName, NodeId};
use crate::walk::{self, Depth};

/// Default name identifying the text node that receives a cell's value.
pub const DEFAULT_VALUE_NAME: &str = "value";

/// First text node named `value_name` at or below `cell`, in pre-order.
pub fn find_value_slot(doc: &Document, cell: NodeId, value_name: &str) -> Option<NodeId> {
    walk::find_first(doc, cell, Depth::Unbounded, |n| {
        n.is_text_bearing() && n.is_named(value_name)
    })
}

/// Every text node below any of `cells`, at any depth.
pub fn collect_text_nodes(doc: &Document, cells: &[NodeId]) -> Vec<NodeId> {
    cells
        .iter()
        .flat_map(|&cell| walk::collect(doc, cell, Depth::Unbounded, |n| n.is_text_bearing()))
        .collect()
}

/// Distinct fonts used by text nodes below `cells`, sorted.
pub fn collect_fonts(doc: &Document, cells: &[NodeId]) -> Vec<FontName> {
    let fonts: BTreeSet<FontName> = collect_text_nodes(doc, cells)
        .into_iter()
        .filter_map(|id| doc.node(id).text.as_ref().map(|t| t.font.clone()))
        .collect();
    fonts.into_iter().collect()
}
