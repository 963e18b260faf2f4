//! Row organization: group cells by parent, order by position.

use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::document::Document;
use crate::node::NodeId;

/// Cells sharing one parent, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub parent: NodeId,
    pub cells: Vec<NodeId>,
}

impl Row {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Rows top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Width of the widest row.
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group `cells` into rows by immediate parent.
///
/// Each row is sorted by ascending `x`; rows are sorted by ascending `y` of
/// their first cell. Both sorts are stable, so ties keep discovery order.
/// Cells without a parent are dropped.
pub fn organize_rows(doc: &Document, cells: &[NodeId]) -> Table {
    let mut index: HashMap<NodeId, usize> = HashMap::new();
    let mut rows: Vec<Row> = Vec::new();

    for &cell in cells {
        let Some(parent) = doc.node(cell).parent() else {
            tracing::debug!(%cell, "dropping cell without parent");
            continue;
        };
        let slot = *index.entry(parent).or_insert_with(|| {
            rows.push(Row { parent, cells: Vec::new() });
            rows.len() - 1
        });
        rows[slot].cells.push(cell);
    }

    for row in &mut rows {
        row.cells.sort_by_key(|&c| OrderedFloat(doc.node(c).x));
    }
    rows.sort_by_key(|row| OrderedFloat(row.cells.first().map_or(0.0, |&c| doc.node(c).y)));

    tracing::debug!(rows = rows.len(), "organized rows");
    Table { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::NodeSpec;
    use crate::select::{collect_cells, DEFAULT_CELL_NAME};

    fn cell(id: &str, x: f64, y: f64) -> NodeSpec {
        NodeSpec::instance("Cell").with_id(id).at(x, y)
    }

    fn keys(doc: &Document, row: &Row) -> Vec<String> {
        row.cells
            .iter()
            .map(|&c| doc.node(c).key.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn sorts_cells_and_rows_by_position() {
        // Rows declared bottom-first, cells declared right-to-left.
        let doc = Document::from_specs(
            vec![NodeSpec::frame("Table")
                .with_id("t")
                .child(
                    NodeSpec::frame("Row 2")
                        .child(cell("b2", 120.0, 40.0))
                        .child(cell("a2", 0.0, 40.0)),
                )
                .child(
                    NodeSpec::frame("Row 1")
                        .child(cell("b1", 120.0, 0.0))
                        .child(cell("a1", 0.0, 0.0)),
                )],
            None,
        )
        .unwrap();

        let cells = collect_cells(&doc, doc.roots(), DEFAULT_CELL_NAME);
        let table = organize_rows(&doc, &cells);

        assert_eq!(table.row_count(), 2);
        assert_eq!(keys(&doc, &table.rows[0]), vec!["a1", "b1"]);
        assert_eq!(keys(&doc, &table.rows[1]), vec!["a2", "b2"]);
        assert_eq!(table.cell_count(), 4);
        assert_eq!(table.max_columns(), 2);
    }

    #[test]
    fn parentless_cells_are_dropped() {
        let doc = Document::from_specs(vec![cell("lonely", 0.0, 0.0)], None).unwrap();
        let cells = collect_cells(&doc, doc.roots(), DEFAULT_CELL_NAME);
        assert_eq!(cells.len(), 1);
        assert!(organize_rows(&doc, &cells).is_empty());
    }

    #[test]
    fn equal_y_keeps_discovery_order() {
        let doc = Document::from_specs(
            vec![
                NodeSpec::frame("R1").child(cell("first", 0.0, 10.0)),
                NodeSpec::frame("R2").child(cell("second", 0.0, 10.0)),
            ],
            None,
        )
        .unwrap();
        let cells = collect_cells(&doc, doc.roots(), DEFAULT_CELL_NAME);
        let table = organize_rows(&doc, &cells);
        assert_eq!(keys(&doc, &table.rows[0]), vec!["first"]);
        assert_eq!(keys(&doc, &table.rows[1]), vec!["second"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let doc = Document::new();
        let table = organize_rows(&doc, &[]);
        assert_eq!(table, Table::default());
        assert_eq!(table.max_columns(), 0);
    }
}
