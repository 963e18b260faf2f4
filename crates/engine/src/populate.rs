//! Write a 2-D value grid into table cells.

use tablefill_scene::{find_value_slot, HostError, SceneHost, Table};

/// Write `data[i][j]` into the value slot of cell `j` of row `i`.
///
/// Only the overlap of the two shapes is written; surplus rows or columns on
/// either side are ignored. Cells without a value slot are skipped. Returns
/// the number of cells written.
pub fn populate<H>(
    host: &mut H,
    table: &Table,
    data: &[Vec<String>],
    value_name: &str,
) -> Result<usize, HostError>
where
    H: SceneHost + ?Sized,
{
    if table.row_count() != data.len() {
        tracing::debug!(
            table_rows = table.row_count(),
            data_rows = data.len(),
            "row count mismatch; writing overlap only"
        );
    }

    let mut updated = 0;
    for (row, values) in table.rows.iter().zip(data) {
        for (&cell, value) in row.cells.iter().zip(values) {
            let Some(slot) = find_value_slot(host.document(), cell, value_name) else {
                tracing::debug!(%cell, "cell has no value slot");
                continue;
            };
            host.set_text(slot, value)?;
            updated += 1;
        }
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablefill_scene::select::DEFAULT_CELL_NAME;
    use tablefill_scene::slot::DEFAULT_VALUE_NAME;
    use tablefill_scene::{collect_cells, organize_rows, Document, FontName, NodeSpec};

    fn grid(rows: usize, cols: usize) -> Document {
        let mut table = NodeSpec::frame("Table");
        for r in 0..rows {
            let mut row = NodeSpec::frame("Row").at(0.0, r as f64 * 40.0);
            for c in 0..cols {
                row = row.child(
                    NodeSpec::instance("Cell")
                        .at(c as f64 * 120.0, r as f64 * 40.0)
                        .child(NodeSpec::text("value", "").with_id(format!("v{r}{c}"))),
                );
            }
            table = table.child(row);
        }
        let mut doc = Document::from_specs(vec![table], None).unwrap();
        doc.load_fonts(&[FontName::default()]).unwrap();
        doc
    }

    fn table_of(doc: &Document) -> Table {
        let cells = collect_cells(doc, doc.selection(), DEFAULT_CELL_NAME);
        organize_rows(doc, &cells)
    }

    fn text(doc: &Document, key: &str) -> String {
        doc.node(doc.find_by_key(key).unwrap())
            .characters()
            .unwrap_or_default()
            .to_string()
    }

    fn data(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn writes_matching_shape() {
        let mut doc = grid(2, 2);
        let table = table_of(&doc);
        let n = populate(&mut doc, &table, &data(&[&["a", "b"], &["c", "d"]]), DEFAULT_VALUE_NAME).unwrap();
        assert_eq!(n, 4);
        assert_eq!(text(&doc, "v00"), "a");
        assert_eq!(text(&doc, "v01"), "b");
        assert_eq!(text(&doc, "v10"), "c");
        assert_eq!(text(&doc, "v11"), "d");
    }

    #[test]
    fn surplus_data_is_ignored() {
        let mut doc = grid(1, 2);
        let table = table_of(&doc);
        let n = populate(
            &mut doc,
            &table,
            &data(&[&["a", "b", "c"], &["d", "e", "f"]]),
            DEFAULT_VALUE_NAME,
        )
        .unwrap();
        assert_eq!(n, 2);
        assert_eq!(text(&doc, "v01"), "b");
    }

    #[test]
    fn surplus_cells_are_untouched() {
        let mut doc = grid(2, 3);
        let table = table_of(&doc);
        let n = populate(&mut doc, &table, &data(&[&["a"]]), DEFAULT_VALUE_NAME).unwrap();
        assert_eq!(n, 1);
        assert_eq!(text(&doc, "v00"), "a");
        assert_eq!(text(&doc, "v01"), "");
        assert_eq!(text(&doc, "v10"), "");
    }

    #[test]
    fn cells_without_slot_are_skipped() {
        let mut doc = Document::from_specs(
            vec![NodeSpec::frame("Row")
                .child(NodeSpec::instance("Cell").at(0.0, 0.0).child(NodeSpec::text("value", "").with_id("a")))
                .child(NodeSpec::instance("Cell").at(100.0, 0.0).child(NodeSpec::text("label", "")))
                .child(NodeSpec::instance("Cell").at(200.0, 0.0).child(NodeSpec::text("value", "").with_id("c")))],
            None,
        )
        .unwrap();
        doc.load_fonts(&[FontName::default()]).unwrap();
        let table = table_of(&doc);
        let n = populate(&mut doc, &table, &data(&[&["1", "2", "3"]]), DEFAULT_VALUE_NAME).unwrap();
        assert_eq!(n, 2);
        assert_eq!(text(&doc, "a"), "1");
        assert_eq!(text(&doc, "c"), "3");
    }

    #[test]
    fn unloaded_font_stops_population() {
        let mut doc = Document::from_specs(
            vec![NodeSpec::frame("Row").child(
                NodeSpec::instance("Cell").child(NodeSpec::text("value", "")),
            )],
            None,
        )
        .unwrap();
        let table = table_of(&doc);
        let err = populate(&mut doc, &table, &data(&[&["x"]]), DEFAULT_VALUE_NAME).unwrap_err();
        assert!(matches!(err, HostError::FontNotLoaded { .. }));
    }
}
