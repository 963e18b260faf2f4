//! Fill actions: discover the selected table, then populate it from a
//! dataset, the fixed-schema generator, or the header-inferred generator.

use serde::Serialize;

use tablefill_datagen::{
    generate_fixed, generate_from_headers, Dataset, FixedOptions, Pools, RandomSource,
};
use tablefill_scene::select::DEFAULT_CELL_NAME;
use tablefill_scene::slot::DEFAULT_VALUE_NAME;
use tablefill_scene::{
    collect_cells, collect_fonts, find_value_slot, organize_rows, Document, SceneHost, Table,
};

use crate::error::FillError;
use crate::populate::populate;

/// Names that identify cells and their value slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOptions {
    pub cell_name: String,
    pub value_name: String,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            cell_name: DEFAULT_CELL_NAME.to_string(),
            value_name: DEFAULT_VALUE_NAME.to_string(),
        }
    }
}

/// Outcome of a successful fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FillReport {
    /// Cells whose value slot was written.
    pub updated: usize,
    /// Rows discovered in the selection.
    pub rows: usize,
    /// Cells discovered in the selection.
    pub cells: usize,
}

impl FillReport {
    /// Status line shown to the user.
    pub fn status_message(&self) -> String {
        match self.updated {
            0 => "No cells updated".to_string(),
            1 => "Updated 1 cell".to_string(),
            n => format!("Updated {n} cells"),
        }
    }
}

/// Shape of a fixed-schema fill. `None` derives the value from the table:
/// rows default to the table's rows minus the header row, columns to the
/// widest row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
}

/// Collect and organize the cells under the host's selection.
pub fn discover<H>(host: &H, options: &FillOptions) -> Result<Table, FillError>
where
    H: SceneHost + ?Sized,
{
    let selection = host.selection();
    if selection.is_empty() {
        return Err(FillError::EmptySelection);
    }

    let doc = host.document();
    let cells = collect_cells(doc, selection, &options.cell_name);
    if cells.is_empty() {
        return Err(FillError::NoCells);
    }

    let table = organize_rows(doc, &cells);
    tracing::debug!(
        rows = table.row_count(),
        cells = table.cell_count(),
        "discovered table"
    );
    Ok(table)
}

/// Current value-slot text of every cell, row by row. `None` marks a cell
/// without a value slot.
pub fn read_table(doc: &Document, table: &Table, value_name: &str) -> Vec<Vec<Option<String>>> {
    table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|&cell| {
                    find_value_slot(doc, cell, value_name)
                        .and_then(|slot| doc.node(slot).characters())
                        .map(str::to_string)
                })
                .collect()
        })
        .collect()
}

/// Slot texts of the first row. Cells without a slot yield `""`.
pub fn header_row(doc: &Document, table: &Table, value_name: &str) -> Vec<String> {
    let Some(first) = table.rows.first() else {
        return Vec::new();
    };
    first
        .cells
        .iter()
        .map(|&cell| {
            find_value_slot(doc, cell, value_name)
                .and_then(|slot| doc.node(slot).characters())
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// Populate the selected table from `dataset`: header row first, then one
/// row per record.
pub fn fill_dataset<H>(
    host: &mut H,
    dataset: &Dataset,
    options: &FillOptions,
) -> Result<FillReport, FillError>
where
    H: SceneHost + ?Sized,
{
    let table = discover(host, options)?;
    apply(host, &table, dataset, options)
}

/// Populate the selected table with fixed-schema people records.
pub fn fill_fixed<H, R>(
    host: &mut H,
    request: GenerateRequest,
    pools: &Pools<'_>,
    fixed: &FixedOptions,
    rng: &mut R,
    options: &FillOptions,
) -> Result<FillReport, FillError>
where
    H: SceneHost + ?Sized,
    R: RandomSource + ?Sized,
{
    let table = discover(host, options)?;
    let rows = request
        .rows
        .unwrap_or_else(|| table.row_count().saturating_sub(1));
    let columns = request.columns.unwrap_or_else(|| table.max_columns());

    let dataset = generate_fixed(rows, columns, pools, fixed, rng);
    apply(host, &table, &dataset, options)
}

/// Populate the selected table with values inferred from column headers.
///
/// Without explicit `headers`, the first table row's slot texts are used.
pub fn fill_inferred<H, R>(
    host: &mut H,
    headers: Option<&[String]>,
    rows: Option<usize>,
    pools: &Pools<'_>,
    rng: &mut R,
    options: &FillOptions,
) -> Result<FillReport, FillError>
where
    H: SceneHost + ?Sized,
    R: RandomSource + ?Sized,
{
    let table = discover(host, options)?;
    let headers = match headers {
        Some(given) => given.to_vec(),
        None => header_row(host.document(), &table, &options.value_name),
    };
    let rows = rows.unwrap_or_else(|| table.row_count().saturating_sub(1));

    tracing::debug!(?headers, rows, "inferring columns");
    let dataset = generate_from_headers(&headers, rows, pools, rng);
    apply(host, &table, &dataset, options)
}

/// Load every font used under the table's cells, then write the dataset.
fn apply<H>(
    host: &mut H,
    table: &Table,
    dataset: &Dataset,
    options: &FillOptions,
) -> Result<FillReport, FillError>
where
    H: SceneHost + ?Sized,
{
    let cells: Vec<_> = table
        .rows
        .iter()
        .flat_map(|row| row.cells.iter().copied())
        .collect();
    let fonts = collect_fonts(host.document(), &cells);
    host.load_fonts(&fonts)?;

    let data = dataset.to_rows();
    let updated = populate(host, table, &data, &options.value_name)?;

    let report = FillReport {
        updated,
        rows: table.row_count(),
        cells: table.cell_count(),
    };
    tracing::debug!(?report, "fill complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablefill_datagen::RngSource;
    use tablefill_scene::{FontName, HostError, NodeSpec};

    fn cell(x: f64, y: f64, key: &str, text: &str) -> NodeSpec {
        NodeSpec::instance("Cell")
            .at(x, y)
            .child(NodeSpec::text("value", text).with_id(key))
    }

    fn row(y: f64, r: usize, texts: &[&str]) -> NodeSpec {
        texts
            .iter()
            .enumerate()
            .fold(NodeSpec::frame("Row").at(0.0, y), |row, (c, text)| {
                row.child(cell(c as f64 * 120.0, y, &format!("r{r}c{c}"), text))
            })
    }

    fn text(doc: &Document, key: &str) -> String {
        doc.node(doc.find_by_key(key).unwrap())
            .characters()
            .unwrap_or_default()
            .to_string()
    }

    fn dataset(json: &str) -> Dataset {
        Dataset::from_json(json).unwrap()
    }

    #[test]
    fn report_status_messages() {
        let report = |updated| FillReport { updated, rows: 1, cells: 1 };
        assert_eq!(report(0).status_message(), "No cells updated");
        assert_eq!(report(1).status_message(), "Updated 1 cell");
        assert_eq!(report(12).status_message(), "Updated 12 cells");
    }

    #[test]
    fn empty_selection_is_rejected() {
        let mut doc = Document::from_specs(vec![row(0.0, 0, &["a"])], Some(vec![])).unwrap();
        let err = fill_dataset(&mut doc, &dataset(r#"[{"A":"x"}]"#), &FillOptions::default())
            .unwrap_err();
        assert_eq!(err, FillError::EmptySelection);
    }

    #[test]
    fn selection_without_cells_is_rejected() {
        let mut doc = Document::from_specs(
            vec![NodeSpec::frame("Card").child(NodeSpec::text("title", "hi"))],
            None,
        )
        .unwrap();
        let err = fill_dataset(&mut doc, &dataset(r#"[{"A":"x"}]"#), &FillOptions::default())
            .unwrap_err();
        assert_eq!(err, FillError::NoCells);
    }

    #[test]
    fn dataset_fills_header_then_records() {
        let mut doc = Document::from_specs(
            vec![NodeSpec::frame("Table")
                .child(row(0.0, 0, &["", ""]))
                .child(row(40.0, 1, &["", ""]))
                .child(row(80.0, 2, &["", ""]))],
            None,
        )
        .unwrap();
        let data = dataset(r#"[{"Name":"Ada","Age":36},{"Name":"Alan","Age":null}]"#);
        let report = fill_dataset(&mut doc, &data, &FillOptions::default()).unwrap();

        assert_eq!(report, FillReport { updated: 6, rows: 3, cells: 6 });
        assert_eq!(text(&doc, "r0c0"), "Name");
        assert_eq!(text(&doc, "r0c1"), "Age");
        assert_eq!(text(&doc, "r1c0"), "Ada");
        assert_eq!(text(&doc, "r1c1"), "36");
        assert_eq!(text(&doc, "r2c0"), "Alan");
        assert_eq!(text(&doc, "r2c1"), "");
    }

    #[test]
    fn malformed_dataset_updates_nothing() {
        let mut doc = Document::from_specs(vec![row(0.0, 0, &["keep"])], None).unwrap();
        let data = Dataset::from_value(serde_json::json!({"not": "an array"}));
        let report = fill_dataset(&mut doc, &data, &FillOptions::default()).unwrap();
        assert_eq!(report.updated, 0);
        assert_eq!(text(&doc, "r0c0"), "keep");
    }

    #[test]
    fn unavailable_font_aborts_before_writing() {
        let mut doc = Document::from_specs(vec![row(0.0, 0, &["keep"])], None).unwrap();
        doc.set_unavailable_fonts([FontName::default()]);
        let err = fill_dataset(&mut doc, &dataset(r#"[{"A":"x"}]"#), &FillOptions::default())
            .unwrap_err();
        assert_eq!(err, FillError::Host(HostError::FontUnavailable(FontName::default())));
        assert_eq!(text(&doc, "r0c0"), "keep");
    }

    #[test]
    fn custom_names_are_honoured() {
        let mut doc = Document::from_specs(
            vec![NodeSpec::frame("Row").child(
                NodeSpec::instance("Slot").child(NodeSpec::text("content", "").with_id("t")),
            )],
            None,
        )
        .unwrap();
        let options = FillOptions {
            cell_name: "slot".into(),
            value_name: "CONTENT".into(),
        };
        let report = fill_dataset(&mut doc, &dataset(r#"[{"Only":1}]"#), &options).unwrap();
        assert_eq!(report.updated, 1);
        assert_eq!(text(&doc, "t"), "Only");
    }

    #[test]
    fn fixed_fill_defaults_to_table_shape() {
        let blank = ["", "", "", "", "", ""];
        let mut doc = Document::from_specs(
            vec![NodeSpec::frame("Table")
                .child(row(0.0, 0, &blank))
                .child(row(40.0, 1, &blank))
                .child(row(80.0, 2, &blank))],
            None,
        )
        .unwrap();
        let mut rng = RngSource::seeded(7);
        let report = fill_fixed(
            &mut doc,
            GenerateRequest::default(),
            &Pools::builtin(),
            &FixedOptions::default(),
            &mut rng,
            &FillOptions::default(),
        )
        .unwrap();

        assert_eq!(report.updated, 18);
        assert_eq!(text(&doc, "r0c0"), "Name");
        assert_eq!(text(&doc, "r0c5"), "Status");
        assert!(text(&doc, "r1c1").contains('@'));
        assert!(text(&doc, "r2c1").contains('@'));
    }

    #[test]
    fn inferred_fill_reads_headers_from_first_row() {
        let mut doc = Document::from_specs(
            vec![NodeSpec::frame("Table")
                .child(row(0.0, 0, &["Email Address", "Foo Bar"]))
                .child(row(40.0, 1, &["", ""]))
                .child(row(80.0, 2, &["", ""]))],
            None,
        )
        .unwrap();
        let mut rng = RngSource::seeded(3);
        let report = fill_inferred(
            &mut doc,
            None,
            None,
            &Pools::builtin(),
            &mut rng,
            &FillOptions::default(),
        )
        .unwrap();

        assert_eq!(report.updated, 6);
        assert_eq!(text(&doc, "r0c0"), "Email Address");
        assert!(text(&doc, "r1c0").contains('@'));
        assert_eq!(text(&doc, "r1c1"), "Foo Bar 1");
        assert_eq!(text(&doc, "r2c1"), "Foo Bar 2");
    }

    #[test]
    fn inferred_fill_with_explicit_headers() {
        let mut doc = Document::from_specs(
            vec![NodeSpec::frame("Table")
                .child(row(0.0, 0, &["x"]))
                .child(row(40.0, 1, &["y"]))],
            None,
        )
        .unwrap();
        let headers = vec!["Widget".to_string()];
        let mut rng = RngSource::seeded(3);
        fill_inferred(
            &mut doc,
            Some(&headers),
            Some(1),
            &Pools::builtin(),
            &mut rng,
            &FillOptions::default(),
        )
        .unwrap();
        assert_eq!(text(&doc, "r0c0"), "Widget");
        assert_eq!(text(&doc, "r1c0"), "Widget 1");
    }

    #[test]
    fn read_table_reports_missing_slots() {
        let doc = Document::from_specs(
            vec![NodeSpec::frame("Row")
                .child(cell(0.0, 0.0, "a", "one"))
                .child(NodeSpec::instance("Cell").at(100.0, 0.0))],
            None,
        )
        .unwrap();
        let table = discover(&doc, &FillOptions::default()).unwrap();
        assert_eq!(
            read_table(&doc, &table, DEFAULT_VALUE_NAME),
            vec![vec![Some("one".to_string()), None]]
        );
        assert_eq!(header_row(&doc, &table, DEFAULT_VALUE_NAME), vec!["one", ""]);
    }
}
