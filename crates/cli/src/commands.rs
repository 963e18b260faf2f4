// Table commands: inspect, fill, generate, infer, dataset

use std::path::Path;

use serde::Serialize;

use tablefill_config::Settings;
use tablefill_datagen::{
    generate_fixed, generate_from_headers, Dataset, FixedOptions, Pools, RandomSource, RngSource,
};
use tablefill_engine::{
    discover, fill_dataset, fill_fixed, fill_inferred, read_table, FillOptions, FillReport,
    GenerateRequest,
};

use crate::scene_io::{read_dataset, read_scene, write_scene};
use crate::CliError;

/// Column count used by `dataset fixed` when none is given: the base fields.
const DEFAULT_DATASET_COLUMNS: usize = 6;

/// Settings resolved for one invocation.
pub struct Context {
    pub settings: Settings,
}

impl Context {
    pub fn fill_options(&self) -> FillOptions {
        FillOptions {
            cell_name: self.settings.cell_name.clone(),
            value_name: self.settings.value_name.clone(),
        }
    }

    pub fn fixed_options(&self) -> FixedOptions {
        FixedOptions {
            minimum_pool: self.settings.minimum_pool,
            active_bias: self.settings.active_bias,
        }
    }

    /// `--seed` wins over `generate.seed`; with neither, draw from entropy.
    pub fn rng(&self, seed: Option<u64>) -> impl RandomSource {
        match seed.or(self.settings.seed) {
            Some(seed) => {
                tracing::debug!(seed, "using seeded random source");
                RngSource::seeded(seed)
            }
            None => RngSource::from_entropy(),
        }
    }
}

// ============================================================================
// inspect
// ============================================================================

#[derive(Serialize)]
struct InspectOutput {
    rows: usize,
    cells: usize,
    columns: usize,
    table: Vec<Vec<Option<String>>>,
}

pub fn cmd_inspect(ctx: &Context, scene: &Path, json: bool) -> Result<(), CliError> {
    let doc = read_scene(scene)?;
    let options = ctx.fill_options();
    let table = discover(&doc, &options).map_err(CliError::fill)?;
    let values = read_table(&doc, &table, &options.value_name);

    if json {
        let output = InspectOutput {
            rows: table.row_count(),
            cells: table.cell_count(),
            columns: table.max_columns(),
            table: values,
        };
        return print_json(&output);
    }

    println!(
        "{} rows, {} cells, {} columns",
        table.row_count(),
        table.cell_count(),
        table.max_columns()
    );
    for (i, row) in values.iter().enumerate() {
        let texts: Vec<&str> = row
            .iter()
            .map(|v| v.as_deref().unwrap_or("(no slot)"))
            .collect();
        println!("{:>4}  {}", i + 1, texts.join(" | "));
    }
    Ok(())
}

// ============================================================================
// fill / generate / infer
// ============================================================================

pub fn cmd_fill(
    ctx: &Context,
    scene: &Path,
    data: &Path,
    output: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let mut doc = read_scene(scene)?;
    let dataset = read_dataset(data)?;
    let report = fill_dataset(&mut doc, &dataset, &ctx.fill_options()).map_err(CliError::fill)?;
    write_scene(&doc, scene, output)?;
    print_report(&report, json)
}

pub fn cmd_generate(
    ctx: &Context,
    scene: &Path,
    request: GenerateRequest,
    seed: Option<u64>,
    output: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let mut doc = read_scene(scene)?;
    let mut rng = ctx.rng(seed);
    let report = fill_fixed(
        &mut doc,
        request,
        &Pools::builtin(),
        &ctx.fixed_options(),
        &mut rng,
        &ctx.fill_options(),
    )
    .map_err(CliError::fill)?;
    write_scene(&doc, scene, output)?;
    print_report(&report, json)
}

pub fn cmd_infer(
    ctx: &Context,
    scene: &Path,
    headers: &[String],
    rows: Option<usize>,
    seed: Option<u64>,
    output: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let mut doc = read_scene(scene)?;
    let mut rng = ctx.rng(seed);
    let headers = (!headers.is_empty()).then_some(headers);
    let report = fill_inferred(
        &mut doc,
        headers,
        rows,
        &Pools::builtin(),
        &mut rng,
        &ctx.fill_options(),
    )
    .map_err(CliError::fill)?;
    write_scene(&doc, scene, output)?;
    print_report(&report, json)
}

// ============================================================================
// dataset
// ============================================================================

pub fn cmd_dataset_fixed(
    ctx: &Context,
    rows: usize,
    columns: Option<usize>,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let mut rng = ctx.rng(seed);
    let dataset = generate_fixed(
        rows,
        columns.unwrap_or(DEFAULT_DATASET_COLUMNS),
        &Pools::builtin(),
        &ctx.fixed_options(),
        &mut rng,
    );
    print_dataset(&dataset)
}

pub fn cmd_dataset_headers(
    ctx: &Context,
    headers: &[String],
    rows: usize,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let mut rng = ctx.rng(seed);
    let dataset = generate_from_headers(headers, rows, &Pools::builtin(), &mut rng);
    print_dataset(&dataset)
}

// ============================================================================
// output
// ============================================================================

#[derive(Serialize)]
struct ReportOutput<'a> {
    #[serde(flatten)]
    report: &'a FillReport,
    status: String,
}

fn print_report(report: &FillReport, json: bool) -> Result<(), CliError> {
    if json {
        return print_json(&ReportOutput {
            report,
            status: report.status_message(),
        });
    }
    println!("{}", report.status_message());
    Ok(())
}

fn print_dataset(dataset: &Dataset) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(dataset)
        .map_err(|e| CliError::eval(format!("cannot serialize dataset: {}", e)))?;
    println!("{}", out);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string(value)
        .map_err(|e| CliError::eval(format!("cannot serialize output: {}", e)))?;
    println!("{}", out);
    Ok(())
}
