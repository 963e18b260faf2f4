// tablefill CLI - fill design-tool tables from datasets and generators

mod commands;
mod exit_codes;
mod logging;
mod scene_io;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tablefill_config::{Settings, SettingsError};
use tablefill_engine::{FillError, GenerateRequest};

use commands::Context;
use exit_codes::{fill_exit_code, EXIT_ERROR, EXIT_IO, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "tfill")]
#[command(about = "Fill table cells in a design scene with data")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Settings file (.json with // comments, or .toml)
    #[arg(long, global = true, env = "TFILL_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug diagnostics to stderr (overrides TFILL_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the table discovered under the scene's selection
    #[command(after_help = "\
Examples:
  tfill inspect scene.json
  tfill inspect scene.json --json")]
    Inspect {
        /// Scene file
        scene: PathBuf,

        /// Emit one JSON object instead of text
        #[arg(long)]
        json: bool,
    },

    /// Populate the table from a JSON dataset (array of objects)
    #[command(after_help = "\
Examples:
  tfill fill scene.json --data people.json
  cat people.json | tfill fill scene.json --data - -o filled.json")]
    Fill {
        /// Scene file
        scene: PathBuf,

        /// Dataset file, or - for stdin
        #[arg(long, short = 'd', value_name = "FILE")]
        data: PathBuf,

        /// Write the updated scene here instead of over the input
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Emit the fill report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Populate the table with generated people-directory records
    #[command(after_help = "\
Examples:
  tfill generate scene.json
  tfill generate scene.json --rows 8 --columns 9 --seed 42")]
    Generate {
        /// Scene file
        scene: PathBuf,

        /// Records to generate (default: table rows minus the header row)
        #[arg(long)]
        rows: Option<usize>,

        /// Column count that selects the schema (default: widest table row)
        #[arg(long)]
        columns: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write the updated scene here instead of over the input
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Emit the fill report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Populate the table with values inferred from its column headers
    #[command(after_help = "\
Examples:
  tfill infer scene.json
  tfill infer scene.json --header Name --header 'Email Address' --rows 5")]
    Infer {
        /// Scene file
        scene: PathBuf,

        /// Column header (repeatable; default: the table's first row)
        #[arg(long = "header", value_name = "HEADER")]
        headers: Vec<String>,

        /// Records to generate (default: table rows minus the header row)
        #[arg(long)]
        rows: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write the updated scene here instead of over the input
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Emit the fill report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a generated dataset as JSON
    #[command(subcommand)]
    Dataset(DatasetCommands),
}

#[derive(Subcommand)]
enum DatasetCommands {
    /// People-directory records with a fixed schema
    Fixed {
        /// Records to generate
        #[arg(long)]
        rows: usize,

        /// Column count that selects the schema (default: 6)
        #[arg(long)]
        columns: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Records keyed by the given headers
    Headers {
        /// Column header (repeatable)
        #[arg(long = "header", value_name = "HEADER", required = true)]
        headers: Vec<String>,

        /// Records to generate
        #[arg(long)]
        rows: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nengine:  tablefill-engine ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("TARGET"),
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = load_settings(cli.config.as_deref())
        .and_then(|settings| run(&Context { settings }, cli.command));

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn run(ctx: &Context, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Inspect { scene, json } => commands::cmd_inspect(ctx, &scene, json),
        Commands::Fill { scene, data, output, json } => {
            commands::cmd_fill(ctx, &scene, &data, output.as_deref(), json)
        }
        Commands::Generate { scene, rows, columns, seed, output, json } => commands::cmd_generate(
            ctx,
            &scene,
            GenerateRequest { rows, columns },
            seed,
            output.as_deref(),
            json,
        ),
        Commands::Infer { scene, headers, rows, seed, output, json } => {
            commands::cmd_infer(ctx, &scene, &headers, rows, seed, output.as_deref(), json)
        }
        Commands::Dataset(DatasetCommands::Fixed { rows, columns, seed }) => {
            commands::cmd_dataset_fixed(ctx, rows, columns, seed)
        }
        Commands::Dataset(DatasetCommands::Headers { headers, rows, seed }) => {
            commands::cmd_dataset_headers(ctx, &headers, rows, seed)
        }
    }
}

fn load_settings(explicit: Option<&std::path::Path>) -> Result<Settings, CliError> {
    match explicit {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .map_err(CliError::settings)
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE, message: msg.into(), hint: None }
    }

    pub fn eval(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Create error from fill error with proper exit code.
    pub fn fill(err: FillError) -> Self {
        let code = fill_exit_code(&err);
        let hint = match &err {
            FillError::EmptySelection => {
                Some("list node ids in the scene's \"selection\", or omit it to select every top-level node".to_string())
            }
            FillError::NoCells => {
                Some("cells are nodes named after selection.cellName (default \"cell\")".to_string())
            }
            FillError::Host(_) => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    pub fn settings(err: SettingsError) -> Self {
        let code = match &err {
            SettingsError::Io { .. } => EXIT_IO,
            SettingsError::Parse { .. } => EXIT_PARSE,
            SettingsError::Invalid(_) => EXIT_USAGE,
        };
        Self { code, message: err.to_string(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
