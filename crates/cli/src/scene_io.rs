// Scene and dataset file IO

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tablefill_datagen::Dataset;
use tablefill_scene::{Document, SceneError};

use crate::exit_codes::EXIT_ERROR;
use crate::CliError;

pub fn read_scene(path: &Path) -> Result<Document, CliError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {}", path.display(), e)))?;
    Document::from_json(&contents).map_err(|e| scene_error(path, e))
}

/// Write `doc` to `output`, or back over `input` when no output is given.
pub fn write_scene(doc: &Document, input: &Path, output: Option<&Path>) -> Result<(), CliError> {
    let target = output.unwrap_or(input);
    let json = doc.to_json_pretty().map_err(|e| scene_error(target, e))?;
    fs::write(target, json + "\n")
        .map_err(|e| CliError::io(format!("cannot write {}: {}", target.display(), e)))?;
    tracing::debug!(path = %target.display(), "wrote scene");
    Ok(())
}

/// Read a dataset from a file, or stdin when `source` is `-`.
pub fn read_dataset(source: &Path) -> Result<Dataset, CliError> {
    let contents = if source == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::io(format!("cannot read stdin: {}", e)))?;
        buf
    } else {
        fs::read_to_string(source)
            .map_err(|e| CliError::io(format!("cannot read {}: {}", source.display(), e)))?
    };

    let dataset = Dataset::from_json(&contents)
        .map_err(|e| CliError::parse(format!("{}: {}", source.display(), e)))?;
    if dataset.is_empty() {
        tracing::warn!(source = %source.display(), "dataset has no records");
    }
    Ok(dataset)
}

fn scene_error(path: &Path, err: SceneError) -> CliError {
    let message = format!("{}: {}", path.display(), err);
    match err {
        SceneError::Parse(_) => CliError::parse(message)
            .with_hint("expected {\"nodes\": [...], \"selection\": [\"id\", ...]}"),
        SceneError::DuplicateId(_) | SceneError::UnknownSelection(_) => CliError::parse(message),
        SceneError::Serialize(_) => CliError { code: EXIT_ERROR, message, hint: None },
    }
}
