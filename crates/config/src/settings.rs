// User settings
// Loaded from ~/.config/tablefill/settings.json (or a .toml file given explicitly)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Io { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {}: {}", path.display(), message),
            Self::Parse { path, message } => write!(f, "invalid settings in {}: {}", path.display(), message),
            Self::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Selection
    #[serde(rename = "selection.cellName")]
    pub cell_name: String,

    #[serde(rename = "selection.valueName")]
    pub value_name: String,

    // Generation
    #[serde(rename = "generate.minimumPool")]
    pub minimum_pool: usize,

    #[serde(rename = "generate.activeBias")]
    pub active_bias: f64,

    #[serde(rename = "generate.seed")]
    pub seed: Option<u64>,  // None = fresh entropy per run
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_name: "cell".to_string(),
            value_name: "value".to_string(),
            minimum_pool: 30,
            active_bias: 0.7,
            seed: None,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tablefill");
        config_dir.join("settings.json")
    }

    /// Load the default settings file. A missing file yields defaults.
    pub fn load() -> Result<Self, SettingsError> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load an explicit settings file. `.toml` files are parsed as TOML
    /// (dotted keys quoted: `"selection.cellName" = "cell"`), anything else
    /// as JSON with `//` comment lines.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let settings = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_json(&contents)
        }
        .map_err(|message| SettingsError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        settings.validate()?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Parse JSON settings, ignoring lines that start with `//`.
    pub fn from_json(contents: &str) -> Result<Self, String> {
        // Strip comments (lines starting with //)
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        serde_json::from_str(&cleaned).map_err(|e| e.to_string())
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cell_name.trim().is_empty() {
            return Err(SettingsError::Invalid("selection.cellName must not be empty".into()));
        }
        if self.value_name.trim().is_empty() {
            return Err(SettingsError::Invalid("selection.valueName must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.active_bias) {
            return Err(SettingsError::Invalid(format!(
                "generate.activeBias must be between 0 and 1, got {}",
                self.active_bias
            )));
        }
        Ok(())
    }
}
