use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::args::FormatArg;

/// Settings loaded from `corpair.toml`.
///
/// A missing file means defaults; command-line flags override whatever was
/// loaded. A present but malformed file is an error, not a silent default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory scanned for generated programs.
    pub input_dir: PathBuf,
    /// Path prefix the dataset files are written under.
    pub output: PathBuf,
    /// Formats written when `--format` is not given.
    pub formats: Vec<FormatArg>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("generated"),
            output: PathBuf::from("dataset/c_programs"),
            formats: vec![FormatArg::Json, FormatArg::Jsonl],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Dataset file the view commands read when `--dataset` is not given.
    pub dataset: PathBuf,
    /// Line cap for truncated program display.
    pub truncate_lines: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("dataset/c_programs.json"),
            truncate_lines: 50,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}
