use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use corpair_types::DatasetRecord;

/// Resolve the dataset path, probing the sibling flavor when the requested
/// file is absent (`.json` <-> `.jsonl`).
pub fn resolve_dataset_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    let mut tried = vec![path.display().to_string()];
    if let Some(probe) = sibling_flavor(path) {
        if probe.exists() {
            return Ok(probe);
        }
        tried.push(probe.display().to_string());
    }

    bail!(
        "Dataset not found (tried {}); run `corpair build` first",
        tried.join(", ")
    );
}

fn sibling_flavor(path: &Path) -> Option<PathBuf> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Some(path.with_extension("jsonl")),
        Some("jsonl") => Some(path.with_extension("json")),
        _ => None,
    }
}

/// Load a dataset from a JSON array document or a JSONL file, chosen by
/// file extension. Blank JSONL lines are skipped.
pub fn load_dataset(path: &Path) -> Result<Vec<DatasetRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;

    if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
        let mut records = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record: DatasetRecord = serde_json::from_str(line)
                .with_context(|| format!("Invalid record at {}:{}", path.display(), lineno + 1))?;
            records.push(record);
        }
        Ok(records)
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid dataset document {}", path.display()))
    }
}
