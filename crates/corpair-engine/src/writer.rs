use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use corpair_types::DatasetRecord;

/// Persisted dataset flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One pretty-printed array document.
    Json,
    /// One record per line, streaming-friendly.
    Jsonl,
    /// Tabular form for spreadsheet and dataframe tooling. Optional
    /// capability, compiled in via the `csv` cargo feature.
    Csv,
}

impl ExportFormat {
    /// File extension appended to the output prefix.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Jsonl => "JSONL",
            ExportFormat::Csv => "CSV",
        };
        write!(f, "{name}")
    }
}

/// How one requested export ended.
#[derive(Debug)]
pub enum WriteStatus {
    /// Dataset written to this path.
    Written(PathBuf),
    /// The capability is not compiled in; nothing was written.
    Unavailable(&'static str),
}

/// Append `.<ext>` to the prefix without treating existing dots in the
/// prefix as an extension to replace.
fn path_for(prefix: &Path, format: ExportFormat) -> PathBuf {
    let mut os = prefix.as_os_str().to_os_string();
    os.push(".");
    os.push(format.extension());
    PathBuf::from(os)
}

/// Persist `records` as `format` under the given path prefix, creating
/// missing parent directories first.
pub fn write_dataset(
    records: &[DatasetRecord],
    prefix: &Path,
    format: ExportFormat,
) -> Result<WriteStatus> {
    let path = path_for(prefix, format);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    match format {
        ExportFormat::Json => {
            write_json(&path, records)?;
            Ok(WriteStatus::Written(path))
        }
        ExportFormat::Jsonl => {
            write_jsonl(&path, records)?;
            Ok(WriteStatus::Written(path))
        }
        ExportFormat::Csv => write_csv(&path, records),
    }
}

fn write_json(path: &Path, records: &[DatasetRecord]) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, records)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn write_jsonl(path: &Path, records: &[DatasetRecord]) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for record in records {
        let json = serde_json::to_string(record)?;
        writeln!(file, "{}", json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

#[cfg(feature = "csv")]
fn write_csv(path: &Path, records: &[DatasetRecord]) -> Result<WriteStatus> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(WriteStatus::Written(path.to_path_buf()))
}

#[cfg(not(feature = "csv"))]
fn write_csv(_path: &Path, _records: &[DatasetRecord]) -> Result<WriteStatus> {
    Ok(WriteStatus::Unavailable(
        "CSV export requires the `csv` cargo feature",
    ))
}
