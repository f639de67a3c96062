use std::fs;

use anyhow::{Context, Result};
use corpair_types::convention::{INLINED_MARKER, VARIANT_MARKER};
use corpair_types::{ArtifactPair, DatasetRecord};

/// Outcome of building records for a batch of pairs.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub records: Vec<DatasetRecord>,
    pub skipped: Vec<SkippedPair>,
}

/// A pair dropped from the batch, with the reason it failed.
#[derive(Debug)]
pub struct SkippedPair {
    pub pair: ArtifactPair,
    pub reason: String,
}

/// Number of newline separators in `text`.
///
/// Trailing content after the last newline does not count as a line. Every
/// previously persisted dataset used this metric, so it stays.
fn count_lines(text: &str) -> usize {
    text.matches('\n').count()
}

/// Build one record from a matched pair, reading both files.
pub fn build_record(pair: &ArtifactPair, id: usize) -> Result<DatasetRecord> {
    let after = fs::read_to_string(&pair.inline_path)
        .with_context(|| format!("Failed to read {}", pair.inline_path.display()))?;
    let before = fs::read_to_string(&pair.noinline_path)
        .with_context(|| format!("Failed to read {}", pair.noinline_path.display()))?;

    let before_lines = count_lines(&before);
    let after_lines = count_lines(&after);
    let inlined_ops_count = after.matches(INLINED_MARKER).count();
    let variant_count = after.matches(VARIANT_MARKER).count();

    Ok(DatasetRecord {
        id,
        filename: pair.filename(),
        before,
        after,
        before_lines,
        after_lines,
        inlined_ops_count,
        variant_count,
        line_diff: after_lines as i64 - before_lines as i64,
        created_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Build records for all pairs, strictly in input order.
///
/// Ids are assigned compactly over the records that survive. A failure on
/// the very first pair aborts the whole batch; once anything has been
/// attempted, later failures are collected as skips so one unreadable pair
/// cannot sink the rest of the run.
pub fn build_dataset(pairs: &[ArtifactPair]) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    for pair in pairs {
        let id = report.records.len();
        match build_record(pair, id) {
            Ok(record) => report.records.push(record),
            Err(err) if report.records.is_empty() && report.skipped.is_empty() => {
                return Err(err.context(format!("First pair failed ({})", pair.filename())));
            }
            Err(err) => report.skipped.push(SkippedPair {
                pair: pair.clone(),
                reason: format!("{err:#}"),
            }),
        }
    }

    Ok(report)
}
