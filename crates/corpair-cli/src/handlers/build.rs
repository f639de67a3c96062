use std::path::Path;

use anyhow::Result;
use corpair_engine::{ExportFormat, WriteStatus, build_dataset, locate_pairs, write_dataset};

use crate::render::{ok_word, warn_word};

pub fn handle(
    input_dir: &Path,
    output: &Path,
    formats: &[ExportFormat],
    verbose: bool,
) -> Result<()> {
    let scan = locate_pairs(input_dir)?;

    if !scan.unmatched.is_empty() {
        eprintln!(
            "{} {} non-inlined file(s) without an inlined counterpart",
            warn_word("Warning:"),
            scan.unmatched.len()
        );
        if verbose {
            for path in &scan.unmatched {
                eprintln!("  unmatched: {}", path.display());
            }
        }
    }

    if scan.pairs.is_empty() {
        println!("No program pairs found in {}", input_dir.display());
        println!("Expected <name>.c files with a <name>_noinline.c counterpart.");
        return Ok(());
    }

    println!("Found {} program pair(s)", scan.pairs.len());

    let report = build_dataset(&scan.pairs)?;

    for record in &report.records {
        println!(
            "  [{}/{}] {}",
            record.id + 1,
            report.records.len(),
            record.filename
        );
        println!(
            "    - Before: {} lines, After: {} lines ({:+})",
            record.before_lines, record.after_lines, record.line_diff
        );
        println!(
            "    - Inlined ops: {}, Variants: {}",
            record.inlined_ops_count, record.variant_count
        );
    }

    for skipped in &report.skipped {
        eprintln!(
            "{} Skipped {}: {}",
            warn_word("Warning:"),
            skipped.pair.filename(),
            skipped.reason
        );
    }
    if !report.skipped.is_empty() {
        eprintln!(
            "{} {} pair(s) skipped",
            warn_word("Warning:"),
            report.skipped.len()
        );
    }

    // Formats are written best-effort: one failing does not stop the rest.
    for format in formats {
        match write_dataset(&report.records, output, *format) {
            Ok(WriteStatus::Written(path)) => {
                println!("{} {} dataset: {}", ok_word("✓ Saved"), format, path.display());
            }
            Ok(WriteStatus::Unavailable(reason)) => {
                eprintln!(
                    "{} {}; skipping {} export",
                    warn_word("Warning:"),
                    reason,
                    format
                );
            }
            Err(err) => {
                eprintln!(
                    "{} Failed to write {} dataset: {:#}",
                    warn_word("Warning:"),
                    format,
                    err
                );
            }
        }
    }

    println!("\nDataset created with {} entries", report.records.len());
    println!("Browse it with `corpair list` or `corpair browse`");

    Ok(())
}
