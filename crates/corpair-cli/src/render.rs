use std::io::Write;

use anyhow::Result;
use corpair_engine::find_inlined_regions;
use corpair_types::DatasetRecord;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub(crate) const BANNER_WIDTH: usize = 80;

/// Status word for stdout, green when attached to a terminal.
pub fn ok_word(word: &str) -> String {
    if std::io::stdout().is_terminal() {
        word.green().bold().to_string()
    } else {
        word.to_string()
    }
}

/// Status word for stderr, yellow when attached to a terminal.
pub fn warn_word(word: &str) -> String {
    if std::io::stderr().is_terminal() {
        word.yellow().bold().to_string()
    } else {
        word.to_string()
    }
}

/// Cap program text at `max_lines` lines for display.
pub fn truncate_code(code: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = code.split('\n').collect();
    if lines.len() > max_lines {
        format!(
            "{}\n\n... ({} more lines)",
            lines[..max_lines].join("\n"),
            lines.len() - max_lines
        )
    } else {
        code.to_string()
    }
}

/// Print one record: banner, stats block, then both program texts.
pub fn write_record(
    w: &mut impl Write,
    record: &DatasetRecord,
    full: bool,
    truncate_lines: usize,
) -> Result<()> {
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(w, "ID: {} | File: {}", record.id, record.filename)?;
    writeln!(w, "Created: {}", record.created_at)?;
    writeln!(w, "{}", "-".repeat(BANNER_WIDTH))?;
    writeln!(w, "Stats:")?;
    writeln!(w, "  - Before (non-inlined): {} lines", record.before_lines)?;
    writeln!(w, "  - After (inlined): {} lines", record.after_lines)?;
    writeln!(w, "  - Line difference: {:+}", record.line_diff)?;
    writeln!(w, "  - Inlined operations: {}", record.inlined_ops_count)?;
    writeln!(w, "  - Variant usages: {}", record.variant_count)?;
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;

    if full {
        writeln!(w, "\n### BEFORE (non-inlined) ###\n")?;
        writeln!(w, "{}", record.before)?;
        writeln!(w, "\n### AFTER (inlined) ###\n")?;
        writeln!(w, "{}", record.after)?;
    } else {
        writeln!(w, "\n### BEFORE (non-inlined, truncated) ###\n")?;
        writeln!(w, "{}", truncate_code(&record.before, truncate_lines))?;
        writeln!(w, "\n### AFTER (inlined, truncated) ###\n")?;
        writeln!(w, "{}", truncate_code(&record.after, truncate_lines))?;
    }

    Ok(())
}

/// Print only the inlined regions recovered from the after text.
pub fn write_regions(w: &mut impl Write, record: &DatasetRecord) -> Result<()> {
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(w, "Inlined regions in: {}", record.filename)?;
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;

    let regions = find_inlined_regions(&record.after);
    if regions.is_empty() {
        writeln!(w, "No inlined regions found.")?;
        return Ok(());
    }

    for (i, region) in regions.iter().enumerate() {
        writeln!(w, "\n--- Region {} (line {}) ---", i + 1, region.line)?;
        writeln!(w, "{}", region.code)?;
    }

    Ok(())
}
