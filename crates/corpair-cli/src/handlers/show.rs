use std::io;
use std::path::Path;

use anyhow::Result;
use corpair_engine::{load_dataset, resolve_dataset_path};

use crate::render;

pub fn handle(
    dataset: &Path,
    index: usize,
    full: bool,
    inlined: bool,
    truncate_lines: usize,
) -> Result<()> {
    let path = resolve_dataset_path(dataset)?;
    let records = load_dataset(&path)?;
    println!("Loaded {} entries from {}", records.len(), path.display());

    let Some(record) = records.get(index) else {
        if records.is_empty() {
            println!("error: index {} out of range (dataset is empty)", index);
        } else {
            println!(
                "error: index {} out of range (valid: 0-{})",
                index,
                records.len() - 1
            );
        }
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if inlined {
        render::write_regions(&mut out, record)?;
    } else {
        render::write_record(&mut out, record, full, truncate_lines)?;
    }

    Ok(())
}
