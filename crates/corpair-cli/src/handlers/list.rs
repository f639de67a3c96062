use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use corpair_engine::{load_dataset, resolve_dataset_path};

use crate::render;

pub fn handle(dataset: &Path, full: bool, truncate_lines: usize) -> Result<()> {
    let path = resolve_dataset_path(dataset)?;
    let records = load_dataset(&path)?;
    println!("Loaded {} entries from {}", records.len(), path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        render::write_record(&mut out, record, full, truncate_lines)?;
        if !full {
            writeln!(out)?;
        }
    }

    Ok(())
}
