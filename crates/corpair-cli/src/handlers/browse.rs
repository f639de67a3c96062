use std::io;
use std::path::Path;

use anyhow::Result;
use corpair_engine::{load_dataset, resolve_dataset_path};

use crate::browser::BrowseSession;

pub fn handle(dataset: &Path, truncate_lines: usize) -> Result<()> {
    let path = resolve_dataset_path(dataset)?;
    let records = load_dataset(&path)?;
    println!("Loaded {} entries from {}", records.len(), path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = BrowseSession::new(records, truncate_lines, stdin.lock(), stdout.lock());
    session.run()
}
