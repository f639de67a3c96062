//! Core pipeline for corpair: locate program pairs on disk, build dataset
//! records from them, persist and reload datasets, and recover inlined
//! regions from program text.

mod build;
mod locate;
mod reader;
mod scan;
mod writer;

pub use build::{BuildReport, SkippedPair, build_dataset, build_record};
pub use locate::{PairScan, locate_pairs};
pub use reader::{load_dataset, resolve_dataset_path};
pub use scan::find_inlined_regions;
pub use writer::{ExportFormat, WriteStatus, write_dataset};
