// NOTE: corpair Architecture Rationale
//
// Why full program text in every record (not paths)?
// - Generated artifact directories get wiped and regenerated between runs
// - A dataset must stay self-contained once written; consumers never touch
//   the artifact directory again
// - Trade-off: large dataset files, but the corpus is small by construction
//
// Why recompute inlined regions on view (not persist them)?
// - The region heuristic is a preview aid, not ground truth; persisting it
//   would freeze a boundary we may want to sharpen later
// - Recomputing from `after` text is cheap and keeps old datasets viewable
//   with the current heuristic

mod args;
mod browser;
mod commands;
pub mod config;
mod handlers;
mod render;

pub use args::{Cli, Commands, FormatArg};
pub use commands::run;
