use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use corpair_types::ArtifactPair;
use corpair_types::convention::{INLINE_SUFFIX, NOINLINE_SUFFIX};
use walkdir::WalkDir;

/// Outcome of scanning one artifact directory for program pairs.
#[derive(Debug, Default)]
pub struct PairScan {
    /// Matched pairs, sorted by inline file name then path.
    pub pairs: Vec<ArtifactPair>,
    /// Non-inlined files with no inlined counterpart, sorted.
    pub unmatched: Vec<PathBuf>,
}

/// Scan `dir` for `<name>_noinline.c` files and pair each with its
/// `<name>.c` counterpart in the same directory.
///
/// Counterpart-less files land in [`PairScan::unmatched`] for the caller to
/// report. A counterpart claimed by more than one non-inlined file is an
/// error rather than an arbitrary pick.
pub fn locate_pairs(dir: &Path) -> Result<PairScan> {
    if !dir.is_dir() {
        bail!("Artifact directory not found: {}", dir.display());
    }

    let mut scan = PairScan::default();
    let mut claimed: BTreeSet<PathBuf> = BTreeSet::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(base) = name.strip_suffix(NOINLINE_SUFFIX) else {
            continue;
        };

        let inline_path = dir.join(format!("{base}{INLINE_SUFFIX}"));
        if !inline_path.is_file() {
            scan.unmatched.push(entry.path().to_path_buf());
            continue;
        }
        if !claimed.insert(inline_path.clone()) {
            bail!(
                "Ambiguous pairing: {} is claimed by more than one non-inlined file",
                inline_path.display()
            );
        }
        scan.pairs.push(ArtifactPair {
            inline_path,
            noinline_path: entry.path().to_path_buf(),
        });
    }

    scan.pairs
        .sort_by_key(|pair| (pair.filename(), pair.inline_path.clone()));
    scan.unmatched.sort();

    Ok(scan)
}
