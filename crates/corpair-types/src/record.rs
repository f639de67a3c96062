use serde::{Deserialize, Serialize};

/// One persisted dataset entry: a before/after program pair plus the
/// metrics derived from it.
///
/// Field declaration order is the persisted key order. Older datasets used
/// `noinline_*` / `inline_*` names for the code and line-count fields; those
/// are still accepted on read via aliases and are always written back under
/// the current names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Ordinal position in the dataset, assigned at build time.
    pub id: usize,
    /// Base name of the inlined source file.
    pub filename: String,
    /// Full text of the non-inlined program.
    #[serde(alias = "noinline_code", default)]
    pub before: String,
    /// Full text of the inlined program.
    #[serde(alias = "inline_code", default)]
    pub after: String,
    /// Newline count of `before`.
    #[serde(alias = "noinline_lines", default)]
    pub before_lines: usize,
    /// Newline count of `after`.
    #[serde(alias = "inline_lines", default)]
    pub after_lines: usize,
    /// Occurrences of the inline marker in `after`.
    pub inlined_ops_count: usize,
    /// Occurrences of the variant marker in `after`.
    pub variant_count: usize,
    /// `after_lines - before_lines`, negative when inlining shrank the program.
    pub line_diff: i64,
    /// RFC 3339 timestamp of record construction.
    pub created_at: String,
}
