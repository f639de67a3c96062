/// One contiguous inlined span recovered from inlined program text.
///
/// Regions are transient: recomputed on every inspection, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlinedRegion {
    /// 1-based line number of the marker line that opens the region.
    pub line: usize,
    /// Literal text of the region, newline-joined.
    pub code: String,
}
