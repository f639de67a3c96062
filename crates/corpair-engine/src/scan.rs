use corpair_types::InlinedRegion;
use corpair_types::convention::{ALLOC_CALL, INLINED_MARKER};

/// Recover the inlined regions of an inline-expanded program.
///
/// Line-oriented heuristic, kept bit-for-bit compatible with the datasets
/// already in circulation. A region opens on a line containing the inline
/// marker and extends while following lines are non-empty, not comment-led
/// (`//` or `/*`), and free of the allocation call. The first line failing
/// those checks closes the region (exclusive) and is re-examined as a
/// potential next marker, so back-to-back regions are both found. The
/// boundary can over- or under-shoot the real operator body; callers treat
/// the result as a preview, not a parse.
pub fn find_inlined_regions(code: &str) -> Vec<InlinedRegion> {
    let lines: Vec<&str> = code.split('\n').collect();
    let mut regions = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].contains(INLINED_MARKER) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        while end < lines.len()
            && !lines[end].trim_start().starts_with("//")
            && !lines[end].contains(ALLOC_CALL)
        {
            let trimmed = lines[end].trim();
            if trimmed.is_empty() || trimmed.starts_with("/*") {
                break;
            }
            end += 1;
        }

        regions.push(InlinedRegion {
            line: start + 1,
            code: lines[start..end].join("\n"),
        });
        i = end;
    }

    regions
}
