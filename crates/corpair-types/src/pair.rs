use std::path::PathBuf;

/// A matched before/after pair on disk.
///
/// `inline_path` is the marker-bearing member; `noinline_path` carries the
/// `_noinline` filename tag. Both existed when the pair was located, but
/// either may vanish before it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPair {
    pub inline_path: PathBuf,
    pub noinline_path: PathBuf,
}

impl ArtifactPair {
    /// Base name of the inlined member, used as the record key.
    pub fn filename(&self) -> String {
        self.inline_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_inline_base_name() {
        let pair = ArtifactPair {
            inline_path: PathBuf::from("generated/prog_000.c"),
            noinline_path: PathBuf::from("generated/prog_000_noinline.c"),
        };
        assert_eq!(pair.filename(), "prog_000.c");
    }
}
