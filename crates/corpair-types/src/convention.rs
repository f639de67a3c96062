//! Textual conventions emitted by the program generator.
//!
//! These are opaque literals, not C grammar. The generator tags every
//! inline-expanded operator body with [`INLINED_MARKER`] and every variant
//! selection with a comment starting with [`VARIANT_MARKER`]. Pairing relies
//! purely on the filename suffix, never on file contents.

/// Annotation placed at the start of every inline-expanded operator body.
pub const INLINED_MARKER: &str = "/* INLINED */";

/// Prefix of the comment the generator emits when it picks an
/// implementation variant, e.g. `/* variant 2 */`.
pub const VARIANT_MARKER: &str = "/* variant";

/// Filename ending of the non-inlined member of a pair.
pub const NOINLINE_SUFFIX: &str = "_noinline.c";

/// Filename ending of the inlined member, shared by both names once the
/// `_noinline` tag is stripped.
pub const INLINE_SUFFIX: &str = ".c";

/// Allocation call that closes an inlined region during scanning.
pub const ALLOC_CALL: &str = "malloc";
