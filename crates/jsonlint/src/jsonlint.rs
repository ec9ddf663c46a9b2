//! Entry points: trim the input, scan one value, reject leftovers.

use crate::{
    error::{ErrorKind, LintError},
    scanner,
    whitespace::trim_fmt,
};

/// Validates that `src` holds exactly one well-formed JSON document,
/// optionally surrounded by formatting bytes.
///
/// On success returns the offset at which scanning completed, which equals
/// the length of the trimmed input. On failure returns the offset and kind of
/// the first malformation; error offsets are relative to the trimmed input.
///
/// # Errors
///
/// See [`ErrorKind`] for the failure taxonomy. Notably an empty buffer (or
/// one holding only formatting bytes) fails with [`ErrorKind::EmptySource`],
/// and a valid value followed by further content fails with
/// [`ErrorKind::UnparsedTail`] at the first leftover byte.
pub fn validate(src: &[u8]) -> Result<usize, LintError> {
    if src.is_empty() {
        return Err(LintError::new(ErrorKind::EmptySource, 0));
    }
    let s = trim_fmt(src);
    if s.is_empty() {
        return Err(LintError::new(ErrorKind::EmptySource, 0));
    }
    let offset = scanner::scan_value(1, s, 0)?;
    if offset < s.len() {
        return Err(LintError::new(ErrorKind::UnparsedTail, offset));
    }
    Ok(offset)
}

/// [`validate`] over the UTF-8 bytes of a string slice. Identical content
/// produces identical results through either entry point.
///
/// # Errors
///
/// Same as [`validate`].
pub fn validate_str(src: &str) -> Result<usize, LintError> {
    validate(src.as_bytes())
}
