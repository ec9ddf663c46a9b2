//! The scanning engine: value dispatch, container loops, and string
//! boundaries.
//!
//! Overview
//! - [`scan_value`] classifies the byte at the cursor into one of the six JSON
//!   value kinds and delegates to the matching scanner. Containers recurse
//!   back through it, so the dispatcher and the object/array loops are
//!   mutually recursive with an explicit depth counter.
//! - Every scanner takes the cursor by value and returns the cursor one past
//!   the region it consumed, or the offset and kind of the first malformation.
//!   The cursor never moves backwards.
//!
//! Scope
//! - This is a syntax check only. The number scanner accepts any maximal run
//!   of number-class bytes without validating the numeric grammar, and the
//!   string scanner finds the closing quote without validating escape
//!   sequences. Both are deliberate: tightening either changes accepted
//!   inputs and reported offsets.

use bstr::ByteSlice;

use crate::{
    error::{ErrorKind, LintError},
    whitespace::skip_fmt,
};

/// Maximum container nesting depth. Scanning deeper input fails with
/// [`ErrorKind::DepthLimitExceeded`] instead of exhausting the call stack.
pub const MAX_DEPTH: usize = 2048;

const NULL: &[u8] = b"null";
const TRUE: &[u8] = b"true";
const FALSE: &[u8] = b"false";

/// Scans one complete value starting at `offset`.
///
/// `depth` counts the container scans currently on the call path, starting at
/// 1 for the top-level value.
pub(crate) fn scan_value(depth: usize, s: &[u8], offset: usize) -> Result<usize, LintError> {
    let Some(&c) = s.get(offset) else {
        return Err(LintError::new(ErrorKind::UnexpectedEof, offset));
    };
    match c {
        b'n' => scan_literal(s, offset, NULL),
        b'{' => {
            if depth >= MAX_DEPTH {
                return Err(LintError::new(ErrorKind::DepthLimitExceeded, offset));
            }
            scan_object(depth + 1, s, offset)
        }
        b'[' => {
            if depth >= MAX_DEPTH {
                return Err(LintError::new(ErrorKind::DepthLimitExceeded, offset));
            }
            scan_array(depth + 1, s, offset)
        }
        b'"' => scan_string(s, offset + 1),
        c if is_number_lead(c) => scan_number(s, offset),
        b't' => scan_literal(s, offset, TRUE),
        b'f' => scan_literal(s, offset, FALSE),
        _ => Err(LintError::new(ErrorKind::UnexpectedIdentifier, offset)),
    }
}

/// Matches a fixed literal keyword (`null`, `true`, `false`) byte for byte.
///
/// A buffer too short to hold the literal fails with `UnexpectedIdentifier`,
/// not `UnexpectedEof`: the lead byte promised an identifier and the
/// identifier did not materialize.
fn scan_literal(s: &[u8], offset: usize, literal: &[u8]) -> Result<usize, LintError> {
    if s.len() - offset >= literal.len() && &s[offset..offset + literal.len()] == literal {
        Ok(offset + literal.len())
    } else {
        Err(LintError::new(ErrorKind::UnexpectedIdentifier, offset))
    }
}

/// Lead bytes that dispatch to the number scanner.
#[inline]
const fn is_number_lead(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'-' | b'+' | b'e' | b'E')
}

/// Bytes that may continue a number once started.
#[inline]
const fn is_number_byte(c: u8) -> bool {
    is_number_lead(c) || c == b'.'
}

/// Consumes a maximal run of number-class bytes. No grammar validation:
/// `1.2.3` and `--1e+-2` pass. See the module docs.
fn scan_number(s: &[u8], offset: usize) -> Result<usize, LintError> {
    if offset >= s.len() {
        return Err(LintError::new(ErrorKind::UnexpectedEof, offset));
    }
    let mut i = offset;
    while i < s.len() && is_number_byte(s[i]) {
        i += 1;
    }
    Ok(i)
}

/// Finds the end of a string whose body starts at `offset` (one past the
/// opening quote). Returns the offset one past the closing quote.
///
/// A quote whose preceding byte is a backslash triggers a secondary forward
/// search for a quote with a non-backslash predecessor. This single-byte
/// lookback is an approximation of trailing-backslash parity counting: a
/// string ending in an escaped backslash (`"a\\"`) keeps searching past its
/// real terminator. Preserved as-is; exact parity counting would shift
/// reported offsets.
pub(crate) fn scan_string(s: &[u8], offset: usize) -> Result<usize, LintError> {
    debug_assert!(offset > 0, "body start is preceded by the opening quote");
    let Some(rel) = s[offset..].find_byte(b'"') else {
        return Err(LintError::new(ErrorKind::UnexpectedEndOfString, s.len()));
    };
    let mut end = offset + rel;
    if s[end - 1] != b'\\' {
        return Ok(end + 1);
    }
    let mut i = end;
    while i < s.len() {
        match s[i + 1..].find_byte(b'"') {
            None => {
                // No further quote: treat the last position found as the
                // terminator.
                end = s.len() - 1;
                break;
            }
            Some(rel) => {
                i += 1 + rel;
                end = i;
                if s[end - 1] != b'\\' {
                    break;
                }
            }
        }
    }
    Ok(end + 1)
}

/// Skips formatting bytes, failing with `UnexpectedEof` if that exhausts the
/// buffer. Every inter-token gap inside a container goes through this.
fn skip_or_eof(s: &[u8], offset: usize) -> Result<usize, LintError> {
    let (offset, at_end) = skip_fmt(s, offset);
    if at_end {
        Err(LintError::new(ErrorKind::UnexpectedEof, offset))
    } else {
        Ok(offset)
    }
}

/// Drives the `"key": value` comma grammar, entered with `s[offset] == '{'`.
///
/// `}` is accepted in place of the first key (empty object) and after any
/// member, but not after a comma: a trailing comma fails where the next key's
/// quote was required.
fn scan_object(depth: usize, s: &[u8], offset: usize) -> Result<usize, LintError> {
    debug_assert_eq!(s[offset], b'{');
    let mut offset = skip_or_eof(s, offset + 1)?;
    if s[offset] == b'}' {
        return Ok(offset + 1);
    }
    loop {
        if s[offset] != b'"' {
            return Err(LintError::new(ErrorKind::UnexpectedIdentifier, offset));
        }
        offset = scan_string(s, offset + 1)?;
        offset = skip_or_eof(s, offset)?;
        if s[offset] != b':' {
            return Err(LintError::new(ErrorKind::UnexpectedIdentifier, offset));
        }
        offset = skip_or_eof(s, offset + 1)?;
        offset = scan_value(depth, s, offset)?;
        offset = skip_or_eof(s, offset)?;
        match s[offset] {
            b'}' => return Ok(offset + 1),
            b',' => offset = skip_or_eof(s, offset + 1)?,
            _ => return Err(LintError::new(ErrorKind::UnexpectedIdentifier, offset)),
        }
    }
}

/// Same loop shape as [`scan_object`] without keys, entered with
/// `s[offset] == '['`. After a comma the next byte must start a value, so
/// `,]` and `,,` both fail in the dispatcher at the offending byte.
fn scan_array(depth: usize, s: &[u8], offset: usize) -> Result<usize, LintError> {
    debug_assert_eq!(s[offset], b'[');
    let mut offset = skip_or_eof(s, offset + 1)?;
    if s[offset] == b']' {
        return Ok(offset + 1);
    }
    loop {
        offset = scan_value(depth, s, offset)?;
        offset = skip_or_eof(s, offset)?;
        match s[offset] {
            b']' => return Ok(offset + 1),
            b',' => offset = skip_or_eof(s, offset + 1)?,
            _ => return Err(LintError::new(ErrorKind::UnexpectedIdentifier, offset)),
        }
    }
}
