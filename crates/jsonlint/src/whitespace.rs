//! Formatting-byte handling: classification, cursor skipping, and trimming.
//!
//! JSON permits exactly four insignificant bytes between grammar tokens:
//! space, horizontal tab, line feed, and carriage return. The scalar skip loop
//! classifies one byte at a time through a 256-entry table; for long runs a
//! word-at-a-time fast path compares whole 8-byte chunks against the two
//! patterns that dominate pretty-printed output (all spaces, and a newline
//! followed by indentation spaces) before handing the remainder back to the
//! scalar loop. The fast path never changes the stopping offset and never
//! reads past the end of the buffer.

/// Minimum number of remaining bytes before the word-at-a-time path is tried.
/// Short tails are not worth the extra comparisons.
const FAST_PATH_THRESHOLD: usize = 512;

const ALL_SPACES: u64 = u64::from_le_bytes(*b"        ");
const NEWLINE_SPACES: u64 = u64::from_le_bytes(*b"\n       ");

const fn build_table() -> [bool; 256] {
    let mut table = [false; 256];
    table[b' ' as usize] = true;
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[b'\r' as usize] = true;
    table
}

static FMT_TABLE: [bool; 256] = build_table();

#[inline]
pub(crate) fn is_fmt(c: u8) -> bool {
    FMT_TABLE[c as usize]
}

/// Advances `offset` past formatting bytes, stopping at the first
/// non-formatting byte or at end-of-buffer (second tuple field is `true` in
/// the latter case).
#[inline]
pub(crate) fn skip_fmt(s: &[u8], mut offset: usize) -> (usize, bool) {
    if s.len() - offset > FAST_PATH_THRESHOLD {
        offset = skip_fmt_words(s, offset);
    }
    while offset < s.len() {
        if !is_fmt(s[offset]) {
            return (offset, false);
        }
        offset += 1;
    }
    (offset, true)
}

/// Word-at-a-time prefix skip. Only consumes full 8-byte chunks made entirely
/// of formatting bytes, so the scalar loop observes the exact same stopping
/// byte it would have without this path.
fn skip_fmt_words(s: &[u8], mut offset: usize) -> usize {
    while offset + 8 <= s.len() {
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&s[offset..offset + 8]);
        let word = u64::from_le_bytes(chunk);
        if word != ALL_SPACES && word != NEWLINE_SPACES {
            break;
        }
        offset += 8;
    }
    offset
}

/// Symmetric trim of leading and trailing formatting bytes over the whole
/// buffer. This runs once before scanning, so trailing formatting bytes are
/// never misreported as an unparsed tail.
pub(crate) fn trim_fmt(s: &[u8]) -> &[u8] {
    let mut start = 0;
    let mut end = s.len();
    while start < end && is_fmt(s[start]) {
        start += 1;
    }
    while end > start && is_fmt(s[end - 1]) {
        end -= 1;
    }
    &s[start..end]
}
