use thiserror::Error;

/// A validation failure: what went wrong and where.
///
/// The offset is a byte index into the *trimmed* input (leading and trailing
/// formatting bytes are stripped before scanning starts), pointing at the
/// first offending byte — or at end-of-buffer for the EOF-flavored kinds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct LintError {
    /// The kind of malformation encountered.
    pub kind: ErrorKind,
    /// Byte offset at which scanning stopped.
    pub offset: usize,
}

impl LintError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The failure taxonomy. Scanning is fail-fast: the first malformation stops
/// the scan and no recovery is attempted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was empty, or contained only formatting bytes.
    #[error("can't parse empty source")]
    EmptySource,
    /// A complete value was parsed but unconsumed bytes remain after it.
    #[error("unparsed tail")]
    UnparsedTail,
    /// A byte sequence matched no expected literal, delimiter, or token.
    #[error("unexpected identifier")]
    UnexpectedIdentifier,
    /// The buffer ended while more input was structurally required.
    #[error("unexpected end of file")]
    UnexpectedEof,
    /// No closing quote was found for a string.
    #[error("unexpected end of string")]
    UnexpectedEndOfString,
    /// Container nesting exceeded [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}
