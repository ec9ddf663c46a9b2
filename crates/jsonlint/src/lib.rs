//! Byte-level JSON syntax validator.
//!
//! Given an arbitrary byte buffer, [`validate`] determines whether it holds a
//! single syntactically well-formed JSON document. On success it returns the
//! offset at which scanning completed (the length of the input after trimming
//! surrounding formatting bytes); on failure it returns the offset and kind of
//! the first malformation. No value tree is built and no semantic checks are
//! performed — see [`ErrorKind`] for the full failure taxonomy.
//!
//! ```
//! use jsonlint::{validate, ErrorKind};
//!
//! assert_eq!(validate(br#"{"a":{"b":[1,2,3]}}"#), Ok(19));
//!
//! let err = validate(br#"[1,,2]"#).unwrap_err();
//! assert_eq!((err.kind, err.offset), (ErrorKind::UnexpectedIdentifier, 3));
//! ```
//!
//! Validation is a pure function over the input slice: no allocation, no
//! mutation, no state shared between calls beyond compile-time lookup tables.
//! The same buffer may be validated concurrently from any number of threads.

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod jsonlint;
mod scanner;
mod whitespace;

pub use error::{ErrorKind, LintError};
pub use jsonlint::{validate, validate_str};
pub use scanner::MAX_DEPTH;
