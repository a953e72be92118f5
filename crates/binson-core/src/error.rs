//! Error types for Binson decoding.
//!
//! Encoding cannot fail: the value model only admits valid variants, so the
//! error surface is decode-only. Every malformed condition aborts the whole
//! parse with a [`DecodeError`]; no partial tree is ever returned.

use std::str::Utf8Error;

use thiserror::Error;

/// Errors that can occur while decoding a Binson buffer.
///
/// Offsets are byte positions into the input at which the malformed
/// condition was detected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended before a payload or terminator was fully read.
    #[error("input truncated at offset {offset}")]
    Truncated { offset: usize },

    /// A byte where a tag was expected matches no defined tag.
    #[error("unknown tag byte 0x{tag:02x} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    /// Inside an object, the tag introducing a field name was not a text tag.
    #[error("expected a text field name, found tag 0x{tag:02x} at offset {offset}")]
    FieldNameNotText { tag: u8, offset: usize },

    /// The leading tag is well-formed but the top-level value is not an object.
    #[error("top-level value is not an object (leading tag 0x{tag:02x})")]
    RootNotObject { tag: u8 },

    /// Bytes remain after the top-level object's end marker.
    #[error("{remaining} trailing byte(s) after the top-level object")]
    TrailingData { remaining: usize },

    /// A text/bytes length prefix decoded to a negative value.
    #[error("negative payload length {length} at offset {offset}")]
    NegativeLength { length: i64, offset: usize },

    /// A text payload (field name or value) is not valid UTF-8.
    #[error("text at offset {offset} is not valid UTF-8")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: Utf8Error,
    },
}

/// Convenience alias used throughout binson-core.
pub type Result<T> = std::result::Result<T, DecodeError>;
