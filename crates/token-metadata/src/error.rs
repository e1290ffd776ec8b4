use thiserror::Error;

/// Structural failures while walking the metadata account byte layout.
///
/// A buffer that trips any of these produced no record at all: partial
/// decode is treated as failure, never as a best-effort partial object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("metadata account truncated: needed {needed} more bytes at offset {offset}, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("metadata field `{0}` is not valid UTF-8")]
    InvalidUtf8(&'static str),
}

/// Top-level metadata errors.
///
/// `NotFound` and `Decode` render the same way in a UI ("no usable
/// metadata"), but stay distinct variants so callers can log malformed
/// on-chain data separately from a simply-missing account.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("no metadata account exists at the derived address")]
    NotFound,

    #[error("metadata account could not be decoded: {0}")]
    Decode(#[from] DecodeError),

    #[error("metadata field `{field}` is {len} bytes, maximum is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}
