use std::io;

use thiserror::Error;

/// Everything that can abort reading a tag.
///
/// A stream that does not start with an ID3v2 tag is not an error: the
/// readers return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),

    #[error("ID3v2.{0} is not supported")]
    UnsupportedVersion(u8),

    #[error("Unrecognized frame ID: {id}, size={size}")]
    UnrecognizedFrame { id: String, size: u32 },

    #[error("Malformed text: {0}")]
    MalformedText(String),

    #[error("Unsupported text encoding {0:#04x}")]
    UnsupportedEncoding(u8),

    #[error("Stream ended early: expected {expected} bytes, found {found}")]
    TruncatedStream { expected: u64, found: u64 },

    #[error("{0:#x} does not fit in a 28 bit synch-safe integer")]
    InvalidSize(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
