//! Error types for the huffpack codec.

use thiserror::Error;

/// Everything that can stop a compression or decompression run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source could not be read.
    #[error("input unavailable: {0}")]
    InputUnavailable(#[source] std::io::Error),

    /// The output sink could not be written.
    #[error("output unavailable: {0}")]
    OutputUnavailable(#[source] std::io::Error),

    /// More nodes were offered to the priority queue than it can hold.
    #[error("priority queue overflow (capacity {capacity})")]
    QueueOverflow { capacity: usize },

    /// There is nothing to build a tree from.
    #[error("empty input")]
    EmptyInput,

    /// The container does not describe a valid tree or body.
    #[error("corrupt container: {0}")]
    CorruptContainer(&'static str),

    /// An input byte has no entry in the code table.
    #[error("no code for byte {0:#04x}")]
    MissingCode(u8),

    /// A leaf sits deeper than a packed code can express.
    #[error("code length {0} exceeds 64 bits")]
    CodeTooLong(usize),
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
