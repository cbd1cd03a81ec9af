//! Error types for OxiHuff operations.
//!
//! Every failure of the codec is fatal to the operation that raised it and is
//! surfaced as a distinct variant, so callers can match on the exact cause
//! instead of inspecting messages.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A tree or code table was requested from a distribution with no symbols.
    #[error("Empty distribution: at least one symbol is required")]
    EmptyDistribution,

    /// The encoder met a byte that has no code in the table.
    #[error("Unknown symbol 0x{symbol:02x} at input offset {offset}")]
    UnknownSymbol {
        /// The byte value without a code.
        symbol: u8,
        /// Byte offset in the input stream.
        offset: u64,
    },

    /// The output sink cannot seek back to rewrite the header byte.
    #[error("Output is not seekable: cannot rewrite the padding header")]
    NonSeekableOutput,

    /// The compressed stream is truncated or does not decode to whole symbols.
    #[error("Truncated or malformed stream at offset {offset}: {message}")]
    TruncatedOrMalformedStream {
        /// Byte offset in the compressed stream (header included).
        offset: u64,
        /// Description of the problem.
        message: String,
    },

    /// A weight is negative, NaN or infinite.
    #[error("Invalid weight {weight} for symbol 0x{symbol:02x}")]
    InvalidWeight {
        /// Symbol the weight belongs to.
        symbol: u8,
        /// The rejected weight.
        weight: f64,
    },

    /// The same symbol appears twice in a distribution.
    #[error("Duplicate symbol 0x{symbol:02x} in distribution")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: u8,
    },

    /// A line of a textual weight distribution could not be parsed.
    #[error("Invalid distribution at line {line}: {message}")]
    InvalidDistribution {
        /// 1-based line number.
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// The tree is deeper than a code value can hold.
    #[error("Code for symbol 0x{symbol:02x} needs {length} bits (max {max})", max = crate::MAX_CODE_BITS)]
    CodeTooLong {
        /// Symbol whose code overflows.
        symbol: u8,
        /// Required code length in bits.
        length: usize,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: u8, offset: u64) -> Self {
        Self::UnknownSymbol { symbol, offset }
    }

    /// Create a truncated or malformed stream error.
    pub fn malformed(offset: u64, message: impl Into<String>) -> Self {
        Self::TruncatedOrMalformedStream {
            offset,
            message: message.into(),
        }
    }

    /// Create an invalid weight error.
    pub fn invalid_weight(symbol: u8, weight: f64) -> Self {
        Self::InvalidWeight { symbol, weight }
    }

    /// Create an invalid distribution error.
    pub fn invalid_distribution(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            line,
            message: message.into(),
        }
    }

    /// Create a code too long error.
    pub fn code_too_long(symbol: u8, length: usize) -> Self {
        Self::CodeTooLong { symbol, length }
    }
}
