//! # OxiHuff Core
//!
//! Core components for the OxiHuff static Huffman coder.
//!
//! This crate provides the building blocks shared by the codec and the CLI:
//!
//! - [`bitstream`]: MSB-first bit packing and chunked reading over bounded buffers
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     oxihuff CLI, file-level compress/decompress         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Distribution → queue → tree → code table → coders   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     MsbBitWriter, ChunkReader, OxiHuffError             │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{Chunk, ChunkReader, MsbBitWriter};
pub use error::{OxiHuffError, Result};

/// Maximum code length in bits; code values are stored in a `u32`.
pub const MAX_CODE_BITS: usize = 32;

/// Default size in bytes of the encoder and decoder I/O buffers.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Length in bytes of the compressed artifact header.
pub const HEADER_LEN: usize = 1;
