//! # OxiHuff Codec
//!
//! Pure Rust static Huffman compression.
//!
//! Given a fixed symbol weight distribution, this crate builds an optimal
//! prefix code and streams arbitrary byte data through bit-level encode and
//! decode transforms with bounded memory.
//!
//! ## Pipeline
//!
//! ```text
//! WeightDistribution → WeightedQueue → HuffmanTree → CodeTable → HuffmanEncoder
//!                                           │
//!                                           └────────────────→ HuffmanDecoder
//! ```
//!
//! The code table is never stored in the compressed artifact: both sides
//! rebuild it from the same distribution.
//!
//! ## Artifact Format
//!
//! - byte 0: number of valid bits in the final data byte (`0` = all 8, or no data)
//! - bytes 1..N: codes packed most-significant-bit first, zero padded
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_codec::{WeightDistribution, build_code_table, build_tree, compress, decompress};
//!
//! let dist = WeightDistribution::from_pairs([
//!     (b'a', 5.0), (b'b', 9.0), (b'c', 12.0),
//!     (b'd', 13.0), (b'e', 16.0), (b'f', 45.0),
//! ]).unwrap();
//!
//! let tree = build_tree(&dist).unwrap();
//! let table = build_code_table(&tree).unwrap();
//!
//! let packed = compress(b"aab", &table).unwrap();
//! assert_eq!(packed, vec![4, 0xCC, 0xD0]);
//!
//! let unpacked = decompress(&packed, &tree).unwrap();
//! assert_eq!(unpacked, b"aab");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod decode;
pub mod distribution;
pub mod encode;
pub mod file;
pub mod queue;
pub mod table;
pub mod tree;

pub use config::CodecConfig;
pub use decode::{DecodeStats, HuffmanDecoder};
pub use distribution::WeightDistribution;
pub use encode::{EncodeStats, HuffmanEncoder};
pub use file::{FileStats, compress_file, compress_to_file, decompress_file, decompress_to_file};
pub use oxihuff_core::error::{OxiHuffError, Result};
pub use queue::WeightedQueue;
pub use table::{BitCode, CodeTable};
pub use tree::{HuffNode, HuffmanTree};

use std::io::{Cursor, Read, Seek, Write};

/// Build the Huffman tree for a distribution.
///
/// Fails with [`OxiHuffError::EmptyDistribution`] when `dist` has no symbols.
pub fn build_tree(dist: &WeightDistribution) -> Result<HuffmanTree> {
    HuffmanTree::build(dist)
}

/// Derive the code table of a tree.
pub fn build_code_table(tree: &HuffmanTree) -> Result<CodeTable> {
    CodeTable::build(tree)
}

/// Encode `input` into a seekable `output` with the default buffer size.
pub fn encode<R, W>(input: R, table: &CodeTable, output: &mut W) -> Result<EncodeStats>
where
    R: Read,
    W: Write + Seek,
{
    encode_with(input, table, CodecConfig::DEFAULT, output)
}

/// Encode `input` into a seekable `output` with an explicit configuration.
pub fn encode_with<R, W>(
    input: R,
    table: &CodeTable,
    config: CodecConfig,
    output: &mut W,
) -> Result<EncodeStats>
where
    R: Read,
    W: Write + Seek,
{
    HuffmanEncoder::new(table, config).encode(input, output)
}

/// Decode `input` into `output` with the default buffer size.
pub fn decode<R, W>(input: R, tree: &HuffmanTree, output: W) -> Result<DecodeStats>
where
    R: Read,
    W: Write,
{
    decode_with(input, tree, CodecConfig::DEFAULT, output)
}

/// Decode `input` into `output` with an explicit configuration.
pub fn decode_with<R, W>(
    input: R,
    tree: &HuffmanTree,
    config: CodecConfig,
    output: W,
) -> Result<DecodeStats>
where
    R: Read,
    W: Write,
{
    HuffmanDecoder::new(tree, config).decode(input, output)
}

/// Compress a byte slice into a new artifact.
///
/// # Example
///
/// ```rust
/// use oxihuff_codec::{CodeTable, OxiHuffError, WeightDistribution, compress};
///
/// let dist = WeightDistribution::from_sample(b"abc");
/// let table = CodeTable::from_distribution(&dist).unwrap();
///
/// let err = compress(b"abd", &table).unwrap_err();
/// assert!(matches!(err, OxiHuffError::UnknownSymbol { symbol: b'd', offset: 2 }));
/// ```
pub fn compress(data: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut output = Cursor::new(Vec::with_capacity(data.len() / 2 + 1));
    encode(data, table, &mut output)?;
    Ok(output.into_inner())
}

/// Decompress a complete artifact held in memory.
pub fn decompress(data: &[u8], tree: &HuffmanTree) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    decode(data, tree, &mut output)?;
    Ok(output)
}
