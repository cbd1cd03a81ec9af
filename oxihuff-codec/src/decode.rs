//! Streaming Huffman decoder.
//!
//! The decoder walks the tree one bit at a time: 0 goes left, 1 goes right,
//! and reaching a leaf emits its symbol and restarts at the root. Only the
//! leading `header` bits of the last data byte are consumed (all 8 when the
//! header is 0), so padding never turns into a spurious symbol.
//!
//! A tree whose root is a leaf decodes every valid `0` bit to that symbol,
//! matching the one-bit code the code table assigns in that case.

use crate::config::CodecConfig;
use crate::tree::{HuffNode, HuffmanTree};
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::{ChunkReader, HEADER_LEN};
use std::io::{ErrorKind, Read, Write};

/// Summary of one decode operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeStats {
    /// Bytes read from the input, header included.
    pub input_bytes: u64,
    /// Bytes written to the output.
    pub output_bytes: u64,
}

/// Fixed-size output buffer in front of a writer.
struct SymbolSink<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    capacity: usize,
    written: u64,
}

impl<W: Write> SymbolSink<W> {
    fn new(writer: W, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            writer,
            buffer: Vec::with_capacity(capacity),
            capacity,
            written: 0,
        }
    }

    #[inline]
    fn push(&mut self, symbol: u8) -> Result<()> {
        self.buffer.push(symbol);
        if self.buffer.len() == self.capacity {
            self.flush_buffer()?;
        }
        Ok(())
    }

    fn flush_buffer(&mut self) -> Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.written += self.buffer.len() as u64;
        self.buffer.clear();
        Ok(())
    }

    fn finish(mut self) -> Result<u64> {
        self.flush_buffer()?;
        self.writer.flush()?;
        Ok(self.written)
    }
}

/// Huffman decoder bound to a tree.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
    config: CodecConfig,
}

impl<'a> HuffmanDecoder<'a> {
    /// Create a decoder walking `tree`.
    pub fn new(tree: &'a HuffmanTree, config: CodecConfig) -> Self {
        Self { tree, config }
    }

    /// Decode a complete artifact from `input` into `output`.
    pub fn decode<R, W>(&self, mut input: R, output: W) -> Result<DecodeStats>
    where
        R: Read,
        W: Write,
    {
        let mut header = [0u8; HEADER_LEN];
        match input.read_exact(&mut header) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(OxiHuffError::malformed(0, "missing header byte"));
            }
            Err(e) => return Err(e.into()),
        }

        let header = header[0];
        if header > 7 {
            return Err(OxiHuffError::malformed(
                0,
                format!("header declares {header} valid bits (max 7)"),
            ));
        }
        let final_bits = if header == 0 { 8 } else { header };

        let root = self.tree.root();
        let leaf_root = root.symbol();
        let mut cursor = root;
        // Bits consumed since the last emitted symbol.
        let mut pending = 0u32;

        let mut sink = SymbolSink::new(output, self.config.buffer_size);
        let mut chunks = ChunkReader::new(input, self.config.buffer_size);

        while let Some(chunk) = chunks.next_chunk()? {
            let last_index = chunk.bytes.len() - 1;
            for (i, &byte) in chunk.bytes.iter().enumerate() {
                let offset = HEADER_LEN as u64 + chunk.offset + i as u64;
                let bits = if chunk.is_last && i == last_index {
                    final_bits
                } else {
                    8
                };

                for b in 0..bits {
                    let bit = (byte & (0x80 >> b)) != 0;

                    if let Some(symbol) = leaf_root {
                        if bit {
                            return Err(OxiHuffError::malformed(
                                offset,
                                "1 bit in a single-symbol stream",
                            ));
                        }
                        sink.push(symbol)?;
                        continue;
                    }

                    cursor = match cursor.child(bit) {
                        Some(next) => next,
                        None => return Err(OxiHuffError::malformed(offset, "cursor at a leaf")),
                    };
                    pending += 1;

                    if let HuffNode::Leaf { symbol, .. } = cursor {
                        sink.push(*symbol)?;
                        cursor = root;
                        pending = 0;
                    }
                }
            }
        }

        let input_bytes = HEADER_LEN as u64 + chunks.bytes_read();

        if input_bytes == HEADER_LEN as u64 && header != 0 {
            return Err(OxiHuffError::malformed(
                HEADER_LEN as u64,
                format!("header declares {header} valid bits but no data follows"),
            ));
        }
        if pending > 0 {
            return Err(OxiHuffError::malformed(
                input_bytes,
                format!("stream ends {pending} bits into an unfinished code"),
            ));
        }

        let output_bytes = sink.finish()?;

        tracing::debug!(input_bytes, output_bytes, final_bits, "decoded stream");

        Ok(DecodeStats {
            input_bytes,
            output_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::WeightDistribution;

    fn classic_tree() -> HuffmanTree {
        let dist = WeightDistribution::from_pairs([
            (b'a', 5.0),
            (b'b', 9.0),
            (b'c', 12.0),
            (b'd', 13.0),
            (b'e', 16.0),
            (b'f', 45.0),
        ])
        .unwrap();
        HuffmanTree::build(&dist).unwrap()
    }

    fn decode_vec(tree: &HuffmanTree, input: &[u8], buffer_size: usize) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        HuffmanDecoder::new(tree, CodecConfig::new(buffer_size)).decode(input, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_decode_aab() {
        let out = decode_vec(&classic_tree(), &[4, 0xCC, 0xD0], 1024).unwrap();
        assert_eq!(out, b"aab");
    }

    #[test]
    fn test_header_zero_means_full_byte() {
        let out = decode_vec(&classic_tree(), &[0, 0x00], 1024).unwrap();
        assert_eq!(out, b"ffffffff");
    }

    #[test]
    fn test_padding_is_ignored() {
        // 0xD0 padding bits would decode as extra f symbols if consumed
        let out = decode_vec(&classic_tree(), &[4, 0xCC, 0xD0], 1).unwrap();
        assert_eq!(out, b"aab");
    }

    #[test]
    fn test_header_only_is_empty() {
        let out = decode_vec(&classic_tree(), &[0], 1024).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_header() {
        let err = decode_vec(&classic_tree(), &[], 1024).unwrap_err();
        assert!(matches!(
            err,
            OxiHuffError::TruncatedOrMalformedStream { offset: 0, .. }
        ));
    }

    #[test]
    fn test_header_out_of_range() {
        let err = decode_vec(&classic_tree(), &[8, 0x00], 1024).unwrap_err();
        assert!(matches!(err, OxiHuffError::TruncatedOrMalformedStream { .. }));
    }

    #[test]
    fn test_header_without_data() {
        let err = decode_vec(&classic_tree(), &[3], 1024).unwrap_err();
        assert!(matches!(err, OxiHuffError::TruncatedOrMalformedStream { .. }));
    }

    #[test]
    fn test_unfinished_code() {
        // "11" is the start of a, b or e but not a full code
        let err = decode_vec(&classic_tree(), &[2, 0b1100_0000], 1024).unwrap_err();
        assert!(matches!(
            err,
            OxiHuffError::TruncatedOrMalformedStream { offset: 2, .. }
        ));
    }

    #[test]
    fn test_single_symbol_tree() {
        let dist = WeightDistribution::from_pairs([(b'q', 1.0)]).unwrap();
        let tree = HuffmanTree::build(&dist).unwrap();

        let out = decode_vec(&tree, &[3, 0x00], 1024).unwrap();
        assert_eq!(out, b"qqq");

        let err = decode_vec(&tree, &[3, 0b0100_0000], 1024).unwrap_err();
        assert!(matches!(err, OxiHuffError::TruncatedOrMalformedStream { .. }));
    }

    #[test]
    fn test_zero_buffer_size() {
        let tree = classic_tree();
        let mut out = Vec::new();
        HuffmanDecoder::new(&tree, CodecConfig { buffer_size: 0 })
            .decode(&[4u8, 0xCC, 0xD0][..], &mut out)
            .unwrap();
        assert_eq!(out, b"aab");
    }

    #[test]
    fn test_sink_flushes_with_zero_capacity() {
        let mut sink = SymbolSink::new(Vec::new(), 0);
        sink.push(b'x').unwrap();
        sink.push(b'y').unwrap();
        assert_eq!(sink.writer, b"xy");
        assert!(sink.buffer.is_empty());
        assert_eq!(sink.finish().unwrap(), 2);
    }

    #[test]
    fn test_stats() {
        let tree = classic_tree();
        let mut out = Vec::new();
        let stats = HuffmanDecoder::new(&tree, CodecConfig::DEFAULT)
            .decode(&[4u8, 0xCC, 0xD0][..], &mut out)
            .unwrap();
        assert_eq!(
            stats,
            DecodeStats {
                input_bytes: 3,
                output_bytes: 3
            }
        );
    }
}
