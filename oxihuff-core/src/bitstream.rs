//! Bit-level I/O over fixed-size buffers.
//!
//! This module provides the two halves of the byte plumbing used by the
//! Huffman codec:
//!
//! - [`MsbBitWriter`] packs variable-length codes most-significant-bit first
//!   into a fixed output buffer and flushes it to any `Write` sink whenever it
//!   fills up.
//! - [`ChunkReader`] reads any `Read` source in bounded chunks and flags the
//!   chunk that holds the final byte of the stream, so a decoder can treat the
//!   padding bits of that byte specially.
//!
//! Memory use of both is bounded by the configured buffer size, independent
//! of the stream length.
//!
//! # Bit Ordering
//!
//! Codes are packed MSB-first: the first bit of a code lands in the highest
//! free bit of the current byte. A trailing partial byte is padded with zero
//! bits on the low side.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{ChunkReader, MsbBitWriter};
//!
//! let mut output = Vec::new();
//! let mut writer = MsbBitWriter::new(&mut output, 16);
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! let final_bits = writer.finish().unwrap();
//!
//! assert_eq!(output, vec![0b1011_1000]);
//! assert_eq!(final_bits, 5);
//!
//! let mut reader = ChunkReader::new(&output[..], 16);
//! let chunk = reader.next_chunk().unwrap().unwrap();
//! assert!(chunk.is_last);
//! assert_eq!(chunk.bytes, &[0b1011_1000]);
//! ```

use crate::MAX_CODE_BITS;
use crate::error::Result;
use std::io::{ErrorKind, Read, Write};

/// MSB-first bit writer over a fixed-size output buffer.
#[derive(Debug)]
pub struct MsbBitWriter<W: Write> {
    /// Underlying sink.
    writer: W,
    /// Output buffer; bytes past `byte_pos` are zero.
    buffer: Vec<u8>,
    /// Index of the byte currently being filled.
    byte_pos: usize,
    /// Number of bits already placed in `buffer[byte_pos]` (0-7).
    bit_pos: u8,
    /// Bytes handed to the sink so far.
    bytes_flushed: u64,
}

impl<W: Write> MsbBitWriter<W> {
    /// Create a new writer with an output buffer of `buffer_size` bytes.
    ///
    /// A size of zero is raised to one byte.
    pub fn new(writer: W, buffer_size: usize) -> Self {
        Self {
            writer,
            buffer: vec![0u8; buffer_size.max(1)],
            byte_pos: 0,
            bit_pos: 0,
            bytes_flushed: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Total number of bits written so far, flushed or not.
    pub fn bits_written(&self) -> u64 {
        (self.bytes_flushed + self.byte_pos as u64) * 8 + self.bit_pos as u64
    }

    /// Append the low `count` bits of `value`, most significant bit first.
    ///
    /// `count` may be zero (nothing is written) and at most 32.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        debug_assert!(
            count as usize <= MAX_CODE_BITS,
            "Cannot write more than 32 bits at once"
        );

        let mut remaining = count;
        while remaining > 0 {
            let free = 8 - self.bit_pos;
            let take = remaining.min(free);
            let shift = remaining - take;
            let bits = (value >> shift) & ((1u32 << take) - 1);

            self.buffer[self.byte_pos] |= (bits << (free - take)) as u8;
            self.bit_pos += take;
            remaining -= take;

            if self.bit_pos == 8 {
                self.bit_pos = 0;
                self.byte_pos += 1;
                if self.byte_pos == self.buffer.len() {
                    self.flush_buffer()?;
                }
            }
        }

        Ok(())
    }

    /// Write all complete bytes to the sink and clear the buffer.
    fn flush_buffer(&mut self) -> Result<()> {
        self.writer.write_all(&self.buffer[..self.byte_pos])?;
        tracing::trace!(bytes = self.byte_pos, "flushed output buffer");
        self.bytes_flushed += self.byte_pos as u64;
        self.buffer[..self.byte_pos].fill(0);
        self.byte_pos = 0;
        Ok(())
    }

    /// Flush everything including a zero-padded partial byte.
    ///
    /// Returns the number of valid bits in the final byte written, where `0`
    /// means the final byte is full (or nothing was written at all).
    pub fn finish(mut self) -> Result<u8> {
        let final_bits = self.bit_pos;
        if self.bit_pos > 0 {
            self.byte_pos += 1;
            self.bit_pos = 0;
        }
        self.flush_buffer()?;
        self.writer.flush()?;
        Ok(final_bits)
    }
}

/// One chunk handed out by a [`ChunkReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The bytes of this chunk (never empty).
    pub bytes: &'a [u8],
    /// Whether `bytes` ends with the final byte of the stream.
    pub is_last: bool,
    /// Stream offset of `bytes[0]`.
    pub offset: u64,
}

/// Bounded chunk reader with end-of-input lookahead.
///
/// The last byte of every full read is held back until the next read proves
/// whether more input follows, which is how the final chunk is detected
/// without knowing the stream length up front.
#[derive(Debug)]
pub struct ChunkReader<R: Read> {
    /// Underlying source.
    reader: R,
    /// Read buffer, one byte larger than the chunk size.
    buffer: Vec<u8>,
    /// Byte held back from the previous chunk.
    carried: Option<u8>,
    /// Set once the source reported end of input.
    finished: bool,
    /// Stream offset of the next byte to hand out.
    offset: u64,
}

impl<R: Read> ChunkReader<R> {
    /// Create a chunk reader yielding at most `chunk_size` bytes per chunk.
    ///
    /// A size of zero is raised to one byte.
    pub fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buffer: vec![0u8; chunk_size.max(1) + 1],
            carried: None,
            finished: false,
            offset: 0,
        }
    }

    /// Number of bytes handed out so far.
    pub fn bytes_read(&self) -> u64 {
        self.offset
    }

    /// Read the next chunk, or `None` once the stream is exhausted.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk<'_>>> {
        if self.finished {
            return Ok(None);
        }

        let mut filled = 0;
        if let Some(byte) = self.carried.take() {
            self.buffer[0] = byte;
            filled = 1;
        }

        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => {
                    self.finished = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        let offset = self.offset;
        let len = if self.finished {
            filled
        } else {
            self.carried = Some(self.buffer[filled - 1]);
            filled - 1
        };

        if len == 0 {
            return Ok(None);
        }

        self.offset += len as u64;
        Ok(Some(Chunk {
            bytes: &self.buffer[..len],
            is_last: self.finished,
            offset,
        }))
    }
}
