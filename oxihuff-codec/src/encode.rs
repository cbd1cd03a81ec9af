//! Streaming Huffman encoder.
//!
//! Input is read in fixed-size chunks and every byte is replaced by its code
//! from the [`CodeTable`], packed MSB-first into a fixed output buffer. The
//! artifact layout is:
//!
//! ```text
//! +--------+---------------------------------------+
//! | header | packed codes, MSB-first, zero padded  |
//! +--------+---------------------------------------+
//!   1 byte   N bytes
//! ```
//!
//! The header holds the number of valid bits in the last data byte, with `0`
//! meaning the last byte is full (or there is no data). It is only known at
//! the end, so a placeholder is written first and the sink is rewound to
//! patch it, which is why the sink must be seekable.

use crate::config::CodecConfig;
use crate::table::CodeTable;
use oxihuff_core::MsbBitWriter;
use oxihuff_core::error::{OxiHuffError, Result};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};

/// Summary of one encode operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeStats {
    /// Bytes read from the input.
    pub input_bytes: u64,
    /// Bytes written to the output, header included.
    pub output_bytes: u64,
    /// Header value: valid bits in the final data byte (0 = full).
    pub final_bits: u8,
}

/// Huffman encoder bound to a code table.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanEncoder<'a> {
    table: &'a CodeTable,
    config: CodecConfig,
}

impl<'a> HuffmanEncoder<'a> {
    /// Create an encoder using `table`.
    pub fn new(table: &'a CodeTable, config: CodecConfig) -> Self {
        Self { table, config }
    }

    /// Encode all of `input` into `output`.
    ///
    /// On error the output holds an unspecified partial artifact.
    pub fn encode<R, W>(&self, mut input: R, output: &mut W) -> Result<EncodeStats>
    where
        R: Read,
        W: Write + Seek,
    {
        let start = output
            .stream_position()
            .map_err(|_| OxiHuffError::NonSeekableOutput)?;

        // Placeholder for the final-bits header
        output.write_all(&[0])?;

        let mut writer = MsbBitWriter::new(&mut *output, self.config.buffer_size);
        let mut buffer = vec![0u8; self.config.buffer_size.max(1)];
        let mut input_bytes = 0u64;

        loop {
            let n = match input.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            for (i, &byte) in buffer[..n].iter().enumerate() {
                let code = self
                    .table
                    .get(byte)
                    .ok_or_else(|| OxiHuffError::unknown_symbol(byte, input_bytes + i as u64))?;
                writer.write_bits(code.value, code.length)?;
            }
            input_bytes += n as u64;
        }

        let payload_bits = writer.bits_written();
        let final_bits = writer.finish()?;

        let end = output
            .stream_position()
            .map_err(|_| OxiHuffError::NonSeekableOutput)?;
        output
            .seek(SeekFrom::Start(start))
            .map_err(|_| OxiHuffError::NonSeekableOutput)?;
        output.write_all(&[final_bits])?;
        output
            .seek(SeekFrom::Start(end))
            .map_err(|_| OxiHuffError::NonSeekableOutput)?;
        output.flush()?;

        let stats = EncodeStats {
            input_bytes,
            output_bytes: end - start,
            final_bits,
        };

        tracing::debug!(
            input_bytes = stats.input_bytes,
            output_bytes = stats.output_bytes,
            payload_bits,
            final_bits,
            "encoded stream"
        );

        Ok(stats)
    }
}
