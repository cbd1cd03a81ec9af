//! File-level compress and decompress.
//!
//! Output goes to a temporary sibling of the destination and is renamed into
//! place only when the whole operation succeeded. A failed run (unknown
//! symbol, malformed stream, I/O error) removes the temporary file and
//! leaves the destination untouched.

use crate::config::CodecConfig;
use crate::decode::HuffmanDecoder;
use crate::encode::HuffmanEncoder;
use crate::table::CodeTable;
use crate::tree::HuffmanTree;
use oxihuff_core::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Summary of a file-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStats {
    /// Bytes read from the input.
    pub input_bytes: u64,
    /// Bytes written to the output file.
    pub output_bytes: u64,
}

impl FileStats {
    /// Space saved as a percentage of the input size.
    pub fn space_savings(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.output_bytes as f64 / self.input_bytes as f64) * 100.0
    }
}

/// Compress the file at `input` into `output`.
pub fn compress_file(
    input: &Path,
    output: &Path,
    table: &CodeTable,
    config: CodecConfig,
) -> Result<FileStats> {
    let reader = BufReader::new(File::open(input)?);
    compress_to_file(reader, output, table, config)
}

/// Compress everything readable from `input` into the file `output`.
pub fn compress_to_file<R: Read>(
    input: R,
    output: &Path,
    table: &CodeTable,
    config: CodecConfig,
) -> Result<FileStats> {
    write_atomically(output, |file| {
        let stats = HuffmanEncoder::new(table, config).encode(input, file)?;
        Ok(FileStats {
            input_bytes: stats.input_bytes,
            output_bytes: stats.output_bytes,
        })
    })
}

/// Decompress the file at `input` into `output`.
pub fn decompress_file(
    input: &Path,
    output: &Path,
    tree: &HuffmanTree,
    config: CodecConfig,
) -> Result<FileStats> {
    let reader = BufReader::new(File::open(input)?);
    decompress_to_file(reader, output, tree, config)
}

/// Decompress everything readable from `input` into the file `output`.
pub fn decompress_to_file<R: Read>(
    input: R,
    output: &Path,
    tree: &HuffmanTree,
    config: CodecConfig,
) -> Result<FileStats> {
    write_atomically(output, |file| {
        let stats = HuffmanDecoder::new(tree, config).decode(input, file)?;
        Ok(FileStats {
            input_bytes: stats.input_bytes,
            output_bytes: stats.output_bytes,
        })
    })
}

fn write_atomically<T>(output: &Path, op: impl FnOnce(&mut File) -> Result<T>) -> Result<T> {
    let tmp = temp_path(output);
    let mut file = File::create(&tmp)?;

    let result = op(&mut file).and_then(|value| {
        file.sync_all()?;
        Ok(value)
    });
    drop(file);

    let result = result.and_then(|value| {
        fs::rename(&tmp, output)?;
        Ok(value)
    });

    if result.is_err() {
        if let Err(e) = fs::remove_file(&tmp) {
            tracing::warn!(path = %tmp.display(), error = %e, "failed to remove temporary file");
        }
    }

    result
}

fn temp_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.oxihuff-tmp", std::process::id()));
    output.with_file_name(name)
}
