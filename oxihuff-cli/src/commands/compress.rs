//! Compress and decompress command implementations.

use crate::utils::{create_progress_bar, load_distribution, print_sizes};
use oxihuff_codec::{
    CodeTable, CodecConfig, FileStats, HuffmanTree, compress_to_file, decompress_to_file,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    weights: &Path,
    buffer_size: usize,
    progress: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dist = load_distribution(weights)?;
    let table = CodeTable::from_distribution(&dist)?;
    let config = CodecConfig::new(buffer_size);

    let file = File::open(input)?;
    let pb = create_progress_bar(file.metadata()?.len(), progress);
    let reader = pb.wrap_read(BufReader::new(file));

    let stats = compress_to_file(reader, output, &table, config);
    pb.finish_and_clear();
    let stats = stats?;

    if verbose {
        println!("Compressed {} -> {}", input.display(), output.display());
        report(&stats);
    }
    Ok(())
}

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    weights: &Path,
    buffer_size: usize,
    progress: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dist = load_distribution(weights)?;
    let tree = HuffmanTree::build(&dist)?;
    let config = CodecConfig::new(buffer_size);

    let file = File::open(input)?;
    let pb = create_progress_bar(file.metadata()?.len(), progress);
    let reader = pb.wrap_read(BufReader::new(file));

    let stats = decompress_to_file(reader, output, &tree, config);
    pb.finish_and_clear();
    let stats = stats?;

    if verbose {
        println!("Decompressed {} -> {}", input.display(), output.display());
        println!("  Input:  {} bytes", stats.input_bytes);
        println!("  Output: {} bytes", stats.output_bytes);
    }
    Ok(())
}

fn report(stats: &FileStats) {
    print_sizes(stats);
    if stats.input_bytes > 0 {
        println!(
            "  Ratio:  {:.3} bits/byte",
            (stats.output_bytes * 8) as f64 / stats.input_bytes as f64
        );
    }
}
