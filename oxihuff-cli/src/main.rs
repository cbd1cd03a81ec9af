//! OxiHuff CLI - static Huffman compression
//!
//! Compresses and decompresses files with a prefix code built from a fixed
//! symbol weight distribution. The weights file is never embedded in the
//! compressed output: the same file must be supplied to decompress.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use oxihuff_core::DEFAULT_BUFFER_SIZE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Static Huffman compression with a fixed weight table")]
#[command(long_about = "
OxiHuff compresses byte streams with a Huffman code built from a weights file.
Each weights line is `symbol,weight`; the symbol is one literal byte or 0xNN.

Examples:
  oxihuff train corpus.txt -o weights.csv
  oxihuff table -w weights.csv
  oxihuff compress notes.txt notes.huf -w weights.csv
  oxihuff decompress notes.huf notes.txt -w weights.csv
  oxihuff test notes.huf -w weights.csv
")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Compressed output file
        output: PathBuf,

        /// Weights file (`symbol,weight` per line)
        #[arg(short, long)]
        weights: PathBuf,

        /// I/O buffer size in bytes
        #[arg(short, long, default_value_t = DEFAULT_BUFFER_SIZE)]
        buffer_size: usize,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// Compressed input file
        input: PathBuf,

        /// Restored output file
        output: PathBuf,

        /// Weights file used to compress the input
        #[arg(short, long)]
        weights: PathBuf,

        /// I/O buffer size in bytes
        #[arg(short, long, default_value_t = DEFAULT_BUFFER_SIZE)]
        buffer_size: usize,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Test that a compressed file decodes cleanly
    #[command(alias = "t")]
    Test {
        /// Compressed file to test
        input: PathBuf,

        /// Weights file used to compress the input
        #[arg(short, long)]
        weights: PathBuf,

        /// I/O buffer size in bytes
        #[arg(short, long, default_value_t = DEFAULT_BUFFER_SIZE)]
        buffer_size: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the code table built from a weights file
    Table {
        /// Weights file
        #[arg(short, long)]
        weights: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Build a weights file from the byte frequencies of a sample
    Train {
        /// Sample file
        sample: PathBuf,

        /// Output weights file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            weights,
            buffer_size,
            progress,
            verbose,
        } => commands::cmd_compress(&input, &output, &weights, buffer_size, progress, verbose),
        Commands::Decompress {
            input,
            output,
            weights,
            buffer_size,
            progress,
            verbose,
        } => commands::cmd_decompress(&input, &output, &weights, buffer_size, progress, verbose),
        Commands::Test {
            input,
            weights,
            buffer_size,
            verbose,
        } => commands::cmd_test(&input, &weights, buffer_size, verbose),
        Commands::Table { weights, json } => commands::cmd_table(&weights, json),
        Commands::Train { sample, output } => commands::cmd_train(&sample, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
