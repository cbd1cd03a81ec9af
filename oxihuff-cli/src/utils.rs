//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxihuff_codec::{FileStats, WeightDistribution};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global tracing subscriber. Logs go to stderr so they never mix
/// with data written to stdout.
pub fn init_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to set tracing subscriber: {}", e);
    }
}

/// Create a progress bar over a byte count with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Load a weights file.
pub fn load_distribution(path: &Path) -> Result<WeightDistribution, Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(path)?);
    let dist = WeightDistribution::from_reader(reader)?;
    tracing::info!(path = %path.display(), symbols = dist.len(), "loaded weights");
    Ok(dist)
}

/// Human-readable rendering of a symbol byte.
pub fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        format!("'{}'", symbol as char)
    } else {
        format!("0x{:02x}", symbol)
    }
}

/// Print input and output sizes with the space saving.
pub fn print_sizes(stats: &FileStats) {
    println!("  Input:  {} bytes", stats.input_bytes);
    println!("  Output: {} bytes", stats.output_bytes);
    println!("  Saved:  {:.1}%", stats.space_savings());
}
