//! Train command implementation.

use oxihuff_codec::WeightDistribution;
use std::fs;
use std::path::Path;

pub fn cmd_train(sample: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(sample)?;
    let dist = WeightDistribution::from_sample(&data);
    if dist.is_empty() {
        return Err(format!("{} is empty; nothing to train on", sample.display()).into());
    }

    tracing::info!(
        sample = %sample.display(),
        bytes = data.len(),
        symbols = dist.len(),
        "trained weights"
    );

    let text = dist.to_text();
    match output {
        Some(path) => {
            fs::write(path, text)?;
            eprintln!(
                "Wrote {} symbols from {} bytes to {}",
                dist.len(),
                data.len(),
                path.display()
            );
        }
        None => print!("{}", text),
    }
    Ok(())
}
