//! Table command implementation.

use crate::utils::{load_distribution, symbol_label};
use oxihuff_codec::{CodeTable, HuffmanTree, WeightDistribution};
use serde::Serialize;
use std::path::Path;

/// JSON serializable code table entry.
#[derive(Debug, Serialize)]
struct CodeJson {
    symbol: u8,
    label: String,
    weight: f64,
    length: u8,
    code: String,
}

/// JSON output for a code table.
#[derive(Debug, Serialize)]
struct TableJson {
    weights: String,
    symbols: usize,
    total_weight: f64,
    tree_depth: usize,
    average_length: f64,
    codes: Vec<CodeJson>,
}

pub fn cmd_table(weights: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dist = load_distribution(weights)?;
    let tree = HuffmanTree::build(&dist)?;
    let table = CodeTable::build(&tree)?;
    let codes = collect_codes(&dist, &table);

    let total_weight = dist.total_weight();
    let average_length = if total_weight > 0.0 {
        codes
            .iter()
            .map(|c| c.weight * c.length as f64)
            .sum::<f64>()
            / total_weight
    } else {
        0.0
    };

    if json {
        let output = TableJson {
            weights: weights.display().to_string(),
            symbols: table.len(),
            total_weight,
            tree_depth: tree.depth(),
            average_length,
            codes,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Weights: {}", weights.display());
    println!();
    println!("{:>8} {:>12} {:>6}  Code", "Symbol", "Weight", "Bits");
    println!("{}", "-".repeat(48));
    for c in &codes {
        println!("{:>8} {:>12} {:>6}  {}", c.label, c.weight, c.length, c.code);
    }
    println!("{}", "-".repeat(48));
    println!(
        "{} symbols, max {} bits, {:.3} bits/symbol average",
        table.len(),
        table.max_length(),
        average_length
    );
    Ok(())
}

/// Codes in distribution order, paired with their weights.
fn collect_codes(dist: &WeightDistribution, table: &CodeTable) -> Vec<CodeJson> {
    dist.iter()
        .filter_map(|(symbol, weight)| {
            table.get(symbol).map(|code| CodeJson {
                symbol,
                label: symbol_label(symbol),
                weight,
                length: code.length,
                code: code.to_string(),
            })
        })
        .collect()
}
