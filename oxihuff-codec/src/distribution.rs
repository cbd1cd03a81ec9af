//! Symbol weight distributions.
//!
//! A [`WeightDistribution`] lists `(symbol, weight)` pairs in insertion order.
//! The order matters: the priority queue breaks weight ties first-in
//! first-out, so the same pairs pushed in a different order can yield a
//! different (equally optimal) tree.
//!
//! ## Text format
//!
//! One entry per line, `symbol,weight`:
//!
//! ```text
//! a,5
//! b,9
//! 0x0a,2.5
//! ```
//!
//! The symbol field is everything before the last comma. A single byte is
//! taken literally (so `,,1` gives the comma a weight of 1); `0xNN` names a
//! byte by hex value. Blank lines are skipped.

use oxihuff_core::error::{OxiHuffError, Result};
use std::io::BufRead;

/// An ordered symbol → weight mapping with at most one entry per byte.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightDistribution {
    entries: Vec<(u8, f64)>,
    present: [bool; 256],
}

impl WeightDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            present: [false; 256],
        }
    }

    /// Add a symbol with its weight.
    ///
    /// Weights must be finite and non-negative; each symbol may appear once.
    pub fn push(&mut self, symbol: u8, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(OxiHuffError::invalid_weight(symbol, weight));
        }
        if self.present[symbol as usize] {
            return Err(OxiHuffError::DuplicateSymbol { symbol });
        }
        self.present[symbol as usize] = true;
        self.entries.push((symbol, weight));
        Ok(())
    }

    /// Build a distribution from `(symbol, weight)` pairs, keeping their order.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, f64)>,
    {
        let mut dist = Self::new();
        for (symbol, weight) in pairs {
            dist.push(symbol, weight)?;
        }
        Ok(dist)
    }

    /// Count the byte frequencies of a sample.
    ///
    /// Only bytes that occur are included, in ascending byte order.
    pub fn from_sample(sample: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in sample {
            counts[byte as usize] += 1;
        }

        let mut dist = Self::new();
        for (symbol, &count) in counts.iter().enumerate() {
            if count > 0 {
                dist.present[symbol] = true;
                dist.entries.push((symbol as u8, count as f64));
            }
        }
        dist
    }

    /// Parse the `symbol,weight` text format.
    pub fn parse(text: &str) -> Result<Self> {
        let mut dist = Self::new();
        for (index, line) in text.lines().enumerate() {
            dist.parse_line(index + 1, line)?;
        }
        Ok(dist)
    }

    /// Read the `symbol,weight` text format from a buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dist = Self::new();
        for (index, line) in reader.lines().enumerate() {
            dist.parse_line(index + 1, &line?)?;
        }
        Ok(dist)
    }

    fn parse_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            return Ok(());
        }

        let (symbol_field, weight_field) = line
            .rsplit_once(',')
            .ok_or_else(|| OxiHuffError::invalid_distribution(line_no, "missing ',' separator"))?;

        let symbol = parse_symbol(symbol_field).ok_or_else(|| {
            OxiHuffError::invalid_distribution(
                line_no,
                format!("invalid symbol {symbol_field:?} (expected one byte or 0xNN)"),
            )
        })?;

        let weight: f64 = weight_field.trim().parse().map_err(|_| {
            OxiHuffError::invalid_distribution(
                line_no,
                format!("invalid weight {:?}", weight_field.trim()),
            )
        })?;

        self.push(symbol, weight).map_err(|e| match e {
            OxiHuffError::InvalidWeight { .. } | OxiHuffError::DuplicateSymbol { .. } => {
                OxiHuffError::invalid_distribution(line_no, e.to_string())
            }
            other => other,
        })
    }

    /// Render the distribution in the text format accepted by [`parse`](Self::parse).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for &(symbol, weight) in &self.entries {
            if symbol.is_ascii_graphic() && symbol != b',' {
                out.push(symbol as char);
            } else {
                out.push_str(&format!("0x{symbol:02x}"));
            }
            out.push(',');
            out.push_str(&weight.to_string());
            out.push('\n');
        }
        out
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the distribution has no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of `symbol`, if present.
    pub fn weight(&self, symbol: u8) -> Option<f64> {
        if !self.present[symbol as usize] {
            return None;
        }
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, w)| w)
    }

    /// Iterate over `(symbol, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w).sum()
    }
}

impl Default for WeightDistribution {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_symbol(field: &str) -> Option<u8> {
    let bytes = field.as_bytes();
    if bytes.len() == 1 {
        return Some(bytes[0]);
    }
    let hex = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))?;
    u8::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let dist = WeightDistribution::parse("a,5\nb,9\nc,12.5\n").unwrap();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist.weight(b'c'), Some(12.5));
        let symbols: Vec<u8> = dist.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, b"abc");
    }

    #[test]
    fn test_parse_special_symbols() {
        let dist = WeightDistribution::parse(",,1\n0x0a,2\r\n \n , 3\n").unwrap();
        assert_eq!(dist.weight(b','), Some(1.0));
        assert_eq!(dist.weight(b'\n'), Some(2.0));
        assert_eq!(dist.weight(b' '), Some(3.0));
    }

    #[test]
    fn test_parse_errors_carry_line() {
        let err = WeightDistribution::parse("a,1\nb\n").unwrap_err();
        assert!(matches!(err, OxiHuffError::InvalidDistribution { line: 2, .. }));

        let err = WeightDistribution::parse("a,1\nab,2\n").unwrap_err();
        assert!(matches!(err, OxiHuffError::InvalidDistribution { line: 2, .. }));

        let err = WeightDistribution::parse("a,x\n").unwrap_err();
        assert!(matches!(err, OxiHuffError::InvalidDistribution { line: 1, .. }));

        let err = WeightDistribution::parse("a,1\na,2\n").unwrap_err();
        assert!(matches!(err, OxiHuffError::InvalidDistribution { line: 2, .. }));
    }

    #[test]
    fn test_push_rejects_bad_weights() {
        let mut dist = WeightDistribution::new();
        assert!(matches!(
            dist.push(b'a', -1.0),
            Err(OxiHuffError::InvalidWeight { symbol: b'a', .. })
        ));
        assert!(dist.push(b'a', f64::NAN).is_err());
        assert!(dist.push(b'a', f64::INFINITY).is_err());
        assert!(dist.push(b'a', 0.0).is_ok());
        assert!(matches!(
            dist.push(b'a', 1.0),
            Err(OxiHuffError::DuplicateSymbol { symbol: b'a' })
        ));
    }

    #[test]
    fn test_from_sample() {
        let dist = WeightDistribution::from_sample(b"abracadabra");
        assert_eq!(dist.len(), 5);
        assert_eq!(dist.weight(b'a'), Some(5.0));
        assert_eq!(dist.weight(b'r'), Some(2.0));
        assert_eq!(dist.weight(b'z'), None);
        assert_eq!(dist.total_weight(), 11.0);
    }

    #[test]
    fn test_text_roundtrip() {
        let dist =
            WeightDistribution::from_pairs([(b'a', 5.0), (b',', 1.5), (b'\n', 2.0), (0xff, 7.0)])
                .unwrap();
        let text = dist.to_text();
        assert_eq!(WeightDistribution::parse(&text).unwrap(), dist);
    }

    #[test]
    fn test_from_reader() {
        let text = "x,1\ny,2\n";
        let dist = WeightDistribution::from_reader(text.as_bytes()).unwrap();
        assert_eq!(dist.len(), 2);
    }
}
