//! Code table derivation.
//!
//! The table is generated by a depth-first walk from the root: going left
//! appends a 0 bit, going right appends a 1 bit, and every leaf records the
//! accumulated bits as its code. Lookups are direct-indexed by byte value.
//!
//! When the tree is a single leaf, the walk would yield a zero-length code
//! that cannot be decoded back to a symbol count. That symbol is given the
//! one-bit code `0` instead, and the decoder accepts exactly that bit for a
//! leaf root.

use crate::distribution::WeightDistribution;
use crate::tree::{HuffNode, HuffmanTree};
use oxihuff_core::MAX_CODE_BITS;
use oxihuff_core::error::{OxiHuffError, Result};
use std::fmt;

/// A variable-length code: the low `length` bits of `value`, MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitCode {
    /// Code bits, right-aligned.
    pub value: u32,
    /// Number of bits.
    pub length: u8,
}

impl BitCode {
    /// Create a code from its value and length.
    pub fn new(value: u32, length: u8) -> Self {
        Self { value, length }
    }

    /// Whether `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &BitCode) -> bool {
        self.length <= other.length
            && other
                .value
                .checked_shr((other.length - self.length) as u32)
                .unwrap_or(0)
                == self.value
    }
}

impl fmt::Display for BitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in (0..self.length).rev() {
            let digit = if (self.value >> bit) & 1 == 1 { '1' } else { '0' };
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Read-only mapping from byte symbol to its [`BitCode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<BitCode>; 256],
    len: usize,
}

impl CodeTable {
    /// Derive the code table from a tree.
    pub fn build(tree: &HuffmanTree) -> Result<Self> {
        let mut table = Self {
            codes: [None; 256],
            len: 0,
        };

        if let HuffNode::Leaf { symbol, .. } = tree.root() {
            table.insert(*symbol, BitCode::new(0, 1))?;
            return Ok(table);
        }

        let mut stack: Vec<(&HuffNode, u32, usize)> = vec![(tree.root(), 0, 0)];
        while let Some((node, value, length)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    if length > MAX_CODE_BITS {
                        return Err(OxiHuffError::code_too_long(*symbol, length));
                    }
                    table.insert(*symbol, BitCode::new(value, length as u8))?;
                }
                HuffNode::Internal { left, right, .. } => {
                    let shifted = value.wrapping_shl(1);
                    // right pushed first so the left subtree is visited first
                    stack.push((&**right, shifted | 1, length + 1));
                    stack.push((&**left, shifted, length + 1));
                }
            }
        }

        tracing::debug!(
            symbols = table.len,
            max_length = table.max_length(),
            "built code table"
        );

        Ok(table)
    }

    /// Build the tree and table for a distribution in one step.
    pub fn from_distribution(dist: &WeightDistribution) -> Result<Self> {
        if dist.is_empty() {
            return Err(OxiHuffError::EmptyDistribution);
        }
        Self::build(&HuffmanTree::build(dist)?)
    }

    fn insert(&mut self, symbol: u8, code: BitCode) -> Result<()> {
        let slot = &mut self.codes[symbol as usize];
        if slot.is_some() {
            return Err(OxiHuffError::DuplicateSymbol { symbol });
        }
        *slot = Some(code);
        self.len += 1;
        Ok(())
    }

    /// Code for `symbol`, if it is in the table.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<BitCode> {
        self.codes[symbol as usize]
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, BitCode)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|c| (symbol as u8, c)))
    }

    /// Longest code length in bits.
    pub fn max_length(&self) -> u8 {
        self.iter().map(|(_, c)| c.length).max().unwrap_or(0)
    }

    /// Exact number of payload bits needed to encode `input`.
    pub fn encoded_bits(&self, input: &[u8]) -> Result<u64> {
        let mut bits = 0u64;
        for (offset, &byte) in input.iter().enumerate() {
            let code = self
                .get(byte)
                .ok_or_else(|| OxiHuffError::unknown_symbol(byte, offset as u64))?;
            bits += code.length as u64;
        }
        Ok(bits)
    }
}
