//! Huffman tree construction.
//!
//! The builder drains a [`WeightedQueue`]: while more than one node remains
//! it pops the two lightest nodes `a` then `b` and pushes back an internal
//! node with `a` as left child and `b` as right child. The left child is
//! always the first-popped node, which fixes the direction of every 0/1 bit.
//!
//! A single-symbol distribution produces a tree whose root is itself a leaf.

use crate::distribution::WeightDistribution;
use crate::queue::WeightedQueue;
use oxihuff_core::error::{OxiHuffError, Result};

/// A node of the Huffman tree.
///
/// Internal nodes own their two children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum HuffNode {
    /// A symbol with its weight.
    Leaf {
        /// Byte value.
        symbol: u8,
        /// Weight from the distribution.
        weight: f64,
    },
    /// Aggregate of two subtrees; weight is the sum of the children.
    Internal {
        /// Sum of both children's weights.
        weight: f64,
        /// Subtree reached by a 0 bit.
        left: Box<HuffNode>,
        /// Subtree reached by a 1 bit.
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    /// Create a leaf node.
    pub fn leaf(symbol: u8, weight: f64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Merge two subtrees under a new internal node.
    pub fn merge(left: HuffNode, right: HuffNode) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Weight of this node.
    pub fn weight(&self) -> f64 {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// Symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Child selected by `bit` (`false` = left), `None` for leaves.
    #[inline]
    pub fn child(&self, bit: bool) -> Option<&HuffNode> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some(if bit { &**right } else { &**left }),
        }
    }
}

/// An immutable Huffman tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree {
    root: HuffNode,
    symbol_count: usize,
}

impl HuffmanTree {
    /// Build the tree for a weight distribution.
    pub fn build(dist: &WeightDistribution) -> Result<Self> {
        Self::from_queue(WeightedQueue::from_distribution(dist))
    }

    /// Build the tree by draining a queue of leaves.
    pub fn from_queue(mut queue: WeightedQueue) -> Result<Self> {
        let symbol_count = queue.len();

        let root = loop {
            let Some(a) = queue.pop() else {
                return Err(OxiHuffError::EmptyDistribution);
            };
            let Some(b) = queue.pop() else {
                break a;
            };
            queue.insert(HuffNode::merge(a, b));
        };
        let tree = Self { root, symbol_count };

        tracing::debug!(
            symbols = tree.symbol_count,
            depth = tree.depth(),
            total_weight = tree.total_weight(),
            "built huffman tree"
        );

        Ok(tree)
    }

    /// The root node; a leaf when the alphabet has one symbol.
    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Number of distinct symbols (leaves).
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Weight of the root, i.e. the sum of all symbol weights.
    pub fn total_weight(&self) -> f64 {
        self.root.weight()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffNode::Leaf { .. } => max_depth = max_depth.max(depth),
                HuffNode::Internal { left, right, .. } => {
                    stack.push((&**left, depth + 1));
                    stack.push((&**right, depth + 1));
                }
            }
        }
        max_depth
    }
}
