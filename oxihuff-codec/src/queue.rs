//! Weighted priority queue of tree nodes.
//!
//! The queue is kept sorted by weight. A new node goes immediately before
//! the first node of strictly greater weight, so nodes of equal weight pop
//! in insertion order. Tree shape depends on this tie-break, which makes the
//! whole code table reproducible from the same insertion sequence.

use crate::distribution::WeightDistribution;
use crate::tree::HuffNode;
use std::collections::VecDeque;

/// Ordered collection of nodes; `pop` yields the minimum weight first.
#[derive(Debug, Clone, Default)]
pub struct WeightedQueue {
    nodes: VecDeque<HuffNode>,
}

impl WeightedQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }

    /// Create a queue holding one leaf per entry of `dist`, in its order.
    pub fn from_distribution(dist: &WeightDistribution) -> Self {
        let mut queue = Self::new();
        for (symbol, weight) in dist.iter() {
            queue.insert(HuffNode::leaf(symbol, weight));
        }
        queue
    }

    /// Insert a node behind every node of lower or equal weight.
    pub fn insert(&mut self, node: HuffNode) {
        let weight = node.weight();
        let index = self.nodes.partition_point(|n| n.weight() <= weight);
        self.nodes.insert(index, node);
    }

    /// Remove and return the minimum-weight node, or `None` when empty.
    pub fn pop(&mut self) -> Option<HuffNode> {
        self.nodes.pop_front()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_yields_non_decreasing_weights() {
        let mut queue = WeightedQueue::new();
        for (i, w) in [7.0, 1.0, 4.5, 0.0, 9.0, 4.5, 2.0].into_iter().enumerate() {
            queue.insert(HuffNode::leaf(i as u8, w));
        }
        assert_eq!(queue.len(), 7);

        let mut last = f64::NEG_INFINITY;
        while let Some(node) = queue.pop() {
            assert!(node.weight() >= last);
            last = node.weight();
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_weights_pop_fifo() {
        let mut queue = WeightedQueue::new();
        queue.insert(HuffNode::leaf(b'x', 3.0));
        queue.insert(HuffNode::leaf(b'a', 1.0));
        queue.insert(HuffNode::leaf(b'y', 3.0));
        queue.insert(HuffNode::leaf(b'z', 3.0));

        let order: Vec<Option<u8>> = std::iter::from_fn(|| queue.pop())
            .map(|n| n.symbol())
            .collect();
        assert_eq!(order, vec![Some(b'a'), Some(b'x'), Some(b'y'), Some(b'z')]);
    }

    #[test]
    fn test_pop_empty() {
        let mut queue = WeightedQueue::new();
        assert!(queue.pop().is_none());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_from_distribution() {
        let dist = WeightDistribution::from_pairs([(b'b', 2.0), (b'a', 2.0), (b'c', 1.0)]).unwrap();
        let mut queue = WeightedQueue::from_distribution(&dist);
        assert_eq!(queue.pop().and_then(|n| n.symbol()), Some(b'c'));
        assert_eq!(queue.pop().and_then(|n| n.symbol()), Some(b'b'));
        assert_eq!(queue.pop().and_then(|n| n.symbol()), Some(b'a'));
    }
}
