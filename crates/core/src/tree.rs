//! Huffman tree construction from symbol frequencies.
//!
//! A single pass over the input produces a 256-slot frequency table,
//! then the classic merge loop runs over a [`MinHeap`]: repeatedly take
//! the two lightest subtrees, join them under a fresh internal node
//! whose weight is their sum, and push the result back until one tree
//! remains.
//!
//! # Determinism
//! Leaves are inserted in ascending symbol order (0..=255) and the heap
//! breaks priority ties structurally, so the same input always yields
//! the same tree and therefore the same compressed bytes.

use crate::error::{Result, TreeError};
use crate::heap::MinHeap;

/// Number of distinct byte symbols.
pub const SYMBOL_COUNT: usize = 256;

/// Per-symbol occurrence counts for one input.
pub type FrequencyTable = [u64; SYMBOL_COUNT];

/// Count symbol occurrences in a single pass.
pub fn count_frequencies(data: &[u8]) -> FrequencyTable {
    let mut freqs = [0u64; SYMBOL_COUNT];
    for &byte in data {
        freqs[byte as usize] += 1;
    }
    freqs
}

/// A node in the Huffman tree.
///
/// Every node has either zero children (leaf, carries a symbol) or
/// exactly two (internal, carries the combined weight), never one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one symbol.
    Leaf {
        /// The byte value this leaf encodes.
        symbol: u8,
        /// Occurrence count at construction time (0 after deserialization).
        weight: u64,
    },
    /// Merge of two subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Subtree reached by bit 0.
        left: Box<Node>,
        /// Subtree reached by bit 1.
        right: Box<Node>,
    },
}

impl Node {
    /// The node's weight (frequency for leaves, summed for internals).
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for terminal nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Build the Huffman tree for a frequency table.
///
/// A single distinct symbol yields a bare leaf root; the code table and
/// payload codec give that symbol a one-bit code so the degenerate tree
/// still round-trips.
///
/// # Errors
/// `TreeError::EmptyFrequencyTable` if every count is zero. Compressing
/// empty input is handled a level up, before tree construction.
pub fn build_tree(freqs: &FrequencyTable) -> Result<Node> {
    let mut heap = MinHeap::new();
    for (symbol, &count) in freqs.iter().enumerate() {
        if count > 0 {
            let leaf = Node::Leaf {
                symbol: symbol as u8,
                weight: count,
            };
            heap.add(leaf, count)?;
        }
    }

    if heap.is_empty() {
        return Err(TreeError::EmptyFrequencyTable.into());
    }

    while heap.len() > 1 {
        let first = heap.remove()?;
        let second = heap.remove()?;
        let weight = first.priority + second.priority;
        let merged = Node::Internal {
            weight,
            left: Box::new(first.payload),
            right: Box::new(second.payload),
        };
        heap.add(merged, weight)?;
    }

    Ok(heap.remove()?.payload)
}
