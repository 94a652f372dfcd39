//! Per-symbol bit codes derived from the Huffman tree.
//!
//! A [`Code`] is the root-to-leaf path for one symbol: bit 0 for a left
//! edge, bit 1 for a right edge, first edge in the most significant of
//! the stored bits so it can be handed straight to
//! [`BitWriter::write_code`](crate::bitio::BitWriter::write_code).
//!
//! The table is built by one recursive descent. The path accumulator is
//! `Copy` and extended by value on each branch, so the left and right
//! recursions never observe each other's appended bit.

use crate::error::{CodecError, Result};
use crate::tree::{Node, SYMBOL_COUNT};

/// Longest representable code, bounded by the `u32` accumulator.
pub const MAX_CODE_BITS: u8 = 32;

/// A variable-length bit code for one symbol.
///
/// At most [`MAX_CODE_BITS`] bits; the first root edge occupies the most
/// significant of the `len` stored bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    bits: u32,
    len: u8,
}

impl Code {
    /// Return this code extended by one edge bit.
    ///
    /// # Errors
    /// `CodecError::CodeTooLong` if the code is already at
    /// [`MAX_CODE_BITS`]. Reaching that depth requires a pathologically
    /// skewed frequency profile.
    pub fn extended(self, bit: bool) -> Result<Code> {
        if self.len == MAX_CODE_BITS {
            return Err(CodecError::CodeTooLong { max: MAX_CODE_BITS }.into());
        }
        Ok(Code {
            bits: (self.bits << 1) | bit as u32,
            len: self.len + 1,
        })
    }

    /// The code bits, right-aligned in the low `len` bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of bits in this code.
    pub fn len(&self) -> u8 {
        self.len
    }

    /// True for the empty root path.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate the code's bits in emission order (root edge first).
    pub fn iter_bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).rev().map(move |shift| (self.bits >> shift) & 1 == 1)
    }
}

/// Mapping from symbol to its bit code.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<Code>; SYMBOL_COUNT],
}

impl CodeTable {
    /// Build the table by walking the tree.
    ///
    /// A bare leaf root (single-symbol input) gets the one-bit code `0`;
    /// an empty code is unusable because decoding would never consume a
    /// bit.
    pub fn from_tree(root: &Node) -> Result<Self> {
        let mut codes = [None; SYMBOL_COUNT];
        match root {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = Some(Code::default().extended(false)?);
            }
            Node::Internal { .. } => Self::assign(root, Code::default(), &mut codes)?,
        }
        Ok(Self { codes })
    }

    fn assign(node: &Node, path: Code, codes: &mut [Option<Code>; SYMBOL_COUNT]) -> Result<()> {
        match node {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = Some(path);
                Ok(())
            }
            Node::Internal { left, right, .. } => {
                Self::assign(left, path.extended(false)?, codes)?;
                Self::assign(right, path.extended(true)?, codes)
            }
        }
    }

    /// Look up the code for `symbol`, if it occurred in the input.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Iterate all `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.map(|code| (s as u8, code)))
    }
}
