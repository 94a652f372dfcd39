//! Tree serialization and payload encode/decode.
//!
//! # Tree wire format
//! Preorder, one control bit per node:
//! - leaf: bit `1`, then the raw 8-bit symbol
//! - internal: bit `0`, then the left subtree, then the right subtree
//!
//! The format is self-terminating: a tree of L leaves consumes exactly
//! 2L-1 control bits and L symbol bytes, so no length prefix is needed.
//! Deserialization threads one advancing [`BitReader`] through the whole
//! recursive reconstruction.
//!
//! # Payload
//! Encoding concatenates each input byte's code; decoding walks the tree
//! from the root, bit `0` to the left and bit `1` to the right, emitting
//! a symbol per leaf reached. The decoder is bounded by an explicit
//! symbol count because the final byte's padding bits are
//! indistinguishable from data.

use crate::bitio::{BitReader, BitWriter};
use crate::code::CodeTable;
use crate::error::{CodecError, Result};
use crate::tree::Node;

/// Deepest nesting a serialized 256-leaf tree can legitimately reach.
/// Anything deeper is a corrupt or adversarial stream.
pub const MAX_TREE_DEPTH: usize = 256;

/// Serialize `node` in preorder onto the shared bit cursor.
pub fn write_tree(node: &Node, out: &mut BitWriter) {
    match node {
        Node::Leaf { symbol, .. } => {
            out.write_bit(true);
            out.write_byte(*symbol);
        }
        Node::Internal { left, right, .. } => {
            out.write_bit(false);
            write_tree(left, out);
            write_tree(right, out);
        }
    }
}

/// Reconstruct a tree from the cursor's current position.
///
/// Consumes exactly the bits `write_tree` produced; the cursor is left
/// positioned at the first payload bit. Deserialized nodes carry weight
/// zero; weights only matter during construction.
///
/// # Errors
/// `CodecError::TruncatedTree` if the stream ends mid-tree, and
/// `CodecError::TreeTooDeep` if nesting exceeds [`MAX_TREE_DEPTH`].
pub fn read_tree(reader: &mut BitReader<'_>) -> Result<Node> {
    read_node(reader, 0)
}

fn read_node(reader: &mut BitReader<'_>, depth: usize) -> Result<Node> {
    if depth > MAX_TREE_DEPTH {
        return Err(CodecError::TreeTooDeep {
            max: MAX_TREE_DEPTH,
        }
        .into());
    }

    let is_leaf = reader.read_bit().map_err(|_| CodecError::TruncatedTree)?;
    if is_leaf {
        let symbol = reader.read_byte().map_err(|_| CodecError::TruncatedTree)?;
        return Ok(Node::Leaf { symbol, weight: 0 });
    }

    let left = read_node(reader, depth + 1)?;
    let right = read_node(reader, depth + 1)?;
    Ok(Node::Internal {
        weight: 0,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Append the code for every input byte to the bit cursor.
///
/// # Errors
/// `CodecError::MissingCode` if a byte has no table entry, which means
/// the table was built from a different input's frequencies.
pub fn encode_stream(data: &[u8], table: &CodeTable, out: &mut BitWriter) -> Result<()> {
    for &byte in data {
        let code = table
            .get(byte)
            .ok_or(CodecError::MissingCode { symbol: byte })?;
        out.write_code(code.bits(), code.len());
    }
    Ok(())
}

/// Decode exactly `expected` symbols by walking the tree per symbol.
///
/// A bare leaf root (single-symbol input) consumes one bit per emitted
/// symbol, mirroring the one-bit code the encoder assigned it. Trailing
/// padding bits after the final symbol are ignored.
///
/// # Errors
/// `CodecError::TruncatedPayload` if the stream runs out before
/// `expected` symbols have been produced.
pub fn decode_stream(reader: &mut BitReader<'_>, root: &Node, expected: usize) -> Result<Vec<u8>> {
    // `expected` comes from an untrusted header; every symbol consumes
    // at least one bit, so the stream itself bounds the allocation.
    let mut output = Vec::with_capacity(expected.min(reader.bits_remaining()));

    if let Node::Leaf { symbol, .. } = root {
        for decoded in 0..expected {
            reader.read_bit().map_err(|_| CodecError::TruncatedPayload {
                decoded,
                expected,
            })?;
            output.push(*symbol);
        }
        return Ok(output);
    }

    while output.len() < expected {
        let mut node = root;
        loop {
            let bit = reader.read_bit().map_err(|_| CodecError::TruncatedPayload {
                decoded: output.len(),
                expected,
            })?;
            match node {
                Node::Internal { left, right, .. } => {
                    node = if bit { right } else { left };
                }
                Node::Leaf { .. } => unreachable!("descent starts at an internal root"),
            }
            if let Node::Leaf { symbol, .. } = node {
                output.push(*symbol);
                break;
            }
        }
    }

    Ok(output)
}
