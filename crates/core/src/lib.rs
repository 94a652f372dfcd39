//! huffpack-core: lossless file compression using canonical Huffman coding
//!
//! This library builds a prefix-free binary code from symbol frequencies,
//! serializes the code tree into the compressed stream, and bit-packs the
//! input using that code. Decompression reconstructs the tree from the
//! stream and walks it bit by bit to recover the original bytes.
//!
//! # Architecture
//!
//! The pipeline is built from small modules with clear boundaries:
//! - `bitio`: MSB-first bit reading/writing over byte buffers
//! - `heap`: fixed-capacity min-heap driving the Huffman merge order
//! - `tree`: frequency counting and bottom-up tree construction
//! - `code`: per-symbol bit codes derived by tree traversal
//! - `codec`: preorder tree serialization and payload encode/decode
//! - `container`: compressed file layout with length and CRC guards
//! - `file`: top-level compress/decompress operations
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Bounded memory**: The heap has a fixed capacity; codes have a
//!   fixed maximum length; corrupt streams cannot recurse unboundedly
//! - **Deterministic**: A fixed insertion order and tie-break make the
//!   compressed bytes reproducible for a given input
//! - **No ambiguous output**: Decoding is bounded by a recorded symbol
//!   count, so trailing padding bits never become spurious symbols

pub mod bitio;
pub mod code;
pub mod codec;
pub mod container;
pub mod error;
pub mod file;
pub mod heap;
pub mod tree;

// Re-export commonly used types and operations
pub use error::{Error, Result};
pub use file::{compress, compress_bytes, decompress, decompress_bytes};
