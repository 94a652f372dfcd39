//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! A failed compress or decompress propagates a single error to the
//! caller; no component continues with corrupted state.

use thiserror::Error;

/// Top-level error type for all huffpack operations.
///
/// Each variant corresponds to a failure domain:
/// - Bit I/O: reading past the end of a bit buffer
/// - Heap: priority-heap capacity exhaustion or misuse
/// - Tree: Huffman tree construction failures
/// - Codec: tree serialization or payload encode/decode failures
/// - Container: malformed compressed file headers
/// - CRC: data corruption detected before decoding
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Bit-level read failed (e.g., stream exhausted mid-read)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Priority heap error (e.g., capacity exceeded during tree build)
    #[error("heap error: {0}")]
    Heap(#[from] HeapError),

    /// Huffman tree construction error
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Encode/decode error (corrupt stream, unencodable symbol)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Compressed container error (bad magic, truncated header)
    #[error("container error: {0}")]
    Container(#[from] ContainerError),

    /// CRC validation failed, indicating data corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the bit stream
    #[error("unexpected end of bit stream at bit {position}")]
    UnexpectedEof { position: usize },
}

/// Priority heap errors.
#[derive(Debug, Error)]
pub enum HeapError {
    /// Insertion would exceed the fixed heap capacity
    #[error("heap capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// Removal from an empty heap
    #[error("remove from empty heap")]
    Empty,
}

/// Huffman tree construction errors.
#[derive(Debug, Error)]
pub enum TreeError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty frequency table: no symbols to encode")]
    EmptyFrequencyTable,
}

/// Encode/decode errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Symbol appeared in the input but has no code in the table
    #[error("symbol {symbol:#04x} has no code")]
    MissingCode { symbol: u8 },

    /// Code would exceed the 32-bit accumulator
    #[error("code length exceeds maximum {max} bits")]
    CodeTooLong { max: u8 },

    /// Serialized tree nests deeper than any valid 256-leaf tree
    #[error("serialized tree exceeds maximum depth {max}")]
    TreeTooDeep { max: usize },

    /// Bit stream ended while reconstructing the tree
    #[error("bit stream truncated inside serialized tree")]
    TruncatedTree,

    /// Bit stream ended before the expected number of symbols decoded
    #[error("payload truncated: decoded {decoded} of {expected} symbols")]
    TruncatedPayload { decoded: usize, expected: usize },
}

/// Compressed container errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Invalid magic number in header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Container is too short to hold a valid header
    #[error("container too short: need at least {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    /// Stream length field doesn't match the bytes actually present
    #[error("stream length mismatch: header says {expected}, got {actual}")]
    StreamLengthMismatch { expected: u64, actual: u64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
