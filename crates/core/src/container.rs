//! Compressed file container: header plus the packed bitstream.
//!
//! # Layout
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x48 0x50 0x4B 0x31 ("HPK1")
//! +------------------+
//! | symbol_count (8) |  u64 little-endian, source bytes encoded
//! +------------------+
//! | stream_len (8)   |  u64 byte length of the bitstream
//! +------------------+
//! | crc32 (4)        |  u32 over symbol_count, stream_len, stream
//! +------------------+
//! | stream           |  serialized tree immediately followed by the
//! | (variable)       |  packed payload, one shared bit cursor
//! +------------------+
//! ```
//!
//! The symbol count makes decoding robust to the final byte's padding
//! bits: the decoder stops after exactly that many symbols. An empty
//! input is a count of zero with an empty stream and no tree.
//!
//! The CRC covers everything after the magic, so corruption anywhere in
//! the header fields or the bitstream is caught before decoding starts.

use crate::error::{ContainerError, Error, Result};

/// Magic number for huffpack containers: "HPK1"
const MAGIC: [u8; 4] = [0x48, 0x50, 0x4B, 0x31];

/// Size of the container header in bytes
pub const HEADER_SIZE: usize = 24;

/// A parsed container, ready for decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Number of source symbols the payload encodes.
    pub symbol_count: u64,
    /// Serialized tree plus packed payload.
    pub stream: Vec<u8>,
}

/// Serialize a container around the packed bitstream.
///
/// `stream_len` is a `u64` so streams past 4 GiB keep an accurate
/// declared length instead of truncating into a container that can
/// never validate.
pub fn write_container(symbol_count: u64, stream: &[u8]) -> Vec<u8> {
    let stream_len = stream.len() as u64;
    let crc32 = compute_crc(symbol_count, stream_len, stream);

    let mut out = Vec::with_capacity(HEADER_SIZE + stream.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&symbol_count.to_le_bytes());
    out.extend_from_slice(&stream_len.to_le_bytes());
    out.extend_from_slice(&crc32.to_le_bytes());
    out.extend_from_slice(stream);
    out
}

/// Parse and validate a container.
///
/// # Errors
/// - `ContainerError::TooShort` if the header cannot fit
/// - `ContainerError::InvalidMagic` on a wrong magic number
/// - `ContainerError::StreamLengthMismatch` if the declared stream
///   length disagrees with the bytes present
/// - `Error::Crc` if the checksum fails
pub fn read_container(bytes: &[u8]) -> Result<Container> {
    if bytes.len() < HEADER_SIZE {
        return Err(ContainerError::TooShort {
            required: HEADER_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    let magic: [u8; 4] = bytes[0..4].try_into().expect("slice length is 4");
    if magic != MAGIC {
        return Err(ContainerError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let symbol_count = u64::from_le_bytes(bytes[4..12].try_into().expect("slice length is 8"));
    let stream_len = u64::from_le_bytes(bytes[12..20].try_into().expect("slice length is 8"));
    let crc32 = u32::from_le_bytes(bytes[20..24].try_into().expect("slice length is 4"));

    let stream = &bytes[HEADER_SIZE..];
    if stream.len() as u64 != stream_len {
        return Err(ContainerError::StreamLengthMismatch {
            expected: stream_len,
            actual: stream.len() as u64,
        }
        .into());
    }

    let computed = compute_crc(symbol_count, stream_len, stream);
    if computed != crc32 {
        return Err(Error::Crc {
            expected: crc32,
            actual: computed,
        });
    }

    Ok(Container {
        symbol_count,
        stream: stream.to_vec(),
    })
}

/// CRC32 over the protected fields; defines the integrity boundary.
fn compute_crc(symbol_count: u64, stream_len: u64, stream: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&symbol_count.to_le_bytes());
    hasher.update(&stream_len.to_le_bytes());
    hasher.update(stream);
    hasher.finalize()
}
