//! Bit-level I/O for the Huffman codec.
//!
//! `BitWriter` and `BitReader` move single bits and whole bytes through a
//! byte buffer in MSB-first order. The serialized tree and the packed
//! payload share one cursor, so writer and reader must agree bit-for-bit
//! on ordering; MSB-first is the convention used throughout this crate.
//!
//! # Padding
//! `BitWriter::finish` pads the final partial byte with trailing zeros.
//! `BitReader` cannot tell padding from data; callers bound their reads
//! by an explicit symbol count instead.

use crate::error::{BitIoError, Result};

/// Writes bits MSB-first into a growable byte buffer.
///
/// # Invariants
/// - `pending` holds fewer than 8 bits, MSB-aligned
/// - `pending_len` is always < 8
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    pending: u8,
    /// Number of bits in `pending` (0-7)
    pending_len: u8,
}

impl BitWriter {
    /// Create a writer with an empty output buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.pending |= 1 << (7 - self.pending_len);
        }
        self.pending_len += 1;
        if self.pending_len == 8 {
            self.bytes.push(self.pending);
            self.pending = 0;
            self.pending_len = 0;
        }
    }

    /// Append a full byte, MSB first, at the current bit position.
    ///
    /// The byte need not be aligned; it may straddle two output bytes.
    pub fn write_byte(&mut self, value: u8) {
        for shift in (0..8).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }

    /// Append the low `len` bits of `bits`, most significant first.
    ///
    /// This is how a root-to-leaf code is emitted: the first edge taken
    /// from the root sits in the most significant of the `len` bits.
    pub fn write_code(&mut self, bits: u32, len: u8) {
        for shift in (0..len).rev() {
            self.write_bit((bits >> shift) & 1 == 1);
        }
    }

    /// Total number of bits written so far, including the partial byte.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending_len as usize
    }

    /// Finish writing and return the buffer, zero-padding the last byte.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pending_len > 0 {
            self.bytes.push(self.pending);
        }
        self.bytes
    }
}

/// Reads bits MSB-first from a byte slice.
///
/// A single forward-only cursor; the tree deserializer and payload
/// decoder thread the same reader so each consumes exactly its own bits.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Current bit position (0 = MSB of the first byte)
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data`, positioned at the first bit.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Read the next bit.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` if the buffer is exhausted.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.is_exhausted() {
            return Err(BitIoError::UnexpectedEof {
                position: self.position,
            }
            .into());
        }
        let byte = self.data[self.position / 8];
        let bit = (byte >> (7 - self.position % 8)) & 1 == 1;
        self.position += 1;
        Ok(bit)
    }

    /// Read the next 8 bits as a byte, MSB first.
    ///
    /// The byte need not be aligned in the underlying buffer.
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut value = 0u8;
        for _ in 0..8 {
            value = (value << 1) | self.read_bit()? as u8;
        }
        Ok(value)
    }

    /// Number of unread bits remaining.
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.position
    }

    /// Current bit position from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True when every bit has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.data.len() * 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_round_trip() {
        let pattern = [true, false, true, true, false, false, true, false];
        let mut writer = BitWriter::new();
        for &bit in &pattern {
            writer.write_bit(bit);
        }

        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b10110010]);

        let mut reader = BitReader::new(&bytes);
        for &expected in &pattern {
            assert_eq!(reader.read_bit().unwrap(), expected);
        }
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_unaligned_byte() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        writer.write_bit(false);
        writer.write_bit(true);
        writer.write_byte(0xA5);
        // 101 followed by 10100101, padded: 10110100 101_____

        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b10110100, 0b10100000]);

        let mut reader = BitReader::new(&bytes);
        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_byte().unwrap(), 0xA5);
    }

    #[test]
    fn test_write_code_msb_first() {
        let mut writer = BitWriter::new();
        writer.write_code(0b101, 3);
        writer.write_code(0b11, 2);
        assert_eq!(writer.bit_len(), 5);

        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b10111000]);
    }

    #[test]
    fn test_zero_length_code() {
        let mut writer = BitWriter::new();
        writer.write_code(0xFFFF_FFFF, 0);
        assert_eq!(writer.bit_len(), 0);
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn test_padding_is_zero() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b10000000]);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0xAB];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_byte().unwrap(), 0xAB);
        assert!(matches!(
            reader.read_bit(),
            Err(crate::Error::BitIo(BitIoError::UnexpectedEof { position: 8 }))
        ));
    }

    #[test]
    fn test_bits_remaining() {
        let data = [0xFF, 0x00];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.bits_remaining(), 16);
        reader.read_bit().unwrap();
        reader.read_bit().unwrap();
        reader.read_bit().unwrap();
        assert_eq!(reader.bits_remaining(), 13);
        assert_eq!(reader.position(), 3);
        reader.read_byte().unwrap();
        assert_eq!(reader.bits_remaining(), 5);
        assert!(!reader.is_exhausted());
    }

    #[test]
    fn test_empty_buffer() {
        let mut reader = BitReader::new(&[]);
        assert!(reader.is_exhausted());
        assert!(reader.read_bit().is_err());
    }
}
