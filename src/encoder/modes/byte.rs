//! Byte mode encoder (Mode 0100) for 8-bit data

use crate::encoder::bitstream::BitBuffer;

/// Copies bytes through, 8 bits each
pub struct ByteEncoder;

impl ByteEncoder {
    /// 8 bits per byte; text is taken as its UTF-8 bytes
    pub fn encode(data: &[u8]) -> BitBuffer {
        let mut bits = BitBuffer::new();
        for &byte in data {
            bits.append_bits(byte as u32, 8);
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_encode() {
        let bits = ByteEncoder::encode(b"HI");
        let mut expected = BitBuffer::new();
        expected.append_bits(0x48, 8);
        expected.append_bits(0x49, 8);
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_multibyte_utf8() {
        // 'é' is two bytes in UTF-8
        let bits = ByteEncoder::encode("é".as_bytes());
        assert_eq!(bits.len(), 16);
        let mut expected = BitBuffer::new();
        expected.append_bits(0xC3, 8);
        expected.append_bits(0xA9, 8);
        assert_eq!(bits, expected);
    }
}
