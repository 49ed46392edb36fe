//! Alphanumeric mode encoder (Mode 0010)
//! Alphanumeric character set: 0-9, A-Z, space, $%*+-./:

use crate::encoder::bitstream::BitBuffer;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Pairs = 11 bits (45·a + b), trailing single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Index of a character in the 45-symbol alphabet
    pub fn value_of(c: char) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&t| t == c)
            .map(|p| p as u32)
    }

    /// Pack `text`, or `None` if a character is outside the alphabet
    pub fn encode(text: &str) -> Option<BitBuffer> {
        let values = text
            .chars()
            .map(Self::value_of)
            .collect::<Option<Vec<u32>>>()?;

        let mut bits = BitBuffer::new();
        for pair in values.chunks(2) {
            match pair {
                [a, b] => bits.append_bits(a * 45 + b, 11),
                [a] => bits.append_bits(*a, 6),
                _ => unreachable!("chunks(2) yields one or two values"),
            }
        }
        Some(bits)
    }
}
