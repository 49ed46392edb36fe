/// Growable sequence of bits, appended MSB-first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `len` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, len: u8) {
        assert!(
            len <= 31 && value >> len == 0,
            "value {value} does not fit in {len} bits"
        );
        self.bits
            .extend((0..len).rev().map(|i| (value >> i) & 1 == 1));
    }

    /// Append every bit of another buffer
    pub fn append(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Number of bits appended so far
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bits have been appended
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits in append order
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pack into bytes; the length must already be a multiple of 8
    pub fn to_bytes(&self) -> Vec<u8> {
        assert!(self.bits.len() % 8 == 0, "bit stream not byte aligned");
        self.bits
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_bits_msb_first() {
        let mut buffer = BitBuffer::new();
        buffer.append_bits(0b0010, 4);
        buffer.append_bits(0b1, 1);
        assert_eq!(buffer.bits(), &[false, false, true, false, true]);
    }

    #[test]
    fn test_to_bytes() {
        let mut buffer = BitBuffer::new();
        buffer.append_bits(0xEC, 8);
        buffer.append_bits(0x11, 8);
        assert_eq!(buffer.to_bytes(), vec![0xEC, 0x11]);
    }

    #[test]
    fn test_zero_length_append() {
        let mut buffer = BitBuffer::new();
        buffer.append_bits(0, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_value_too_wide() {
        BitBuffer::new().append_bits(16, 4);
    }
}
