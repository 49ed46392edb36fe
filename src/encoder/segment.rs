use crate::encoder::bitstream::BitBuffer;
use crate::encoder::modes::alphanumeric::AlphanumericEncoder;
use crate::encoder::modes::byte::ByteEncoder;
use crate::encoder::modes::numeric::NumericEncoder;
use crate::models::Version;

/// QR data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits only
    Numeric,
    /// 45-symbol upper-case alphabet
    Alphanumeric,
    /// Raw 8-bit bytes
    Byte,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn mode_bits(&self) -> u32 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
        }
    }

    /// Width of the character count field, by version band 1-9 / 10-26 / 27-40
    pub fn char_count_bits(&self, version: Version) -> u8 {
        let band = (version.number() as usize + 7) / 17;
        let widths: [u8; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
        };
        widths[band]
    }
}

/// One run of data in a single mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    mode: Mode,
    num_chars: usize,
    data: BitBuffer,
}

impl Segment {
    /// Numeric segment, or `None` if `text` has a non-digit
    pub fn numeric(text: &str) -> Option<Self> {
        Some(Self {
            mode: Mode::Numeric,
            num_chars: text.len(),
            data: NumericEncoder::encode(text)?,
        })
    }

    /// Alphanumeric segment, or `None` outside the 45-character set
    pub fn alphanumeric(text: &str) -> Option<Self> {
        Some(Self {
            mode: Mode::Alphanumeric,
            num_chars: text.chars().count(),
            data: AlphanumericEncoder::encode(text)?,
        })
    }

    /// Byte segment over arbitrary data
    pub fn bytes(data: &[u8]) -> Self {
        Self {
            mode: Mode::Byte,
            num_chars: data.len(),
            data: ByteEncoder::encode(data),
        }
    }

    /// Encoding mode of this segment
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Characters (or bytes, in byte mode) carried by this segment
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// Packed payload, without mode indicator or count field
    pub fn data(&self) -> &BitBuffer {
        &self.data
    }

    /// Full encoded length at `version`, or `None` if the count overflows its field
    pub fn encoded_bits(&self, version: Version) -> Option<usize> {
        let count_bits = self.mode.char_count_bits(version);
        if self.num_chars >= 1usize << count_bits {
            return None;
        }
        Some(4 + count_bits as usize + self.data.len())
    }
}

/// Pick one mode for the whole message: numeric, else alphanumeric, else byte.
/// The empty string yields no segments.
pub fn classify(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    let segment = Segment::numeric(text)
        .or_else(|| Segment::alphanumeric(text))
        .unwrap_or_else(|| Segment::bytes(text.as_bytes()));
    vec![segment]
}

/// Sum of encoded lengths, or `None` if any segment cannot be represented at `version`
pub fn total_bits(segments: &[Segment], version: Version) -> Option<usize> {
    segments
        .iter()
        .try_fold(0usize, |acc, seg| Some(acc + seg.encoded_bits(version)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("0123")[0].mode(), Mode::Numeric);
        assert_eq!(classify("HELLO WORLD")[0].mode(), Mode::Alphanumeric);
        assert_eq!(classify("Hello")[0].mode(), Mode::Byte);
        assert_eq!(classify("https://example.com")[0].mode(), Mode::Byte);
        assert!(classify("").is_empty());
    }

    #[test]
    fn test_classify_is_single_segment() {
        // Digits followed by lower case still produce one byte segment
        let segments = classify("12345abc");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].mode(), Mode::Byte);
        assert_eq!(segments[0].num_chars(), 8);
    }

    #[test]
    fn test_byte_count_uses_utf8_length() {
        let segments = classify("café");
        assert_eq!(segments[0].num_chars(), 5);
        assert_eq!(segments[0].data().len(), 40);
    }

    #[test]
    fn test_char_count_bands() {
        assert_eq!(Mode::Numeric.char_count_bits(v(9)), 10);
        assert_eq!(Mode::Numeric.char_count_bits(v(10)), 12);
        assert_eq!(Mode::Numeric.char_count_bits(v(26)), 12);
        assert_eq!(Mode::Numeric.char_count_bits(v(27)), 14);
        assert_eq!(Mode::Alphanumeric.char_count_bits(v(1)), 9);
        assert_eq!(Mode::Byte.char_count_bits(v(40)), 16);
    }

    #[test]
    fn test_encoded_bits() {
        let segments = classify("HELLO WORLD");
        assert_eq!(total_bits(&segments, v(1)), Some(4 + 9 + 61));
    }

    #[test]
    fn test_count_overflow() {
        // 256 bytes cannot be counted in the 8-bit field of versions 1-9
        let segments = vec![Segment::bytes(&[0u8; 256])];
        assert_eq!(total_bits(&segments, v(9)), None);
        assert_eq!(total_bits(&segments, v(10)), Some(4 + 16 + 2048));
    }
}
