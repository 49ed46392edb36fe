//! Code 128 subset B symbol encoding

use crate::error::BarcodeError;

/// Symbol value of the START B character
pub const START_B: usize = 104;
/// Symbol value of the STOP character
pub const STOP: usize = 106;
/// Checksum modulus
const MODULUS: usize = 103;

/// Bar/space patterns indexed by symbol value, `1` = bar.
///
/// Values 0-94 are the printable characters (ASCII - 32), 95-102 the
/// function and code-switch symbols, 103-105 START A/B/C. STOP is the only
/// 13-module pattern.
pub const PATTERNS: [&str; 107] = [
    "11011001100",
    "11001101100",
    "11001100110",
    "10010011000",
    "10010001100",
    "10001001100",
    "10011001000",
    "10011000100",
    "10001100100",
    "11001001000",
    "11001000100",
    "11000100100",
    "10110011100",
    "10011011100",
    "10011001110",
    "10111001100",
    "10011101100",
    "10011100110",
    "11001110010",
    "11001011100",
    "11001001110",
    "11011100100",
    "11001110100",
    "11101101110",
    "11101001100",
    "11100101100",
    "11100100110",
    "11101100100",
    "11100110100",
    "11100110010",
    "11011011000",
    "11011000110",
    "11000110110",
    "10100011000",
    "10001011000",
    "10001000110",
    "10110001000",
    "10001101000",
    "10001100010",
    "11010001000",
    "11000101000",
    "11000100010",
    "10110111000",
    "10110001110",
    "10001101110",
    "10111011000",
    "10111000110",
    "10001110110",
    "11101110110",
    "11010001110",
    "11000101110",
    "11011101000",
    "11011100010",
    "11011101110",
    "11101011000",
    "11101000110",
    "11100010110",
    "11101101000",
    "11101100010",
    "11100011010",
    "11101111010",
    "11001000010",
    "11110001010",
    "10100110000",
    "10100001100",
    "10010110000",
    "10010000110",
    "10000101100",
    "10000100110",
    "10110010000",
    "10110000100",
    "10011010000",
    "10011000010",
    "10000110100",
    "10000110010",
    "11000010010",
    "11001010000",
    "11110111010",
    "11000010100",
    "10001111010",
    "10100111100",
    "10010111100",
    "10010011110",
    "10111100100",
    "10011110100",
    "10011110010",
    "11110100100",
    "11110010100",
    "11110010010",
    "11011011110",
    "11011110110",
    "11110110110",
    "10101111000",
    "10100011110",
    "10001011110",
    "10111101000",
    "10111100010",
    "11110101000",
    "11110100010",
    "10111011110",
    "10111101110",
    "11101011110",
    "11110101110",
    "11010000100",
    "11010010000",
    "11010011100",
    "1100011101011",
];

/// Symbol value of a subset B character, `None` outside ASCII 32-126
pub fn symbol_value(character: char) -> Option<usize> {
    match character {
        ' '..='~' => Some(character as usize - 32),
        _ => None,
    }
}

/// Validate the whole input and map it to symbol values.
///
/// Fails on the first character outside ASCII 32-126, before any pattern is looked up.
pub fn symbol_values(value: &str) -> Result<Vec<usize>, BarcodeError> {
    value
        .chars()
        .enumerate()
        .map(|(position, character)| {
            symbol_value(character)
                .ok_or(BarcodeError::UnsupportedCharacter { character, position })
        })
        .collect()
}

/// Weighted mod-103 checksum, START B counting with weight 1
pub fn checksum(values: &[usize]) -> usize {
    let sum = values
        .iter()
        .enumerate()
        .fold(START_B, |acc, (i, &v)| acc + v * (i + 1));
    sum % MODULUS
}

/// Bar pattern for a symbol value
pub fn pattern(value: usize) -> Result<&'static str, BarcodeError> {
    PATTERNS
        .get(value)
        .copied()
        .ok_or(BarcodeError::MissingPattern { value })
}

/// Full module string: START B, data, checksum, STOP
pub fn encode_pattern(value: &str) -> Result<String, BarcodeError> {
    let values = symbol_values(value)?;
    let check = checksum(&values);
    tracing::debug!(characters = values.len(), checksum = check, "encoded code 128");

    let mut bits = String::with_capacity(11 * (values.len() + 2) + 13);
    bits.push_str(pattern(START_B)?);
    for &v in &values {
        bits.push_str(pattern(v)?);
    }
    bits.push_str(pattern(check)?);
    bits.push_str(pattern(STOP)?);
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        for (value, p) in PATTERNS.iter().enumerate() {
            let expected = if value == STOP { 13 } else { 11 };
            assert_eq!(p.len(), expected, "value {value}");
            assert!(p.starts_with('1'), "value {value}");
            assert!(p.chars().all(|c| c == '0' || c == '1'));
        }
        // Every symbol is distinct
        let mut sorted = PATTERNS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 107);
    }

    #[test]
    fn test_known_patterns() {
        assert_eq!(PATTERNS[0], "11011001100");
        assert_eq!(PATTERNS[symbol_value('A').unwrap()], "10100011000");
        assert_eq!(PATTERNS[START_B], "11010010000");
        assert_eq!(PATTERNS[STOP], "1100011101011");
    }

    #[test]
    fn test_symbol_value_range() {
        assert_eq!(symbol_value(' '), Some(0));
        assert_eq!(symbol_value('~'), Some(94));
        assert_eq!(symbol_value('\u{7f}'), None);
        assert_eq!(symbol_value('\n'), None);
        assert_eq!(symbol_value('é'), None);
    }

    #[test]
    fn test_checksum_test_string() {
        // 104 + 52*1 + 37*2 + 51*3 + 52*4 = 591, 591 mod 103 = 76
        let values = symbol_values("TEST").unwrap();
        assert_eq!(values, vec![52, 37, 51, 52]);
        assert_eq!(checksum(&values), 76);
    }

    #[test]
    fn test_encode_test_string() {
        let bits = encode_pattern("TEST").unwrap();
        assert_eq!(
            bits,
            "1101001000011011100010100011010001101110100011011100010110010100001100011101011"
        );
    }

    #[test]
    fn test_encode_digits() {
        assert_eq!(checksum(&symbol_values("12345").unwrap()), 90);
        let bits = encode_pattern("12345").unwrap();
        assert!(bits.starts_with("11010010000"));
        assert!(bits.ends_with("1100011101011"));
        assert_eq!(bits.len(), 11 * 7 + 13);
    }

    #[test]
    fn test_function_checksum_uses_real_symbol() {
        // '~' = 94, (104 + 94) mod 103 = 95
        let bits = encode_pattern("~").unwrap();
        assert_eq!(checksum(&[94]), 95);
        assert_eq!(&bits[22..33], "10111101000");
        assert_ne!(&bits[22..33], PATTERNS[symbol_value('0').unwrap()]);
    }

    #[test]
    fn test_rejects_before_lookup() {
        let err = encode_pattern("caf\u{e9}").unwrap_err();
        assert_eq!(
            err,
            BarcodeError::UnsupportedCharacter {
                character: '\u{e9}',
                position: 3
            }
        );
    }

    #[test]
    fn test_empty_value() {
        let bits = encode_pattern("").unwrap();
        // START, checksum of START alone (104 mod 103 = 1), STOP
        assert_eq!(bits.len(), 11 * 2 + 13);
        assert_eq!(&bits[11..22], PATTERNS[1]);
    }

    #[test]
    fn test_missing_pattern() {
        assert_eq!(pattern(107), Err(BarcodeError::MissingPattern { value: 107 }));
    }
}
