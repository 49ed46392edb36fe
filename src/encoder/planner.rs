//! Version / EC level selection and data codeword assembly.

use crate::encoder::bitstream::BitBuffer;
use crate::encoder::segment::{Segment, total_bits};
use crate::encoder::tables::{capacity_bits, num_data_codewords};
use crate::error::QrError;
use crate::models::{ECLevel, Version};

/// Levels tried, strongest first, when boosting error correction
const BOOST_ORDER: [ECLevel; 3] = [ECLevel::H, ECLevel::Q, ECLevel::M];

/// Result of capacity planning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// Smallest version in range that fits
    pub version: Version,
    /// Requested level, or the boosted one
    pub ec_level: ECLevel,
    /// Encoded segment length before terminator and padding
    pub data_bits: usize,
}

/// Choose the smallest version in `min..=max` that holds the segments at
/// `ec_level`, then optionally raise the EC level while it still fits.
pub fn plan(
    segments: &[Segment],
    ec_level: ECLevel,
    boost_ecl: bool,
    min_version: Version,
    max_version: Version,
) -> Result<Plan, QrError> {
    if min_version > max_version {
        return Err(QrError::InvalidVersionRange {
            min: min_version.number(),
            max: max_version.number(),
        });
    }

    let mut version = min_version;
    let data_bits = loop {
        if let Some(bits) = total_bits(segments, version) {
            if bits <= capacity_bits(version, ec_level) {
                break bits;
            }
        }
        match version.next() {
            Some(next) if version < max_version => version = next,
            _ => {
                return Err(QrError::DataTooLong {
                    max_version: max_version.number(),
                    ec_level,
                });
            }
        }
    };

    let mut chosen = ec_level;
    if boost_ecl {
        if let Some(&level) = BOOST_ORDER
            .iter()
            .find(|&&level| data_bits <= capacity_bits(version, level))
        {
            chosen = level;
        }
    }

    tracing::debug!(
        version = version.number(),
        requested = %ec_level,
        ec_level = %chosen,
        data_bits,
        capacity = capacity_bits(version, chosen),
        "planned QR symbol"
    );

    Ok(Plan {
        version,
        ec_level: chosen,
        data_bits,
    })
}

/// Concatenate the segments and pad to exactly the data capacity of the plan:
/// terminator of up to four zero bits, zero fill to a byte boundary, then
/// alternating 0xEC / 0x11 pad bytes.
pub fn assemble_data_codewords(segments: &[Segment], plan: &Plan) -> Vec<u8> {
    let mut bits = BitBuffer::new();
    for segment in segments {
        bits.append_bits(segment.mode().mode_bits(), 4);
        bits.append_bits(
            segment.num_chars() as u32,
            segment.mode().char_count_bits(plan.version),
        );
        bits.append(segment.data());
    }
    assert_eq!(
        Some(bits.len()),
        total_bits(segments, plan.version),
        "segment bit length disagrees with planner"
    );

    let capacity = capacity_bits(plan.version, plan.ec_level);
    assert!(
        bits.len() <= capacity,
        "{} data bits exceed capacity {capacity}",
        bits.len()
    );

    let terminator = (capacity - bits.len()).min(4);
    bits.append_bits(0, terminator as u8);
    let fill = (8 - bits.len() % 8) % 8;
    bits.append_bits(0, fill as u8);

    for &pad in [0xEC, 0x11].iter().cycle() {
        if bits.len() >= capacity {
            break;
        }
        bits.append_bits(pad, 8);
    }

    let codewords = bits.to_bytes();
    assert_eq!(
        codewords.len(),
        num_data_codewords(plan.version, plan.ec_level)
    );
    codewords
}
