//! Block splitting, Reed-Solomon protection and interleaving of the codeword stream.

use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::{ec_block_info, num_data_codewords, raw_codewords};
use crate::models::{ECLevel, Version};

/// Split `data` into the EC blocks of `version`/`ec_level`, append each block's
/// EC codewords and interleave column-wise into the final codeword sequence.
///
/// Short blocks come first and carry one data codeword fewer than long blocks;
/// the column where they have no byte is skipped.
pub fn add_ecc_and_interleave(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<u8> {
    assert_eq!(
        data.len(),
        num_data_codewords(version, ec_level),
        "data codewords do not match capacity of {version:?} {ec_level}"
    );

    let info = ec_block_info(version, ec_level);
    let raw = raw_codewords(version);
    let num_short = info.num_blocks - raw % info.num_blocks;
    let short_len = raw / info.num_blocks;
    let short_data_len = short_len - info.ecc_per_block;

    let rs = ReedSolomonEncoder::new(info.ecc_per_block);
    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(info.num_blocks);
    let mut offset = 0;
    for i in 0..info.num_blocks {
        let len = short_data_len + usize::from(i >= num_short);
        let chunk = &data[offset..offset + len];
        offset += len;

        let mut block = Vec::with_capacity(short_len + 1);
        block.extend_from_slice(chunk);
        if i < num_short {
            // Placeholder keeping columns aligned with the long blocks
            block.push(0);
        }
        block.extend(rs.remainder(chunk));
        blocks.push(block);
    }

    let mut result = Vec::with_capacity(raw);
    for column in 0..=short_len {
        for (i, block) in blocks.iter().enumerate() {
            if column != short_data_len || i >= num_short {
                result.push(block[column]);
            }
        }
    }
    assert_eq!(result.len(), raw);
    result
}
