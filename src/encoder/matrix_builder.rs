use rayon::prelude::*;

use crate::config;
use crate::encoder::mask::apply_mask;
use crate::encoder::penalty::penalty_score;
use crate::models::{BitMatrix, ECLevel, MaskPattern, MaskSelection, QrCode, Version};

/// Owns the module grid of one symbol under construction together with the
/// reserved grid marking cells that belong to function patterns.
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    version: Version,
    modules: BitMatrix,
    reserved: BitMatrix,
}

impl MatrixBuilder {
    /// Allocate an all-light, unreserved grid for `version`
    pub fn new(version: Version) -> Self {
        let size = version.size();
        Self {
            version,
            modules: BitMatrix::square(size),
            reserved: BitMatrix::square(size),
        }
    }

    /// Version being built
    pub fn version(&self) -> Version {
        self.version
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.version.size()
    }

    /// Current module colors
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Cells owned by function patterns
    pub fn reserved(&self) -> &BitMatrix {
        &self.reserved
    }

    /// Set a module and mark it reserved
    pub(crate) fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.reserved.set(x, y, true);
    }

    /// Write the codeword stream in the two-column zigzag, starting at the
    /// bottom-right corner, skipping the vertical timing column and reserved
    /// cells. Remainder cells past the last codeword stay light.
    pub fn place_codewords(&mut self, codewords: &[u8]) {
        let size = self.size();
        let total_bits = codewords.len() * 8;
        let mut index = 0;

        let mut right = size - 1;
        loop {
            if right == 6 {
                right = 5;
            }
            let upward = (right + 1) & 2 == 0;
            for vert in 0..size {
                let y = if upward { size - 1 - vert } else { vert };
                for x in [right, right - 1] {
                    if !self.reserved.get(x, y) && index < total_bits {
                        let dark = (codewords[index >> 3] >> (7 - (index & 7))) & 1 == 1;
                        self.modules.set(x, y, dark);
                        index += 1;
                    }
                }
            }
            if right < 2 {
                break;
            }
            right -= 2;
        }
        assert_eq!(index, total_bits, "codewords did not fit the symbol");
    }

    /// XOR a mask over the data region; applying it twice undoes it
    pub fn apply_mask(&mut self, mask: MaskPattern) {
        apply_mask(&mut self.modules, &self.reserved, mask);
    }

    /// Score a mask candidate on a copy, as it would look once committed
    pub fn candidate_penalty(&self, ec_level: ECLevel, mask: MaskPattern) -> u32 {
        let mut candidate = self.clone();
        candidate.apply_mask(mask);
        candidate.draw_format_bits(ec_level, mask);
        let score = penalty_score(&candidate.modules);
        tracing::trace!(mask = mask.index(), score, "scored mask candidate");
        score
    }

    /// Pick the lowest-penalty mask, ties going to the lower index
    pub fn choose_mask(&self, ec_level: ECLevel) -> MaskPattern {
        let score = |&mask: &MaskPattern| (self.candidate_penalty(ec_level, mask), mask.index());
        let best = if config::parallel_mask_search() {
            MaskPattern::ALL
                .par_iter()
                .map(|mask| (score(mask), *mask))
                .min_by_key(|&(key, _)| key)
        } else {
            MaskPattern::ALL
                .iter()
                .map(|mask| (score(mask), *mask))
                .min_by_key(|&(key, _)| key)
        };
        let ((penalty, _), mask) = best.unwrap_or(((0, 0), MaskPattern::Pattern0));
        tracing::debug!(mask = mask.index(), penalty, "selected mask");
        mask
    }

    /// Commit the mask and final format information and hand out the symbol
    pub fn finish(mut self, ec_level: ECLevel, selection: MaskSelection) -> QrCode {
        let mask = match selection {
            MaskSelection::Auto => self.choose_mask(ec_level),
            MaskSelection::Fixed(mask) => mask,
        };
        self.apply_mask(mask);
        self.draw_format_bits(ec_level, mask);
        QrCode {
            version: self.version,
            error_correction: ec_level,
            mask_pattern: mask,
            modules: self.modules,
        }
    }
}
