use crate::encoder::bch::{format_bits, version_bits};
use crate::encoder::matrix_builder::MatrixBuilder;
use crate::models::{ECLevel, MaskPattern, Version};

impl MatrixBuilder {
    /// Draw every structural pattern and reserve the format area.
    ///
    /// Format information is stamped for mask 0 as a placeholder; the final
    /// value is written once the mask is chosen.
    pub(crate) fn draw_function_patterns(&mut self, ec_level: ECLevel) {
        let size = self.size();

        // Timing patterns (row 6 and column 6); finders overwrite the ends
        for i in 0..size {
            self.set_function(6, i, i % 2 == 0);
            self.set_function(i, 6, i % 2 == 0);
        }

        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        let align = alignment_pattern_positions(self.version());
        let last = align.len().saturating_sub(1);
        for (i, &x) in align.iter().enumerate() {
            for (j, &y) in align.iter().enumerate() {
                // Skip the three finder corners
                if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                    continue;
                }
                self.draw_alignment_pattern(x, y);
            }
        }

        self.draw_format_bits(ec_level, MaskPattern::Pattern0);
        self.draw_version_bits();
    }

    /// Stamp both copies of the 15-bit format field plus the dark module
    pub(crate) fn draw_format_bits(&mut self, ec_level: ECLevel, mask: MaskPattern) {
        let bits = format_bits(ec_level, mask);
        let bit = |i: usize| (bits >> i) & 1 == 1;
        let size = self.size();

        // Copy around the top-left finder
        for i in 0..6 {
            self.set_function(8, i, bit(i));
        }
        self.set_function(8, 7, bit(6));
        self.set_function(8, 8, bit(7));
        self.set_function(7, 8, bit(8));
        for i in 9..15 {
            self.set_function(14 - i, 8, bit(i));
        }

        // Copy split between the other two finders
        for i in 0..8 {
            self.set_function(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            self.set_function(8, size - 15 + i, bit(i));
        }
        self.set_function(8, size - 8, true);
    }

    /// Two mirrored 6x3 copies of the version field, versions 7 and up
    fn draw_version_bits(&mut self) {
        if self.version().number() < 7 {
            return;
        }
        let bits = version_bits(self.version());
        let size = self.size();
        for i in 0..18 {
            let dark = (bits >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            self.set_function(a, b, dark);
            self.set_function(b, a, dark);
        }
    }

    /// 7x7 finder centred at (cx, cy) with its light separator ring, clipped to the grid
    fn draw_finder_pattern(&mut self, cx: usize, cy: usize) {
        let size = self.size() as isize;
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if (0..size).contains(&x) && (0..size).contains(&y) {
                    let dist = dx.abs().max(dy.abs());
                    self.set_function(x as usize, y as usize, dist != 2 && dist != 4);
                }
            }
        }
    }

    /// 5x5 alignment pattern centred at (cx, cy)
    fn draw_alignment_pattern(&mut self, cx: usize, cy: usize) {
        for dy in 0..5usize {
            for dx in 0..5usize {
                let dist = dx.abs_diff(2).max(dy.abs_diff(2));
                self.set_function(cx + dx - 2, cy + dy - 2, dist != 1);
            }
        }
    }
}

/// Alignment pattern centre coordinates for a version, ascending.
///
/// The same list is used for rows and columns. Version 1 has none.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = if v == 32 {
        26
    } else {
        (v * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };

    let last = version.size() - 7;
    let mut positions = Vec::with_capacity(num_align);
    positions.push(6);
    positions.extend((0..num_align - 1).rev().map(|k| last - k * step));
    positions
}
