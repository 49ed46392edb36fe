//! Module storage

/// Packed grid of dark/light cells, addressed as (x = column, y = row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create an all-light square matrix
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y). Cells outside the grid read as light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set cell at (x, y); writes outside the grid are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Flip cell at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (byte_index, bit_index) = self.locate(x, y);
        self.data[byte_index] ^= 1 << bit_index;
    }

    /// Number of dark cells
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn locate(&self, x: usize, y: usize) -> (usize, usize) {
        let index = y * self.width + x;
        (index / 8, index % 8)
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
