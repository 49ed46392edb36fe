//! Data masking
use crate::models::{BitMatrix, MaskPattern};

/// XOR `mask` over every module not owned by a function pattern.
///
/// Applying the same mask twice restores the original matrix.
pub fn apply_mask(modules: &mut BitMatrix, reserved: &BitMatrix, mask: MaskPattern) {
    let size = modules.width();
    for y in 0..size {
        for x in 0..size {
            if !reserved.get(x, y) && mask.is_masked(y, x) {
                modules.toggle(x, y);
            }
        }
    }
}
