//! Format and version information writer.
//!
//! Both fields go into cells reserved during pattern setup, so every write
//! here re-claims the reserved flag.

use crate::encoder::tables;
use crate::models::{ECLevel, MaskPattern, QrMatrix, Version};

fn bit(value: u32, index: usize) -> bool {
    (value >> index) & 1 != 0
}

/// Write the 15-bit format codeword for (level, mask) in both copies.
pub fn apply_format_info(matrix: &mut QrMatrix, ec_level: ECLevel, mask: MaskPattern) {
    let bits = u32::from(tables::format_info(ec_level, mask));
    let size = matrix.size();

    // First copy: column 8 going down, then row 8 going left
    for i in 0..6 {
        matrix.set(8, i, bit(bits, i), true);
    }
    matrix.set(8, 7, bit(bits, 6), true);
    matrix.set(8, 8, bit(bits, 7), true);
    matrix.set(7, 8, bit(bits, 8), true);
    for i in 9..15 {
        matrix.set(14 - i, 8, bit(bits, i), true);
    }

    // Second copy: bottom of column 8, then the right end of row 8
    for i in 0..7 {
        matrix.set(8, size - 1 - i, bit(bits, i), true);
    }
    for i in 0..8 {
        matrix.set(size - 8 + i, 8, bit(bits, 7 + i), true);
    }
}

/// Write the 18-bit version codeword (version 7 and up; otherwise a no-op).
pub fn apply_version_info(matrix: &mut QrMatrix, version: Version) {
    let Some(bits) = tables::version_info(version) else {
        return;
    };
    let size = matrix.size();

    for i in 0..6 {
        for j in 0..3 {
            let value = bit(bits, i * 3 + j);
            // top-right block is 3 wide, bottom-left block 3 tall
            matrix.set(size - 11 + j, i, value, true);
            matrix.set(i, size - 11 + j, value, true);
        }
    }
}
