//! Zigzag data placement.

use crate::encoder::BitBuffer;
use crate::models::QrMatrix;

const TIMING_COLUMN: usize = 6;

/// Non-reserved module coordinates `(x, y)` in placement order.
///
/// Two-column strips from the right edge, the first sweeping upward and then
/// alternating; within a row the right column comes before the left. The
/// timing column is stepped over.
pub fn data_positions(matrix: &QrMatrix) -> Vec<(usize, usize)> {
    let size = matrix.size();
    let mut positions = Vec::with_capacity(matrix.data_module_count());
    let mut right = size - 1;
    let mut upward = true;

    loop {
        if right == TIMING_COLUMN {
            right -= 1;
        }
        for step in 0..size {
            let y = if upward { size - 1 - step } else { step };
            for x in [right, right - 1] {
                if !matrix.is_reserved(x, y) {
                    positions.push((x, y));
                }
            }
        }
        upward = !upward;
        if right < 3 {
            break;
        }
        right -= 2;
    }

    positions
}

/// Write `bits` into the data area in zigzag order. Cells beyond the end of
/// the stream stay light. Returns the number of bits placed.
pub fn fill_data(matrix: &mut QrMatrix, bits: &BitBuffer) -> usize {
    let positions = data_positions(matrix);
    let mut placed = 0;
    for ((x, y), bit) in positions.into_iter().zip(bits.iter()) {
        matrix.set(x, y, bit, false);
        placed += 1;
    }
    placed
}
