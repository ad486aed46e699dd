//! Function pattern placement: finders, timing, dark module, alignment, and
//! the placeholder reservation for format/version information.

use crate::encoder::tables;
use crate::models::{QrMatrix, Version};

const FINDER_SIZE: usize = 7;
const TIMING_INDEX: usize = 6;

fn fill_rect(
    matrix: &mut QrMatrix,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    value: bool,
) {
    for dy in 0..height {
        for dx in 0..width {
            matrix.set(x + dx, y + dy, value, true);
        }
    }
}

/// 7x7 finder with its light separator. `origin` is the finder's top-left module.
fn place_finder_pattern(matrix: &mut QrMatrix, origin_x: usize, origin_y: usize) {
    // 8x8 light square covering the separator, shifted out of the matrix edge
    fill_rect(
        matrix,
        origin_x.saturating_sub(1),
        origin_y.saturating_sub(1),
        8,
        8,
        false,
    );
    fill_rect(matrix, origin_x, origin_y, 7, 7, true);
    fill_rect(matrix, origin_x + 1, origin_y + 1, 5, 5, false);
    fill_rect(matrix, origin_x + 2, origin_y + 2, 3, 3, true);
}

/// Timing lines on row 6 and column 6 between the separators, plus the dark module
fn place_timing_patterns(matrix: &mut QrMatrix, version: Version) {
    let size = matrix.size();
    for i in 8..size - 8 {
        let dark = i % 2 == 0;
        matrix.set(i, TIMING_INDEX, dark, true);
        matrix.set(TIMING_INDEX, i, dark, true);
    }
    matrix.set(8, 4 * version.number() as usize + 9, true, true);
}

fn place_alignment_pattern(matrix: &mut QrMatrix, center_x: usize, center_y: usize) {
    let far = matrix.size() - FINDER_SIZE;
    let on_finder = (center_x == 6 && center_y == 6)
        || (center_x == far && center_y == 6)
        || (center_x == 6 && center_y == far);
    if on_finder {
        return;
    }
    fill_rect(matrix, center_x - 2, center_y - 2, 5, 5, true);
    fill_rect(matrix, center_x - 1, center_y - 1, 3, 3, false);
    matrix.set(center_x, center_y, true, true);
}

/// Reserve light placeholders for the format strips and, from version 7, the
/// two version blocks. Cells already claimed by a pattern keep their value.
fn reserve_info_areas(matrix: &mut QrMatrix, version: Version) {
    let size = matrix.size();
    let mut reserve = |x: usize, y: usize| {
        if !matrix.is_reserved(x, y) {
            matrix.set(x, y, false, true);
        }
    };

    for i in 0..9 {
        reserve(8, i);
        reserve(i, 8);
    }
    for i in 0..8 {
        reserve(8, size - 1 - i);
        reserve(size - 1 - i, 8);
    }

    if version.number() >= 7 {
        fill_rect(matrix, 0, size - 11, 6, 3, false);
        fill_rect(matrix, size - 11, 0, 3, 6, false);
    }
}

/// Stamp every function pattern for `version` onto an empty matrix.
pub fn setup_patterns(matrix: &mut QrMatrix, version: Version) {
    let size = matrix.size();
    debug_assert_eq!(size, version.size());

    place_finder_pattern(matrix, 0, 0);
    place_finder_pattern(matrix, size - FINDER_SIZE, 0);
    place_finder_pattern(matrix, 0, size - FINDER_SIZE);

    place_timing_patterns(matrix, version);

    let positions = tables::alignment_positions(version);
    for &x in positions {
        for &y in positions {
            place_alignment_pattern(matrix, x as usize, y as usize);
        }
    }

    reserve_info_areas(matrix, version);
}
