//! Masking and penalty scoring.

use log::trace;

use super::format::apply_format_info;
use crate::models::{ECLevel, MaskPattern, QrMatrix};

const RUN_MIN: usize = 5;
const BLOCK_PENALTY: u32 = 3;
const FINDER_LIKE_PENALTY: u32 = 40;
const FINDER_LIKE: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];
const FINDER_LIKE_REVERSED: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];

/// Toggle every non-reserved module the pattern selects. Applying the same
/// mask twice restores the matrix.
pub fn apply_mask(matrix: &mut QrMatrix, mask: MaskPattern) {
    let size = matrix.size();
    for y in 0..size {
        for x in 0..size {
            if mask.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

/// Every row, then every column, as a vector of module colours
fn lines(matrix: &QrMatrix) -> impl Iterator<Item = Vec<bool>> + '_ {
    let size = matrix.size();
    let rows = (0..size)
        .map(move |y| (0..size).map(|x| matrix.get(x, y)).collect::<Vec<_>>());
    let columns = (0..size)
        .map(move |x| (0..size).map(|y| matrix.get(x, y)).collect::<Vec<_>>());
    rows.chain(columns)
}

/// Rule 1: each run of 5 or more same-coloured modules scores `length - 2`
pub fn penalty_rule1(matrix: &QrMatrix) -> u32 {
    lines(matrix)
        .map(|line| {
            line.chunk_by(|a, b| a == b)
                .map(<[bool]>::len)
                .filter(|&len| len >= RUN_MIN)
                .map(|len| (len - 2) as u32)
                .sum::<u32>()
        })
        .sum()
}

/// Rule 2: each uniform 2x2 block scores 3, overlaps included
pub fn penalty_rule2(matrix: &QrMatrix) -> u32 {
    let size = matrix.size();
    let mut penalty = 0;
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                penalty += BLOCK_PENALTY;
            }
        }
    }
    penalty
}

/// Rule 3: each 1:1:3:1:1 finder-like window with 4 light modules on one side scores 40
pub fn penalty_rule3(matrix: &QrMatrix) -> u32 {
    lines(matrix)
        .map(|line| {
            line.windows(FINDER_LIKE.len())
                .filter(|&w| w == &FINDER_LIKE[..] || w == &FINDER_LIKE_REVERSED[..])
                .count() as u32
                * FINDER_LIKE_PENALTY
        })
        .sum()
}

/// Rule 4: 10 points per full 5% step the dark share sits away from 50%
pub fn penalty_rule4(matrix: &QrMatrix) -> u32 {
    let total = matrix.size() * matrix.size();
    let dark = matrix.dark_count();
    let prev_five = (dark * 20 / total * 5) as i64;
    let next_five = prev_five + 5;
    let steps = (prev_five - 50).abs().min((next_five - 50).abs()) / 5;
    (steps * 10) as u32
}

/// Sum of all four rules
pub fn calculate_penalty(matrix: &QrMatrix) -> u32 {
    penalty_rule1(matrix) + penalty_rule2(matrix) + penalty_rule3(matrix) + penalty_rule4(matrix)
}

/// Penalty of one candidate: mask a copy, write its format bits, then score.
pub fn score_mask(matrix: &QrMatrix, ec_level: ECLevel, mask: MaskPattern) -> u32 {
    let mut candidate = matrix.clone();
    apply_mask(&mut candidate, mask);
    apply_format_info(&mut candidate, ec_level, mask);
    calculate_penalty(&candidate)
}

/// Lowest-penalty mask for a data-filled, unmasked matrix; the first of equal scores wins.
pub fn find_best_mask(matrix: &QrMatrix, ec_level: ECLevel) -> MaskPattern {
    let mut best = MaskPattern::Pattern0;
    let mut lowest = u32::MAX;
    for mask in MaskPattern::ALL {
        let penalty = score_mask(matrix, ec_level, mask);
        trace!("mask {}: penalty {penalty}", mask.index());
        if penalty < lowest {
            lowest = penalty;
            best = mask;
        }
    }
    best
}
