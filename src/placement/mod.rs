//! Matrix construction
//!
//! Turns the final codeword stream into a module grid:
//! - Function patterns (finders, timing, alignment, dark module)
//! - Zigzag data placement
//! - Mask search and penalty scoring
//! - Format and version information

/// BCH codes for format and version fields
pub mod bch;
/// Zigzag data placement
pub mod data;
/// Format and version information writer
pub mod format;
/// Mask formulas, penalty rules and best-mask search
pub mod mask;
/// Finder, timing and alignment patterns
pub mod patterns;

use log::debug;

use crate::encoder::BitBuffer;
use crate::models::{ECLevel, MaskPattern, QrMatrix, Version};

pub use mask::{calculate_penalty, find_best_mask, score_mask};

/// Lay out `bits` in a symbol of `version` and mask it.
///
/// `mask` of `None` runs the best-mask search. Returns the finished matrix
/// and the mask that was applied.
pub fn build_matrix(
    bits: &BitBuffer,
    version: Version,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
) -> (QrMatrix, MaskPattern) {
    let mut matrix = QrMatrix::new(version.size());
    patterns::setup_patterns(&mut matrix, version);

    let placed = data::fill_data(&mut matrix, bits);
    debug_assert_eq!(placed, bits.len());

    let mask = match mask {
        Some(mask) => mask,
        None => {
            let best = find_best_mask(&matrix, ec_level);
            debug!("mask search picked pattern {}", best.index());
            best
        }
    };

    mask::apply_mask(&mut matrix, mask);
    format::apply_format_info(&mut matrix, ec_level, mask);
    format::apply_version_info(&mut matrix, version);

    (matrix, mask)
}
