//! Error type shared by every stage of the encode pipeline.

use thiserror::Error;

use crate::models::{ECLevel, Mode};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QrError>;

/// Everything that can go wrong while turning text into a QR matrix.
///
/// All failures are synchronous: either a complete symbol is produced or one of
/// these is returned before anything is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// An option string (ECC level, mode, version, mask) could not be parsed.
    #[error("invalid {option}: \"{value}\" (expected {expected})")]
    InvalidOption {
        /// Which option was being parsed
        option: &'static str,
        /// The rejected input
        value: String,
        /// Human-readable list of accepted values
        expected: &'static str,
    },

    /// The payload does not fit in any allowed version at the requested level.
    #[error(
        "data too long: {required_bits} bits needed, version {version} at level {ec_level:?} holds {capacity_bits}"
    )]
    CapacityExceeded {
        /// Bits the segment needs, header included
        required_bits: usize,
        /// Data capacity of `version` at `ec_level`
        capacity_bits: usize,
        /// Largest version tried
        version: u8,
        /// Requested level
        ec_level: ECLevel,
    },

    /// The text contains a character the selected mode cannot represent.
    #[error("character {character:?} at position {position} is not valid in {mode} mode")]
    InvalidCharacterForMode {
        /// First offending character
        character: char,
        /// Its index in characters, not bytes
        position: usize,
        /// Mode it was checked against
        mode: Mode,
    },

    /// A numeric parameter lies outside the domain of the reference tables.
    #[error("{parameter} {value} is out of range ({min}..={max})")]
    OutOfRangeParameter {
        /// Parameter name
        parameter: &'static str,
        /// Value supplied
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },

    /// A matrix coordinate outside `[0, size)`. Indicates a defect, not bad input.
    #[error("module ({x}, {y}) is outside a {size}x{size} matrix")]
    ModuleOutOfBounds {
        /// Column
        x: usize,
        /// Row
        y: usize,
        /// Matrix width
        size: usize,
    },

    /// A bit index past the end of a bit buffer.
    #[error("bit index {index} out of range [0, {length})")]
    BitOutOfBounds {
        /// Requested bit
        index: usize,
        /// Bits in the buffer
        length: usize,
    },
}

impl QrError {
    /// True for the internal-bounds family, which only an implementation bug can trigger.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            QrError::ModuleOutOfBounds { .. } | QrError::BitOutOfBounds { .. }
        )
    }
}
