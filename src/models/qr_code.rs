use std::fmt;

use super::QrMatrix;
use crate::error::{QrError, Result};
use crate::render;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest Model 2 symbol (21x21)
    pub const MIN: Version = Version(1);
    /// Largest Model 2 symbol (177x177)
    pub const MAX: Version = Version(40);

    /// Validate a version number
    pub fn new(number: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Version(number))
        } else {
            Err(QrError::OutOfRangeParameter {
                parameter: "version",
                value: i64::from(number),
                min: i64::from(Self::MIN.0),
                max: i64::from(Self::MAX.0),
            })
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize - 1) + 21
    }

    /// Every version, smallest first
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels in table order
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row index into the per-level reference tables
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        }
    }
}

/// Data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9, 10 bits per 3 digits
    Numeric,
    /// 0-9, A-Z, space and `$%*+-./:`, 11 bits per 2 characters
    Alphanumeric,
    /// UTF-8 octets, 8 bits each
    Byte,
}

impl Mode {
    /// 4-bit mode indicator written at the head of the segment
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count indicator for the given version
    pub fn char_count_bits(&self, version: Version) -> u8 {
        let v = version.number();
        match self {
            Mode::Byte => {
                if v < 10 {
                    8
                } else {
                    16
                }
            }
            Mode::Numeric => match v {
                1..=9 => 10,
                10..=26 => 12,
                _ => 14,
            },
            Mode::Alphanumeric => match v {
                1..=9 => 9,
                10..=26 => 11,
                _ => 13,
            },
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Search order used by the best-mask search
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its index
    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(QrError::OutOfRangeParameter {
                parameter: "mask pattern",
                value: i64::from(index),
                min: 0,
                max: 7,
            })
    }

    /// Index 0-7
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` is inverted by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// A finished symbol plus the parameters that were resolved while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQr {
    matrix: QrMatrix,
    version: Version,
    ec_level: ECLevel,
    mask_pattern: MaskPattern,
    mode: Mode,
}

impl EncodedQr {
    pub(crate) fn new(
        matrix: QrMatrix,
        version: Version,
        ec_level: ECLevel,
        mask_pattern: MaskPattern,
        mode: Mode,
    ) -> Self {
        Self {
            matrix,
            version,
            ec_level,
            mask_pattern,
            mode,
        }
    }

    /// The module grid
    pub fn matrix(&self) -> &QrMatrix {
        &self.matrix
    }

    /// Take ownership of the module grid
    pub fn into_matrix(self) -> QrMatrix {
        self.matrix
    }

    /// Resolved version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask applied to the data area
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Mode the payload was packed in
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Width and height in modules
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// True for a dark module at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.matrix.get(x, y)
    }

    /// SVG document, `module_size` user units per module
    pub fn to_svg_string(&self, module_size: usize, quiet_zone: usize) -> String {
        render::to_svg_string(&self.matrix, module_size, quiet_zone)
    }

    /// Text art, two characters per module
    pub fn to_text(&self) -> String {
        render::to_text(&self.matrix)
    }

    /// 8-bit grayscale raster
    pub fn to_image(&self, module_size: u32, quiet_zone: u32) -> image::GrayImage {
        render::to_image(&self.matrix, module_size, quiet_zone)
    }
}
