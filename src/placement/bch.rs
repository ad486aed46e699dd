//! BCH codes protecting the format (15,5) and version (18,6) fields.

use crate::models::{ECLevel, MaskPattern, Version};

const FORMAT_GENERATOR: u32 = 0x537;
const FORMAT_XOR_MASK: u32 = 0x5412;
const VERSION_GENERATOR: u32 = 0x1F25;

/// Two-bit level indicator carried in the format field (L=01, M=00, Q=11, H=10)
pub fn ec_format_bits(ec_level: ECLevel) -> u32 {
    match ec_level {
        ECLevel::L => 0b01,
        ECLevel::M => 0b00,
        ECLevel::Q => 0b11,
        ECLevel::H => 0b10,
    }
}

/// Remainder of `data * x^degree` modulo `generator`, where `degree` is the
/// generator's degree.
fn remainder(data: u32, generator: u32) -> u32 {
    let degree = 31 - generator.leading_zeros();
    let mut rem = data;
    for _ in 0..degree {
        rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
    }
    rem
}

/// 15-bit format codeword for (level, mask), XOR-masked with 0x5412
pub fn format_codeword(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = (ec_format_bits(ec_level) << 3) | u32::from(mask.index());
    (((data << 10) | remainder(data, FORMAT_GENERATOR)) ^ FORMAT_XOR_MASK) as u16
}

/// 18-bit version codeword
pub fn version_codeword(version: Version) -> u32 {
    let data = u32::from(version.number());
    (data << 12) | remainder(data, VERSION_GENERATOR)
}
