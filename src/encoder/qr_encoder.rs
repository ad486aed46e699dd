//! Text to final codeword stream: mode and version selection, packing,
//! terminator and padding, then block split and interleave.

use log::debug;

use super::BitBuffer;
use super::blocks::{interleave, split_into_blocks};
use super::modes;
use super::tables;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Mode, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];
const TERMINATOR_BITS: usize = 4;
const MODE_INDICATOR_BITS: usize = 4;

/// Output of the data-encoding stage
#[derive(Debug, Clone)]
pub struct EncodedStream {
    /// Chosen or forced version
    pub version: Version,
    /// Requested level
    pub ec_level: ECLevel,
    /// Detected or forced mode
    pub mode: Mode,
    /// Padded data codewords, before block split
    pub data_codewords: Vec<u8>,
    /// Interleaved data + ECC codewords, ready for placement
    pub bits: BitBuffer,
}

/// Bits a segment needs at `version`, or `None` if the character count
/// overflows that version's count indicator.
fn segment_bits(mode: Mode, char_count: usize, version: Version) -> Option<usize> {
    let count_bits = mode.char_count_bits(version);
    if char_count >= 1usize << count_bits {
        return None;
    }
    Some(MODE_INDICATOR_BITS + count_bits as usize + modes::payload_bits(char_count, mode))
}

fn fits(mode: Mode, char_count: usize, version: Version, ec_level: ECLevel) -> bool {
    segment_bits(mode, char_count, version)
        .is_some_and(|bits| bits.div_ceil(8) <= tables::data_codewords(version, ec_level))
}

fn capacity_error(mode: Mode, char_count: usize, version: Version, ec_level: ECLevel) -> QrError {
    QrError::CapacityExceeded {
        required_bits: segment_bits(mode, char_count, version).unwrap_or_else(|| {
            MODE_INDICATOR_BITS
                + mode.char_count_bits(version) as usize
                + modes::payload_bits(char_count, mode)
        }),
        capacity_bits: tables::data_capacity_bits(version, ec_level),
        version: version.number(),
        ec_level,
    }
}

/// Smallest version that holds the segment, or the forced one if it fits
pub fn select_version(
    mode: Mode,
    char_count: usize,
    ec_level: ECLevel,
    forced: Option<Version>,
) -> Result<Version> {
    match forced {
        Some(version) if fits(mode, char_count, version, ec_level) => Ok(version),
        Some(version) => Err(capacity_error(mode, char_count, version, ec_level)),
        None => Version::all()
            .find(|&v| fits(mode, char_count, v, ec_level))
            .ok_or_else(|| capacity_error(mode, char_count, Version::MAX, ec_level)),
    }
}

/// Mode indicator, count, payload, terminator and pad bytes.
/// The result is exactly the data capacity of (version, level).
///
/// `text` must already be validated for `mode` and fit `version`.
pub(crate) fn build_data_codewords(
    text: &str,
    mode: Mode,
    version: Version,
    ec_level: ECLevel,
) -> Vec<u8> {
    let capacity_bits = tables::data_capacity_bits(version, ec_level);
    let char_count = modes::char_count(text, mode);

    let mut buf = BitBuffer::with_capacity(capacity_bits);
    buf.append_bits(mode.indicator(), MODE_INDICATOR_BITS as u8);
    buf.append_bits(char_count as u32, mode.char_count_bits(version));
    modes::append_payload(text, mode, &mut buf);
    debug_assert!(buf.len() <= capacity_bits);

    let terminator = TERMINATOR_BITS.min(capacity_bits - buf.len());
    buf.append_bits(0, terminator as u8);
    let align = (8 - buf.len() % 8) % 8;
    buf.append_bits(0, align as u8);

    for &pad in PAD_BYTES.iter().cycle() {
        if buf.len() >= capacity_bits {
            break;
        }
        buf.append_bits(u32::from(pad), 8);
    }
    debug_assert_eq!(buf.len(), capacity_bits);

    buf.to_bytes()
}

/// Run the whole data-encoding stage for `text`.
pub fn encode_text(
    text: &str,
    ec_level: ECLevel,
    version: Option<Version>,
    mode: Option<Mode>,
) -> Result<EncodedStream> {
    let mode = mode.unwrap_or_else(|| modes::detect_mode(text));
    modes::validate(text, mode)?;

    let char_count = modes::char_count(text, mode);
    let version = select_version(mode, char_count, ec_level, version)?;
    debug!(
        "data: {mode} mode, {char_count} chars, version {version}, level {}",
        ec_level.as_str()
    );

    let data_codewords = build_data_codewords(text, mode, version, ec_level);

    let groups = tables::block_groups(version, ec_level);
    let blocks = split_into_blocks(&data_codewords, &groups);
    debug!(
        "blocks: {} ({} data + {} ecc codewords)",
        blocks.len(),
        data_codewords.len(),
        tables::ecc_codewords(version, ec_level)
    );

    let stream = interleave(&blocks);
    debug_assert_eq!(stream.len(), tables::total_codewords(version));
    let mut bits = BitBuffer::with_capacity(stream.len() * 8);
    bits.append_bytes(&stream);

    Ok(EncodedStream {
        version,
        ec_level,
        mode,
        data_codewords,
        bits,
    })
}
