//! Data mode encoders
//!
//! - Numeric: digits (0-9)
//! - Alphanumeric: upper-case letters, digits, and ` $%*+-./:`
//! - Byte: anything else, as UTF-8

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::ByteEncoder;
pub use numeric::NumericEncoder;

use super::BitBuffer;
use crate::error::{QrError, Result};
use crate::models::Mode;

/// Pick the most compact mode that can represent `text`.
/// Empty text falls through to byte mode.
pub fn detect_mode(text: &str) -> Mode {
    if text.is_empty() {
        Mode::Byte
    } else if NumericEncoder::first_invalid(text).is_none() {
        Mode::Numeric
    } else if AlphanumericEncoder::first_invalid(text).is_none() {
        Mode::Alphanumeric
    } else {
        Mode::Byte
    }
}

/// Reject the first character `mode` cannot carry
pub fn validate(text: &str, mode: Mode) -> Result<()> {
    let invalid = match mode {
        Mode::Numeric => NumericEncoder::first_invalid(text),
        Mode::Alphanumeric => AlphanumericEncoder::first_invalid(text),
        Mode::Byte => None,
    };
    match invalid {
        Some((position, character)) => Err(QrError::InvalidCharacterForMode {
            character,
            position,
            mode,
        }),
        None => Ok(()),
    }
}

/// Value written to the character count indicator
pub fn char_count(text: &str, mode: Mode) -> usize {
    match mode {
        Mode::Numeric => NumericEncoder::char_count(text),
        Mode::Alphanumeric => AlphanumericEncoder::char_count(text),
        Mode::Byte => ByteEncoder::char_count(text),
    }
}

/// Payload length in bits, excluding mode indicator and count
pub fn payload_bits(char_count: usize, mode: Mode) -> usize {
    match mode {
        Mode::Numeric => NumericEncoder::payload_bits(char_count),
        Mode::Alphanumeric => AlphanumericEncoder::payload_bits(char_count),
        Mode::Byte => ByteEncoder::payload_bits(char_count),
    }
}

/// Append the packed payload of validated `text`
pub(crate) fn append_payload(text: &str, mode: Mode, buf: &mut BitBuffer) {
    match mode {
        Mode::Numeric => NumericEncoder::encode(text, buf),
        Mode::Alphanumeric => AlphanumericEncoder::encode(text, buf),
        Mode::Byte => ByteEncoder::encode(text, buf),
    }
}
