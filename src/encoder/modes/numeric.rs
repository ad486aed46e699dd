//! Numeric mode (0001): 3 digits in 10 bits, a trailing pair in 7, a single in 4.

use crate::encoder::BitBuffer;

/// Numeric mode packer
pub struct NumericEncoder;

impl NumericEncoder {
    /// Index of the first non-digit, if any
    pub fn first_invalid(text: &str) -> Option<(usize, char)> {
        text.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
    }

    /// Digit count (digits are single bytes)
    pub fn char_count(text: &str) -> usize {
        text.len()
    }

    /// Bits for `char_count` digits
    pub fn payload_bits(char_count: usize) -> usize {
        const TAIL: [usize; 3] = [0, 4, 7];
        (char_count / 3) * 10 + TAIL[char_count % 3]
    }

    /// Pack already-validated digits into `buf`
    pub(crate) fn encode(text: &str, buf: &mut BitBuffer) {
        debug_assert!(text.bytes().all(|d| d.is_ascii_digit()), "non-digit in numeric payload");
        for chunk in text.as_bytes().chunks(3) {
            let value = chunk
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'));
            let width = match chunk.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            buf.append_bits(value, width);
        }
    }
}
