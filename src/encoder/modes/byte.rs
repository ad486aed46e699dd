//! Byte mode (0100): the UTF-8 encoding of the text, 8 bits per octet.

use crate::encoder::BitBuffer;

/// Byte mode packer
pub struct ByteEncoder;

impl ByteEncoder {
    /// Octet count, which is what the character count indicator carries
    pub fn char_count(text: &str) -> usize {
        text.len()
    }

    /// Bits for `char_count` octets
    pub fn payload_bits(char_count: usize) -> usize {
        char_count * 8
    }

    /// Append every octet of `text`
    pub(crate) fn encode(text: &str, buf: &mut BitBuffer) {
        buf.append_bytes(text.as_bytes());
    }
}
