//! Alphanumeric mode (0010)
//! Character set: 0-9, A-Z, space, $%*+-./:

use crate::encoder::BitBuffer;

const ALPHANUMERIC_TABLE: [u8; 45] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

// ASCII code -> table index, 0xFF for characters outside the set
static INDEX: [u8; 128] = build_index();

const fn build_index() -> [u8; 128] {
    let mut index = [0xFF; 128];
    let mut i = 0;
    while i < ALPHANUMERIC_TABLE.len() {
        index[ALPHANUMERIC_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    index
}

/// Table index of `c`, or `None` if it is not in the alphanumeric set
pub fn char_index(c: char) -> Option<u8> {
    let code = c as usize;
    if code < INDEX.len() && INDEX[code] != 0xFF {
        Some(INDEX[code])
    } else {
        None
    }
}

/// Alphanumeric mode packer
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// First character outside the 45-symbol set, with its position
    pub fn first_invalid(text: &str) -> Option<(usize, char)> {
        text.chars().enumerate().find(|&(_, c)| char_index(c).is_none())
    }

    /// Character count
    pub fn char_count(text: &str) -> usize {
        text.chars().count()
    }

    /// Bits for `char_count` characters
    pub fn payload_bits(char_count: usize) -> usize {
        (char_count / 2) * 11 + (char_count % 2) * 6
    }

    /// Pairs = 11 bits, single = 6 bits. `text` must hold only alphanumeric characters.
    pub(crate) fn encode(text: &str, buf: &mut BitBuffer) {
        let indices: Vec<u32> = text
            .chars()
            .map(|c| {
                let index = char_index(c);
                debug_assert!(index.is_some(), "{c:?} is not alphanumeric");
                u32::from(index.unwrap_or(0))
            })
            .collect();
        for pair in indices.chunks(2) {
            match *pair {
                [first, second] => buf.append_bits(first * 45 + second, 11),
                [single] => buf.append_bits(single, 6),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_index() {
        assert_eq!(char_index('0'), Some(0));
        assert_eq!(char_index('A'), Some(10));
        assert_eq!(char_index(' '), Some(36));
        assert_eq!(char_index(':'), Some(44));
        assert_eq!(char_index('a'), None);
        assert_eq!(char_index('!'), None);
        assert_eq!(char_index('\u{00C9}'), None);
    }

    #[test]
    fn test_alphanumeric_encode() {
        // "A1" = 10 * 45 + 1 = 451 = 0b00111000011 (11 bits)
        let mut buf = BitBuffer::new();
        AlphanumericEncoder::encode("A1", &mut buf);
        let bits: String = buf.iter().map(|b| if b { '1' } else { '0' }).collect();
        assert_eq!(bits, "00111000011");
    }

    #[test]
    fn test_odd_length() {
        // "HELLO WORLD": 5 pairs + 1 single
        let mut buf = BitBuffer::new();
        AlphanumericEncoder::encode("HELLO WORLD", &mut buf);
        assert_eq!(buf.len(), 61);
        assert_eq!(AlphanumericEncoder::payload_bits(11), 61);
        // trailing 'D' = 13
        let tail: u32 = (55..61).fold(0, |acc, i| (acc << 1) | buf.get_bit(i).unwrap() as u32);
        assert_eq!(tail, 13);
    }

    #[test]
    fn test_first_invalid() {
        assert_eq!(AlphanumericEncoder::first_invalid("HELLO WORLD"), None);
        assert_eq!(AlphanumericEncoder::first_invalid("Hello"), Some((1, 'e')));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not alphanumeric")]
    fn test_encode_refuses_characters_outside_set() {
        // dropping 'e' would leave the count indicator one character too long
        let mut buf = BitBuffer::new();
        AlphanumericEncoder::encode("HeLLO", &mut buf);
    }
}
