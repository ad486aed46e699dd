use crate::error::{QrError, Result};

/// Append-only bit stream, most significant bit first.
///
/// Bits are packed into bytes as they arrive; the backing `Vec` grows by
/// doubling, so appends are amortized O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    data: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            data: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of bits written so far
    pub fn len(&self) -> usize {
        self.len
    }

    /// True before the first append
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the `width` low bits of `value`, high bit first.
    pub fn append_bits(&mut self, value: u32, width: u8) {
        debug_assert!(width <= 32, "cannot append {width} bits from a u32");
        for i in (0..width).rev() {
            self.push_bit((value >> i) & 1 != 0);
        }
    }

    /// Append whole bytes
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        if self.len % 8 == 0 {
            self.data.extend_from_slice(bytes);
            self.len += bytes.len() * 8;
        } else {
            for &byte in bytes {
                self.append_bits(u32::from(byte), 8);
            }
        }
    }

    /// Append a single bit
    pub fn push_bit(&mut self, bit: bool) {
        let bit_in_byte = self.len % 8;
        if bit_in_byte == 0 {
            self.data.push(0);
        }
        if bit {
            let last = self.data.len() - 1;
            self.data[last] |= 0x80 >> bit_in_byte;
        }
        self.len += 1;
    }

    /// Read the bit at `index`
    pub fn get_bit(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(QrError::BitOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(self.bit(index))
    }

    fn bit(&self, index: usize) -> bool {
        (self.data[index / 8] >> (7 - index % 8)) & 1 != 0
    }

    /// Byte snapshot, `ceil(len / 8)` long, trailing partial byte zero-padded
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Bits in stream order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }
}
