use crate::error::{QrError, Result};

/// Square module grid with a parallel "reserved" plane.
///
/// Reserved cells belong to function patterns and metadata. Once a cell is
/// reserved, only a write that itself claims the reserved flag can change it,
/// so data placement and masking can never disturb a function pattern.
/// Both planes are packed eight modules to a byte, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    size: usize,
    modules: Vec<u8>,
    reserved: Vec<u8>,
}

impl QrMatrix {
    /// All-light matrix with nothing reserved
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            modules: vec![0; bytes_needed],
            reserved: vec![0; bytes_needed],
        }
    }

    /// Width and height in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module colour at column `x`, row `y` (true = dark).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> bool {
        let index = self.index(x, y);
        read_bit(&self.modules, index)
    }

    /// Checked variant of [`QrMatrix::get`]
    pub fn try_get(&self, x: usize, y: usize) -> Result<bool> {
        self.checked_index(x, y)
            .map(|index| read_bit(&self.modules, index))
    }

    /// Whether the module belongs to a function pattern or metadata area
    pub fn is_reserved(&self, x: usize, y: usize) -> bool {
        let index = self.index(x, y);
        read_bit(&self.reserved, index)
    }

    /// Write a module.
    ///
    /// With `reserve == false` the write is refused (returns false) if the cell
    /// is already reserved. With `reserve == true` the value is always written
    /// and the cell becomes reserved.
    pub fn set(&mut self, x: usize, y: usize, value: bool, reserve: bool) -> bool {
        let index = self.index(x, y);
        if !reserve && read_bit(&self.reserved, index) {
            return false;
        }
        write_bit(&mut self.modules, index, value);
        if reserve {
            write_bit(&mut self.reserved, index, true);
        }
        true
    }

    /// Invert a non-reserved module. Reserved modules are left alone (returns false).
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let index = self.index(x, y);
        if read_bit(&self.reserved, index) {
            return false;
        }
        let (byte, mask) = locate(index);
        self.modules[byte] ^= mask;
        true
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.modules.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Number of reserved modules
    pub fn reserved_count(&self) -> usize {
        self.reserved.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Number of modules available to the data stream
    pub fn data_module_count(&self) -> usize {
        self.size * self.size - self.reserved_count()
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.size || y >= self.size {
            return Err(QrError::ModuleOutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        match self.checked_index(x, y) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }
}

fn locate(index: usize) -> (usize, u8) {
    (index / 8, 1 << (index % 8))
}

fn read_bit(plane: &[u8], index: usize) -> bool {
    let (byte, mask) = locate(index);
    plane[byte] & mask != 0
}

fn write_bit(plane: &mut [u8], index: usize, value: bool) {
    let (byte, mask) = locate(index);
    if value {
        plane[byte] |= mask;
    } else {
        plane[byte] &= !mask;
    }
}
