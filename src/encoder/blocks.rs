//! Block split and codeword interleaving.

use super::reed_solomon::ReedSolomonEncoder;
use super::tables::BlockGroup;

/// One Reed-Solomon block: its slice of the data stream plus computed ECC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodewordBlock {
    /// Data codewords
    pub data: Vec<u8>,
    /// Reed-Solomon codewords for `data`
    pub ecc: Vec<u8>,
}

/// Slice `data` into blocks group by group and compute each block's ECC.
///
/// `data` must hold exactly the groups' total data codewords.
pub fn split_into_blocks(data: &[u8], groups: &[BlockGroup]) -> Vec<CodewordBlock> {
    debug_assert_eq!(
        data.len(),
        groups.iter().map(|g| g.count * g.data_words).sum::<usize>()
    );

    let mut blocks = Vec::with_capacity(groups.iter().map(|g| g.count).sum());
    let mut offset = 0;
    for group in groups {
        let rs = ReedSolomonEncoder::new(group.ecc_words);
        for _ in 0..group.count {
            let chunk = &data[offset..offset + group.data_words];
            offset += group.data_words;
            blocks.push(CodewordBlock {
                data: chunk.to_vec(),
                ecc: rs.encode(chunk),
            });
        }
    }
    blocks
}

/// Column-major interleave: byte 0 of every block, then byte 1 of every block
/// that has one, and so on. Data columns come first, then ECC columns.
pub fn interleave(blocks: &[CodewordBlock]) -> Vec<u8> {
    let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
    let mut out = Vec::with_capacity(total);
    interleave_columns(blocks.iter().map(|b| b.data.as_slice()), &mut out);
    interleave_columns(blocks.iter().map(|b| b.ecc.as_slice()), &mut out);
    out
}

fn interleave_columns<'a>(rows: impl Iterator<Item = &'a [u8]> + Clone, out: &mut Vec<u8>) {
    let width = rows.clone().map(<[u8]>::len).max().unwrap_or(0);
    for column in 0..width {
        out.extend(rows.clone().filter_map(|row| row.get(column).copied()));
    }
}
