//! Reference tables from ISO/IEC 18004 (Model 2).
//!
//! Everything here is indexed by version number (1-40) and, where relevant, by
//! [`ECLevel::ordinal`] in L, M, Q, H order. Lookups take validated [`Version`]
//! and [`MaskPattern`] values, so they never go out of range.

use crate::models::{ECLevel, MaskPattern, Version};

/// One size-group of Reed-Solomon blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGroup {
    /// Number of blocks in the group
    pub count: usize,
    /// Data codewords per block
    pub data_words: usize,
    /// ECC codewords per block
    pub ecc_words: usize,
}

// Total codewords (data + ECC) per version. Index 0 unused.
static TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

// (block count, data words, ecc words) for up to two groups, [version - 1][level].
// A zero count marks an absent second group.
static BLOCK_GROUPS: [[[(u8, u8, u8); 2]; 4]; 40] = [
    // Version 1
    [
        [(1, 19, 7), (0, 0, 0)],
        [(1, 16, 10), (0, 0, 0)],
        [(1, 13, 13), (0, 0, 0)],
        [(1, 9, 17), (0, 0, 0)],
    ],
    // Version 2
    [
        [(1, 34, 10), (0, 0, 0)],
        [(1, 28, 16), (0, 0, 0)],
        [(1, 22, 22), (0, 0, 0)],
        [(1, 16, 28), (0, 0, 0)],
    ],
    // Version 3
    [
        [(1, 55, 15), (0, 0, 0)],
        [(1, 44, 26), (0, 0, 0)],
        [(2, 17, 18), (0, 0, 0)],
        [(2, 13, 22), (0, 0, 0)],
    ],
    // Version 4
    [
        [(1, 80, 20), (0, 0, 0)],
        [(2, 32, 18), (0, 0, 0)],
        [(2, 24, 26), (0, 0, 0)],
        [(4, 9, 16), (0, 0, 0)],
    ],
    // Version 5
    [
        [(1, 108, 26), (0, 0, 0)],
        [(2, 43, 24), (0, 0, 0)],
        [(2, 15, 18), (2, 16, 18)],
        [(2, 11, 22), (2, 12, 22)],
    ],
    // Version 6
    [
        [(2, 68, 18), (0, 0, 0)],
        [(4, 27, 16), (0, 0, 0)],
        [(4, 19, 24), (0, 0, 0)],
        [(4, 15, 28), (0, 0, 0)],
    ],
    // Version 7
    [
        [(2, 78, 20), (0, 0, 0)],
        [(4, 31, 18), (0, 0, 0)],
        [(2, 14, 18), (4, 15, 18)],
        [(4, 13, 26), (1, 14, 26)],
    ],
    // Version 8
    [
        [(2, 97, 24), (0, 0, 0)],
        [(2, 38, 22), (2, 39, 22)],
        [(4, 18, 22), (2, 19, 22)],
        [(4, 14, 26), (2, 15, 26)],
    ],
    // Version 9
    [
        [(2, 116, 30), (0, 0, 0)],
        [(3, 36, 22), (2, 37, 22)],
        [(4, 16, 20), (4, 17, 20)],
        [(4, 12, 24), (4, 13, 24)],
    ],
    // Version 10
    [
        [(2, 68, 18), (2, 69, 18)],
        [(4, 43, 26), (1, 44, 26)],
        [(6, 19, 24), (2, 20, 24)],
        [(6, 15, 28), (2, 16, 28)],
    ],
    // Version 11
    [
        [(4, 81, 20), (0, 0, 0)],
        [(1, 50, 30), (4, 51, 30)],
        [(4, 22, 28), (4, 23, 28)],
        [(3, 12, 24), (8, 13, 24)],
    ],
    // Version 12
    [
        [(2, 92, 24), (2, 93, 24)],
        [(6, 36, 22), (2, 37, 22)],
        [(4, 20, 26), (6, 21, 26)],
        [(7, 14, 28), (4, 15, 28)],
    ],
    // Version 13
    [
        [(4, 107, 26), (0, 0, 0)],
        [(8, 37, 22), (1, 38, 22)],
        [(8, 20, 24), (4, 21, 24)],
        [(12, 11, 22), (4, 12, 22)],
    ],
    // Version 14
    [
        [(3, 115, 30), (1, 116, 30)],
        [(4, 40, 24), (5, 41, 24)],
        [(11, 16, 20), (5, 17, 20)],
        [(11, 12, 24), (5, 13, 24)],
    ],
    // Version 15
    [
        [(5, 87, 22), (1, 88, 22)],
        [(5, 41, 24), (5, 42, 24)],
        [(5, 24, 30), (7, 25, 30)],
        [(11, 12, 24), (7, 13, 24)],
    ],
    // Version 16
    [
        [(5, 98, 24), (1, 99, 24)],
        [(7, 45, 28), (3, 46, 28)],
        [(15, 19, 24), (2, 20, 24)],
        [(3, 15, 30), (13, 16, 30)],
    ],
    // Version 17
    [
        [(1, 107, 28), (5, 108, 28)],
        [(10, 46, 28), (1, 47, 28)],
        [(1, 22, 28), (15, 23, 28)],
        [(2, 14, 28), (17, 15, 28)],
    ],
    // Version 18
    [
        [(5, 120, 30), (1, 121, 30)],
        [(9, 43, 26), (4, 44, 26)],
        [(17, 22, 28), (1, 23, 28)],
        [(2, 14, 28), (19, 15, 28)],
    ],
    // Version 19
    [
        [(3, 113, 28), (4, 114, 28)],
        [(3, 44, 26), (11, 45, 26)],
        [(17, 21, 26), (4, 22, 26)],
        [(9, 13, 26), (16, 14, 26)],
    ],
    // Version 20
    [
        [(3, 107, 28), (5, 108, 28)],
        [(3, 41, 26), (13, 42, 26)],
        [(15, 24, 30), (5, 25, 30)],
        [(15, 15, 28), (10, 16, 28)],
    ],
    // Version 21
    [
        [(4, 116, 28), (4, 117, 28)],
        [(17, 42, 26), (0, 0, 0)],
        [(17, 22, 28), (6, 23, 28)],
        [(19, 16, 30), (6, 17, 30)],
    ],
    // Version 22
    [
        [(2, 111, 28), (7, 112, 28)],
        [(17, 46, 28), (0, 0, 0)],
        [(7, 24, 30), (16, 25, 30)],
        [(34, 13, 24), (0, 0, 0)],
    ],
    // Version 23
    [
        [(4, 121, 30), (5, 122, 30)],
        [(4, 47, 28), (14, 48, 28)],
        [(11, 24, 30), (14, 25, 30)],
        [(16, 15, 30), (14, 16, 30)],
    ],
    // Version 24
    [
        [(6, 117, 30), (4, 118, 30)],
        [(6, 45, 28), (14, 46, 28)],
        [(11, 24, 30), (16, 25, 30)],
        [(30, 16, 30), (2, 17, 30)],
    ],
    // Version 25
    [
        [(8, 106, 26), (4, 107, 26)],
        [(8, 47, 28), (13, 48, 28)],
        [(7, 24, 30), (22, 25, 30)],
        [(22, 15, 30), (13, 16, 30)],
    ],
    // Version 26
    [
        [(10, 114, 28), (2, 115, 28)],
        [(19, 46, 28), (4, 47, 28)],
        [(28, 22, 28), (6, 23, 28)],
        [(33, 16, 30), (4, 17, 30)],
    ],
    // Version 27
    [
        [(8, 122, 30), (4, 123, 30)],
        [(22, 45, 28), (3, 46, 28)],
        [(8, 23, 30), (26, 24, 30)],
        [(12, 15, 30), (28, 16, 30)],
    ],
    // Version 28
    [
        [(3, 117, 30), (10, 118, 30)],
        [(3, 45, 28), (23, 46, 28)],
        [(4, 24, 30), (31, 25, 30)],
        [(11, 15, 30), (31, 16, 30)],
    ],
    // Version 29
    [
        [(7, 116, 30), (7, 117, 30)],
        [(21, 45, 28), (7, 46, 28)],
        [(1, 23, 30), (37, 24, 30)],
        [(19, 15, 30), (26, 16, 30)],
    ],
    // Version 30
    [
        [(5, 115, 30), (10, 116, 30)],
        [(19, 47, 28), (10, 48, 28)],
        [(15, 24, 30), (25, 25, 30)],
        [(23, 15, 30), (25, 16, 30)],
    ],
    // Version 31
    [
        [(13, 115, 30), (3, 116, 30)],
        [(2, 46, 28), (29, 47, 28)],
        [(42, 24, 30), (1, 25, 30)],
        [(23, 15, 30), (28, 16, 30)],
    ],
    // Version 32
    [
        [(17, 115, 30), (0, 0, 0)],
        [(10, 46, 28), (23, 47, 28)],
        [(10, 24, 30), (35, 25, 30)],
        [(19, 15, 30), (35, 16, 30)],
    ],
    // Version 33
    [
        [(17, 115, 30), (1, 116, 30)],
        [(14, 46, 28), (21, 47, 28)],
        [(29, 24, 30), (19, 25, 30)],
        [(11, 15, 30), (46, 16, 30)],
    ],
    // Version 34
    [
        [(13, 115, 30), (6, 116, 30)],
        [(14, 46, 28), (23, 47, 28)],
        [(44, 24, 30), (7, 25, 30)],
        [(59, 16, 30), (1, 17, 30)],
    ],
    // Version 35
    [
        [(12, 121, 30), (7, 122, 30)],
        [(12, 47, 28), (26, 48, 28)],
        [(39, 24, 30), (14, 25, 30)],
        [(22, 15, 30), (41, 16, 30)],
    ],
    // Version 36
    [
        [(6, 121, 30), (14, 122, 30)],
        [(6, 47, 28), (34, 48, 28)],
        [(46, 24, 30), (10, 25, 30)],
        [(2, 15, 30), (64, 16, 30)],
    ],
    // Version 37
    [
        [(17, 122, 30), (4, 123, 30)],
        [(29, 46, 28), (14, 47, 28)],
        [(49, 24, 30), (10, 25, 30)],
        [(24, 15, 30), (46, 16, 30)],
    ],
    // Version 38
    [
        [(4, 122, 30), (18, 123, 30)],
        [(13, 46, 28), (32, 47, 28)],
        [(48, 24, 30), (14, 25, 30)],
        [(42, 15, 30), (32, 16, 30)],
    ],
    // Version 39
    [
        [(20, 117, 30), (4, 118, 30)],
        [(40, 47, 28), (7, 48, 28)],
        [(43, 24, 30), (22, 25, 30)],
        [(10, 15, 30), (67, 16, 30)],
    ],
    // Version 40
    [
        [(19, 118, 30), (6, 119, 30)],
        [(18, 47, 28), (31, 48, 28)],
        [(34, 24, 30), (34, 25, 30)],
        [(20, 15, 30), (61, 16, 30)],
    ],
];

// Alignment pattern center coordinates per version. Index 0 unused.
static ALIGNMENT_POSITIONS: [&[u8]; 41] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// 15-bit format codewords, already XORed with 0x5412. [level][mask]
static FORMAT_INFO: [[u16; 8]; 4] = [
    [0x77c4, 0x72f3, 0x7daa, 0x789d, 0x662f, 0x6318, 0x6c41, 0x6976],
    [0x5412, 0x5125, 0x5e7c, 0x5b4b, 0x45f9, 0x40ce, 0x4f97, 0x4aa0],
    [0x355f, 0x3068, 0x3f31, 0x3a06, 0x24b4, 0x2183, 0x2eda, 0x2bed],
    [0x1689, 0x13be, 0x1ce7, 0x19d0, 0x0762, 0x0255, 0x0d0c, 0x083b],
];

// 18-bit version codewords for versions 7-40.
static VERSION_INFO: [u32; 34] = [
    0x07c94, 0x085bc, 0x09a99, 0x0a4d3, 0x0bbf6, 0x0c762,
    0x0d847, 0x0e60d, 0x0f928, 0x10b78, 0x1145d, 0x12a17,
    0x13532, 0x149a6, 0x15683, 0x168c9, 0x177ec, 0x18ec4,
    0x191e1, 0x1afab, 0x1b08e, 0x1cc1a, 0x1d33f, 0x1ed75,
    0x1f250, 0x209d5, 0x216f0, 0x228ba, 0x2379f, 0x24b0b,
    0x2542e, 0x26a64, 0x27541, 0x28c69,
];

/// Total codewords (data + ECC) in a symbol of this version
pub fn total_codewords(version: Version) -> usize {
    TOTAL_CODEWORDS[version.number() as usize] as usize
}

/// Block groups for (version, level), first group first
pub fn block_groups(version: Version, ec_level: ECLevel) -> Vec<BlockGroup> {
    BLOCK_GROUPS[version.number() as usize - 1][ec_level.ordinal()]
        .iter()
        .filter(|&&(count, _, _)| count > 0)
        .map(|&(count, data_words, ecc_words)| BlockGroup {
            count: count as usize,
            data_words: data_words as usize,
            ecc_words: ecc_words as usize,
        })
        .collect()
}

/// Total ECC codewords across all blocks
pub fn ecc_codewords(version: Version, ec_level: ECLevel) -> usize {
    block_groups(version, ec_level)
        .iter()
        .map(|g| g.count * g.ecc_words)
        .sum()
}

/// Data codewords available to the payload
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    total_codewords(version) - ecc_codewords(version, ec_level)
}

/// Data capacity in bits
pub fn data_capacity_bits(version: Version, ec_level: ECLevel) -> usize {
    data_codewords(version, ec_level) * 8
}

/// Alignment pattern centers (empty for version 1)
pub fn alignment_positions(version: Version) -> &'static [u8] {
    ALIGNMENT_POSITIONS[version.number() as usize]
}

/// Precomputed format codeword for (level, mask)
pub fn format_info(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    FORMAT_INFO[ec_level.ordinal()][mask.index() as usize]
}

/// Precomputed version codeword, `None` below version 7
pub fn version_info(version: Version) -> Option<u32> {
    let number = version.number() as usize;
    if number < 7 {
        None
    } else {
        Some(VERSION_INFO[number - 7])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_block_groups_partition_total() {
        for version in Version::all() {
            for ec in ECLevel::ALL {
                let groups = block_groups(version, ec);
                assert!(!groups.is_empty() && groups.len() <= 2);
                let total: usize = groups
                    .iter()
                    .map(|g| g.count * (g.data_words + g.ecc_words))
                    .sum();
                assert_eq!(total, total_codewords(version), "{version}-{ec:?}");
                if let [short, long] = groups.as_slice() {
                    assert_eq!(short.ecc_words, long.ecc_words);
                    assert_eq!(short.data_words + 1, long.data_words);
                }
            }
        }
    }

    #[test]
    fn test_known_capacities() {
        assert_eq!(total_codewords(v(1)), 26);
        assert_eq!(data_codewords(v(1), ECLevel::L), 19);
        assert_eq!(data_codewords(v(1), ECLevel::M), 16);
        assert_eq!(data_codewords(v(1), ECLevel::Q), 13);
        assert_eq!(data_codewords(v(1), ECLevel::H), 9);
        assert_eq!(data_codewords(v(40), ECLevel::L), 2956);
        assert_eq!(data_codewords(v(40), ECLevel::H), 1276);
        // groups that are easy to get wrong
        assert_eq!(ecc_codewords(v(12), ECLevel::H), 308);
        assert_eq!(ecc_codewords(v(20), ECLevel::H), 700);
        assert_eq!(ecc_codewords(v(26), ECLevel::H), 1110);
    }

    #[test]
    fn test_block_groups_sample() {
        assert_eq!(
            block_groups(v(5), ECLevel::Q),
            vec![
                BlockGroup { count: 2, data_words: 15, ecc_words: 18 },
                BlockGroup { count: 2, data_words: 16, ecc_words: 18 },
            ]
        );
        assert_eq!(block_groups(v(1), ECLevel::M).len(), 1);
    }

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_positions(v(1)).is_empty());
        assert_eq!(alignment_positions(v(2)), &[6, 18]);
        assert_eq!(alignment_positions(v(7)), &[6, 22, 38]);
        for version in Version::all().skip(1) {
            let positions = alignment_positions(version);
            assert_eq!(positions[0], 6);
            assert_eq!(*positions.last().unwrap() as usize, version.size() - 7);
            assert_eq!(positions.len(), version.number() as usize / 7 + 2);
        }
    }

    #[test]
    fn test_metadata_lookups() {
        assert_eq!(format_info(ECLevel::M, MaskPattern::Pattern0), 0x5412);
        assert_eq!(format_info(ECLevel::L, MaskPattern::Pattern7), 0x6976);
        assert_eq!(version_info(v(6)), None);
        assert_eq!(version_info(v(7)), Some(0x07c94));
        assert_eq!(version_info(v(40)), Some(0x28c69));
    }
}
