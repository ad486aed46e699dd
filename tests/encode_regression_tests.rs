//! Integration tests for QR code encoding regression testing
//!
//! These tests pin complete symbols (module for module) and the resolved
//! parameters of larger symbols, so any change to mode selection, Reed-Solomon,
//! placement, masking or format information shows up here.

use rust_qr_encoder::encoder::{compute_ecc, encode_text, tables};
use rust_qr_encoder::placement::calculate_penalty;
use rust_qr_encoder::placement::patterns::setup_patterns;
use rust_qr_encoder::{
    ECLevel, EncodeOptions, EncodedQr, MaskPattern, Mode, QrError, QrMatrix, Version, encode,
    encode_batch,
};

const GOLDEN_12345_M: [&str; 21] = [
    "111111101001101111111",
    "100000100100001000001",
    "101110100010101011101",
    "101110101010001011101",
    "101110101110101011101",
    "100000101011001000001",
    "111111101010101111111",
    "000000001111100000000",
    "100010111101011010001",
    "111110001001100101100",
    "010011111001001110001",
    "101001011010011011111",
    "011101110000111000001",
    "000000001100111000111",
    "111111101000110001010",
    "100000101001100101010",
    "101110101001001110111",
    "101110101011100101011",
    "101110100011001111100",
    "100000100010011010110",
    "111111101100111000111",
];

const GOLDEN_HELLO_WORLD_Q: [&str; 21] = [
    "111111100001001111111",
    "100000101100101000001",
    "101110100101101011101",
    "101110101111101011101",
    "101110101101001011101",
    "100000100100101000001",
    "111111101010101111111",
    "000000001101100000000",
    "010111101100110111010",
    "101111010000111101110",
    "001010110001001100000",
    "101101000101100011000",
    "110111111110111011111",
    "000000001000100101000",
    "111111101110011001111",
    "100000100010010010111",
    "101110101101001000111",
    "101110101011100010100",
    "101110100100001000011",
    "100000101110011100110",
    "111111100101000000010",
];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn options(ec_level: ECLevel) -> EncodeOptions {
    EncodeOptions::new().with_ec_level(ec_level)
}

fn rows(qr: &EncodedQr) -> Vec<String> {
    (0..qr.size())
        .map(|y| {
            (0..qr.size())
                .map(|x| if qr.get(x, y) { '1' } else { '0' })
                .collect()
        })
        .collect()
}

#[test]
fn test_golden_numeric_12345_m() {
    init_logging();
    let qr = encode("12345", &options(ECLevel::M)).unwrap();
    assert_eq!(qr.version().number(), 1);
    assert_eq!(qr.mode(), Mode::Numeric);
    assert_eq!(qr.mask_pattern(), MaskPattern::Pattern4);
    assert_eq!(rows(&qr), GOLDEN_12345_M);
    assert_eq!(calculate_penalty(qr.matrix()), 285);
}

#[test]
fn test_golden_alphanumeric_hello_world_q() {
    init_logging();
    let qr = encode("HELLO WORLD", &options(ECLevel::Q)).unwrap();
    assert_eq!(qr.version().number(), 1);
    assert_eq!(qr.mode(), Mode::Alphanumeric);
    assert_eq!(qr.mask_pattern(), MaskPattern::Pattern6);
    assert_eq!(rows(&qr), GOLDEN_HELLO_WORLD_Q);
    assert_eq!(calculate_penalty(qr.matrix()), 311);
}

#[test]
fn test_resolved_parameters() {
    init_logging();
    let long_url = "https://example.com/a/longer/path?query=value&x=1";
    let pangram = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 0123456789";
    let a150 = "a".repeat(150);
    let digits500 = "1234567890".repeat(50);
    let x400 = "x".repeat(400);
    let nines = "9".repeat(1200);

    // (text, level, version, mode, mask, penalty, dark modules)
    let cases: [(&str, ECLevel, u8, Mode, u8, u32, usize); 10] = [
        ("Hi!", ECLevel::M, 1, Mode::Byte, 2, 317, 232),
        ("01234567", ECLevel::M, 1, Mode::Numeric, 0, 251, 220),
        (long_url, ECLevel::H, 6, Mode::Byte, 0, 1078, 890),
        (a150.as_str(), ECLevel::L, 7, Mode::Byte, 1, 1184, 1021),
        (digits500.as_str(), ECLevel::Q, 13, Mode::Numeric, 7, 3008, 2444),
        (pangram, ECLevel::H, 5, Mode::Alphanumeric, 3, 961, 688),
        (x400.as_str(), ECLevel::M, 15, Mode::Byte, 0, 2156, 2940),
        (nines.as_str(), ECLevel::L, 15, Mode::Numeric, 0, 2615, 2982),
        ("12345", ECLevel::M, 1, Mode::Numeric, 4, 285, 234),
        ("HELLO WORLD", ECLevel::Q, 1, Mode::Alphanumeric, 6, 311, 230),
    ];

    for (text, ec, version, mode, mask, penalty, dark) in cases {
        let qr = encode(text, &options(ec)).unwrap();
        let label = &text[..text.len().min(16)];
        assert_eq!(qr.version().number(), version, "{label}");
        assert_eq!(qr.size(), 4 * (version as usize - 1) + 21, "{label}");
        assert_eq!(qr.mode(), mode, "{label}");
        assert_eq!(qr.mask_pattern().index(), mask, "{label}");
        assert_eq!(calculate_penalty(qr.matrix()), penalty, "{label}");
        assert_eq!(qr.matrix().dark_count(), dark, "{label}");
    }
}

#[test]
fn test_forced_mask_and_version() {
    let qr = encode(
        "HELLO WORLD",
        &options(ECLevel::Q).with_mask_pattern(MaskPattern::Pattern3),
    )
    .unwrap();
    assert_eq!(qr.mask_pattern(), MaskPattern::Pattern3);
    assert_eq!(calculate_penalty(qr.matrix()), 437);
    assert_eq!(qr.matrix().dark_count(), 216);

    let qr = encode("A", &options(ECLevel::L).with_version(Version::new(1).unwrap())).unwrap();
    assert_eq!(qr.mode(), Mode::Alphanumeric);
    assert_eq!(qr.mask_pattern(), MaskPattern::Pattern7);
    assert_eq!(calculate_penalty(qr.matrix()), 380);
}

#[test]
fn test_version_one_holds_26_codewords_at_every_level() {
    for ec in ECLevel::ALL {
        let stream = encode_text("A", ec, Some(Version::new(1).unwrap()), None).unwrap();
        assert_eq!(stream.bits.len(), 26 * 8);
    }
}

#[test]
fn test_padded_stream_matches_capacity_everywhere() {
    for version in Version::all() {
        for ec in ECLevel::ALL {
            let stream = encode_text("1", ec, Some(version), None).unwrap();
            assert_eq!(
                stream.data_codewords.len() * 8,
                tables::data_capacity_bits(version, ec),
                "{version}-{ec:?}"
            );
            assert_eq!(stream.bits.len(), tables::total_codewords(version) * 8);
        }
    }
}

#[test]
fn test_stream_fills_data_area() {
    // at most 7 remainder modules are left over after the last codeword
    for version in Version::all() {
        let mut matrix = QrMatrix::new(version.size());
        setup_patterns(&mut matrix, version);
        let data_modules = matrix.data_module_count();
        let stream_bits = tables::total_codewords(version) * 8;
        assert!(stream_bits <= data_modules, "version {version}");
        assert!(data_modules - stream_bits < 8, "version {version}");
    }
}

#[test]
fn test_matrix_size_formula() {
    for version in Version::all() {
        assert_eq!(version.size(), 4 * (version.number() as usize - 1) + 21);
    }
}

#[test]
fn test_reserved_set_is_deterministic() {
    for n in [1u8, 6, 7, 21, 40] {
        let version = Version::new(n).unwrap();
        let a = encode("A", &options(ECLevel::L).with_version(version)).unwrap();
        let b = encode("Z", &options(ECLevel::H).with_version(version)).unwrap();
        let size = a.size();
        for y in 0..size {
            for x in 0..size {
                assert_eq!(a.matrix().is_reserved(x, y), b.matrix().is_reserved(x, y));
            }
        }
    }
}

#[test]
fn test_function_patterns_survive_encoding() {
    let qr = encode("https://example.com", &EncodeOptions::default()).unwrap();
    let size = qr.size();
    // finder corners and cores
    for (x, y) in [
        (0, 0),
        (3, 3),
        (size - 1, 0),
        (size - 4, 3),
        (0, size - 1),
        (3, size - 4),
    ] {
        assert!(qr.get(x, y), "({x}, {y})");
    }
    // dark module
    assert!(qr.get(8, 4 * qr.version().number() as usize + 9));
    // timing
    for i in 8..size - 8 {
        assert_eq!(qr.get(i, 6), i % 2 == 0);
        assert_eq!(qr.get(6, i), i % 2 == 0);
    }
}

#[test]
fn test_known_reed_solomon_vectors() {
    assert_eq!(
        compute_ecc(
            &[32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17],
            10
        ),
        vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]
    );
    assert_eq!(
        compute_ecc(
            &[16, 32, 12, 86, 97, 128, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17],
            10
        ),
        vec![165, 36, 212, 193, 237, 54, 199, 135, 44, 85]
    );
}

#[test]
fn test_byte_mode_for_punctuation() {
    let qr = encode("Hi!", &options(ECLevel::M)).unwrap();
    assert_eq!(qr.mode(), Mode::Byte);
    assert_eq!(qr.version().number(), 1);
}

#[test]
fn test_utf8_payload() {
    // 6 characters, 9 octets
    let qr = encode("caf\u{00E9} \u{2713}", &EncodeOptions::default()).unwrap();
    assert_eq!(qr.mode(), Mode::Byte);
    assert_eq!(qr.version().number(), 1);
}

#[test]
fn test_errors() {
    assert!(matches!(
        encode("hello", &EncodeOptions::new().with_mode(Mode::Alphanumeric)),
        Err(QrError::InvalidCharacterForMode {
            character: 'h',
            position: 0,
            ..
        })
    ));
    assert!(matches!(
        encode(&"x".repeat(3000), &options(ECLevel::L)),
        Err(QrError::CapacityExceeded { version: 40, .. })
    ));
    assert!(matches!(
        encode(
            &"x".repeat(20),
            &options(ECLevel::H).with_version(Version::new(1).unwrap())
        ),
        Err(QrError::CapacityExceeded { version: 1, .. })
    ));
    assert!(matches!(
        Version::new(41),
        Err(QrError::OutOfRangeParameter {
            parameter: "version",
            ..
        })
    ));
    assert!(matches!(
        MaskPattern::from_index(9),
        Err(QrError::OutOfRangeParameter { .. })
    ));
    assert!(QrMatrix::new(21).try_get(0, 21).unwrap_err().is_internal());
}

#[test]
fn test_largest_symbols() {
    let qr = encode(&"7".repeat(7089), &options(ECLevel::L)).unwrap();
    assert_eq!(qr.version().number(), 40);
    assert_eq!(qr.size(), 177);
    assert!(encode(&"7".repeat(7090), &options(ECLevel::L)).is_err());
}

#[test]
fn test_batch_matches_sequential() {
    let texts: Vec<String> = (0..24)
        .map(|i| format!("ITEM-{i:04}/{}", "Z".repeat(i * 7)))
        .collect();
    let opts = options(ECLevel::Q);
    let batch = encode_batch(&texts, &opts);
    assert_eq!(batch.len(), texts.len());
    for (text, result) in texts.iter().zip(batch) {
        assert_eq!(result.unwrap(), encode(text, &opts).unwrap());
    }
}

#[test]
fn test_render_outputs() {
    let qr = encode("12345", &options(ECLevel::M)).unwrap();
    let text = qr.to_text();
    assert_eq!(text.lines().count(), 21);
    assert!(text.starts_with('\u{2588}'));

    let svg = qr.to_svg_string(10, 4);
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 290 290\""
    ));
    assert!(svg.contains("M40 40H50V50H40Z"));
    assert!(svg.ends_with("</svg>"));

    let img = qr.to_image(4, 2);
    assert_eq!(img.dimensions(), (100, 100));
    assert_eq!(img.get_pixel(0, 0).0, [255]);
    assert_eq!(img.get_pixel(8, 8).0, [0]);
}

#[test]
fn test_into_matrix_hands_over_the_grid() {
    let qr = encode("HELLO WORLD", &options(ECLevel::Q)).unwrap();
    let expected = qr.matrix().clone();
    let size = qr.size();
    let matrix = qr.into_matrix();
    assert_eq!(matrix.size(), size);
    assert_eq!(matrix, expected);
    for (y, row) in GOLDEN_HELLO_WORLD_Q.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            assert_eq!(matrix.get(x, y), c == '1');
        }
    }
}
