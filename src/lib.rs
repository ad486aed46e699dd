//! RustQR encoder - QR Code Model 2 generation in pure Rust
//!
//! Turns text into a bit-exact module matrix (ISO/IEC 18004): mode and version
//! selection, Reed-Solomon error correction, function patterns, zigzag data
//! placement, mask search, and format/version metadata. Rendering helpers for
//! SVG, text art and raster images sit on top of the matrix.
//!
//! ```
//! use rust_qr_encoder::{EncodeOptions, ECLevel, Mode, encode};
//!
//! let qr = encode("HELLO WORLD", &EncodeOptions::new().with_ec_level(ECLevel::Q)).unwrap();
//! assert_eq!(qr.version().number(), 1);
//! assert_eq!(qr.mode(), Mode::Alphanumeric);
//! assert_eq!(qr.size(), 21);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encode options, option-string parsing and environment defaults
pub mod config;
/// Data encoding (bit stream, modes, Reed-Solomon, tables, interleaving)
pub mod encoder;
/// Crate error type
pub mod error;
/// Core data structures (QrMatrix, Version, ECLevel, MaskPattern, Mode, EncodedQr)
pub mod models;
/// Matrix construction (patterns, data placement, masking, format info)
pub mod placement;
/// SVG, text and raster renderers
pub mod render;

pub use config::EncodeOptions;
pub use error::{QrError, Result};
pub use models::{ECLevel, EncodedQr, MaskPattern, Mode, QrMatrix, Version};

use log::debug;
use rayon::prelude::*;

/// Encode `text` into a QR symbol
///
/// # Arguments
/// * `text` - Payload; numeric, alphanumeric or byte (UTF-8) mode is picked
///   from its content unless `options.mode` forces one
/// * `options` - Level plus optional forced version, mode and mask
///
/// # Errors
/// `InvalidCharacterForMode` if a forced mode cannot carry the text,
/// `CapacityExceeded` if no allowed version holds it.
pub fn encode(text: &str, options: &EncodeOptions) -> Result<EncodedQr> {
    debug!("encode: {} bytes with {options:?}", text.len());

    let stream = encoder::encode_text(text, options.ec_level, options.version, options.mode)?;
    let (matrix, mask) = placement::build_matrix(
        &stream.bits,
        stream.version,
        stream.ec_level,
        options.mask_pattern,
    );

    debug!(
        "encoded version {} ({}x{}), mask {}",
        stream.version,
        matrix.size(),
        matrix.size(),
        mask.index()
    );
    Ok(EncodedQr::new(
        matrix,
        stream.version,
        stream.ec_level,
        mask,
        stream.mode,
    ))
}

/// Encode many texts in parallel with the same options
///
/// Results come back in input order; one failing text does not affect the others.
pub fn encode_batch<S>(texts: &[S], options: &EncodeOptions) -> Vec<Result<EncodedQr>>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| encode(text.as_ref(), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_defaults() {
        let qr = encode("12345", &EncodeOptions::default()).unwrap();
        assert_eq!(qr.version().number(), 1);
        assert_eq!(qr.ec_level(), ECLevel::M);
        assert_eq!(qr.mode(), Mode::Numeric);
        assert_eq!(qr.size(), 21);
    }

    #[test]
    fn test_encode_forced_mask() {
        let options = EncodeOptions::new().with_mask_pattern(MaskPattern::Pattern6);
        let qr = encode("Hi!", &options).unwrap();
        assert_eq!(qr.mask_pattern(), MaskPattern::Pattern6);
        assert_eq!(qr.mode(), Mode::Byte);
    }

    #[test]
    fn test_encode_empty_text() {
        let qr = encode("", &EncodeOptions::default()).unwrap();
        assert_eq!(qr.mode(), Mode::Byte);
        assert_eq!(qr.version().number(), 1);
    }

    #[test]
    fn test_encode_batch_keeps_order() {
        let long = "x".repeat(5000);
        let texts = ["1", "HELLO", "hello", long.as_str()];
        let results = encode_batch(&texts, &EncodeOptions::default());
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().mode(), Mode::Numeric);
        assert_eq!(results[1].as_ref().unwrap().mode(), Mode::Alphanumeric);
        assert_eq!(results[2].as_ref().unwrap().mode(), Mode::Byte);
        assert!(matches!(results[3], Err(QrError::CapacityExceeded { .. })));
    }
}
