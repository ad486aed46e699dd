//! QR code data encoding
//!
//! Everything that happens before the matrix exists:
//! - Bit accumulation and mode-specific packing (numeric, alphanumeric, byte)
//! - Version selection against the capacity tables
//! - Reed-Solomon error correction over GF(256)
//! - Block split and codeword interleaving

/// MSB-first growable bit stream
pub mod bit_buffer;
/// Block split and interleave
pub mod blocks;
/// GF(256) log/antilog tables
pub mod galois;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Mode/version selection and the final codeword stream
pub mod qr_encoder;
/// Reed-Solomon ECC generation
pub mod reed_solomon;
/// Capacity, block and layout tables
pub mod tables;

pub use bit_buffer::BitBuffer;
pub use qr_encoder::{EncodedStream, encode_text};
pub use reed_solomon::{ReedSolomonEncoder, compute_ecc, generator_polynomial};
