use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use super::galois::Gf256;

static GENERATORS: OnceLock<Mutex<HashMap<usize, Arc<[u8]>>>> = OnceLock::new();

/// Generator polynomial `(x - 2^0)(x - 2^1)...(x - 2^(n-1))`.
///
/// Coefficients are returned highest degree first, so the result has
/// `ecc_len + 1` entries and starts with 1. Results are cached per `ecc_len`
/// for the life of the process.
pub fn generator_polynomial(ecc_len: usize) -> Arc<[u8]> {
    let cache = GENERATORS.get_or_init(|| Mutex::new(HashMap::new()));
    // a poisoned lock still holds valid entries; every insert is a complete polynomial
    let mut cache = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(ecc_len)
        .or_insert_with(|| build_generator(ecc_len))
        .clone()
}

fn build_generator(ecc_len: usize) -> Arc<[u8]> {
    let mut poly = vec![1u8];
    for i in 0..ecc_len {
        let root = Gf256::exp(i);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coef) in poly.iter().enumerate() {
            next[j] ^= coef;
            next[j + 1] ^= Gf256::mul(coef, root);
        }
        poly = next;
    }
    poly.into()
}

/// Systematic Reed-Solomon encoder for one ECC length
pub struct ReedSolomonEncoder {
    ecc_len: usize,
    generator: Arc<[u8]>,
}

impl ReedSolomonEncoder {
    /// Encoder producing `ecc_len` codewords per block
    pub fn new(ecc_len: usize) -> Self {
        Self {
            ecc_len,
            generator: generator_polynomial(ecc_len),
        }
    }

    /// Codewords produced per block
    pub fn ecc_len(&self) -> usize {
        self.ecc_len
    }

    /// Remainder of `data * x^ecc_len` divided by the generator
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut buf = vec![0u8; data.len() + self.ecc_len];
        buf[..data.len()].copy_from_slice(data);

        for i in 0..data.len() {
            let coef = buf[i];
            if coef == 0 {
                continue;
            }
            for (j, &g) in self.generator.iter().enumerate() {
                buf[i + j] ^= Gf256::mul(g, coef);
            }
        }

        buf.split_off(data.len())
    }
}

/// ECC codewords for one data block
pub fn compute_ecc(data: &[u8], ecc_len: usize) -> Vec<u8> {
    ReedSolomonEncoder::new(ecc_len).encode(data)
}
