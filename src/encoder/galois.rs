use std::sync::OnceLock;

/// Reduction polynomial x^8 + x^4 + x^3 + x^2 + 1
const PRIMITIVE: u16 = 0x11D;

struct Tables {
    // exponent -> value, duplicated over 0..510 so products skip the modulo
    exp: [u8; 512],
    // value -> exponent, log[0] unused
    log: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        Tables { exp, log }
    })
}

/// GF(2^8) arithmetic over 0x11D
pub struct Gf256;

impl Gf256 {
    /// Multiply two field elements
    #[inline]
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    /// 2^`power`
    #[inline]
    pub fn exp(power: usize) -> u8 {
        tables().exp[power % 255]
    }

    /// Discrete log of a nonzero element
    #[inline]
    pub fn log(value: u8) -> u8 {
        debug_assert!(value != 0, "log(0) is undefined");
        tables().log[value as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_powers() {
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(1), 2);
        assert_eq!(Gf256::exp(7), 128);
        assert_eq!(Gf256::exp(8), 29);
        assert_eq!(Gf256::exp(255), 1);
    }

    #[test]
    fn test_mul() {
        assert_eq!(Gf256::mul(0, 77), 0);
        assert_eq!(Gf256::mul(1, 77), 77);
        assert_eq!(Gf256::mul(2, 128), 29);
        for a in 1..=255u8 {
            for b in [1u8, 3, 91, 200, 255] {
                assert_eq!(Gf256::mul(a, b), Gf256::mul(b, a));
            }
        }
    }

    #[test]
    fn test_log_inverts_exp() {
        for value in 1..=255u8 {
            assert_eq!(Gf256::exp(Gf256::log(value) as usize), value);
        }
    }
}
