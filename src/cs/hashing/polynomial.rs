//! # Polynomial String Hash
//!
//! This module implements the **polynomial hash** used to place strings into buckets,
//! plus a **position-sensitive rolling window** built from the same parameters.
//!
//! The hash treats every byte of a string as a coefficient of a polynomial in the
//! multiplier `x`, read from the **last** byte to the first with Horner's rule:
//!
//! `h(s) = ((((s[k-1]) * x + s[k-2]) * x + ...) * x + s[0]) mod p`
//!
//! which is `Σ s[i] * x^i mod p`. Bucket placement reduces a second time by the
//! bucket count.
//!
//! ## Key Features
//! - **Configurable** multiplier and prime modulus through [`PolyHashBuilder`].
//! - Defaults of `x = 263` and `p = 1_000_000_007`.
//! - [`PolynomialWindow`], a [`RollingChecksum`] that can replace the additive
//!   checksum in substring search for fewer false candidates.
//!
//! **Note**: This is **not** cryptographically secure.

use log::debug;
use num_prime::nt_funcs::is_prime64;

use crate::cs::hashing::checksum::RollingChecksum;
use crate::error::{Error, Result};

/// Default multiplier (the polynomial's variable).
pub const DEFAULT_MULTIPLIER: u64 = 263;
/// Default modulus, a prime just above 10^9.
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;
/// Moduli must stay below 2^32 so `h * x + c` never leaves `u64`.
const MODULUS_LIMIT: u64 = 1 << 32;

/// A builder for [`PolynomialHash`], allowing you to set the multiplier and modulus.
#[derive(Debug, Clone)]
pub struct PolyHashBuilder {
    multiplier: u64,
    modulus: u64,
}

impl Default for PolyHashBuilder {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolyHashBuilder {
    /// Creates a new builder with the default multiplier and modulus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the multiplier. Must be at least 2 and below the modulus.
    pub fn with_multiplier(mut self, multiplier: u64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the modulus. Must be a prime below 2^32.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Validates the parameters and builds the hash.
    pub fn build(self) -> Result<PolynomialHash> {
        if self.modulus >= MODULUS_LIMIT {
            return Err(Error::InvalidParameter(format!(
                "modulus {} must be below 2^32",
                self.modulus
            )));
        }
        if !is_prime64(self.modulus) {
            return Err(Error::InvalidParameter(format!(
                "modulus {} is not prime",
                self.modulus
            )));
        }
        if self.multiplier < 2 || self.multiplier >= self.modulus {
            return Err(Error::InvalidParameter(format!(
                "multiplier {} must lie in [2, {})",
                self.multiplier, self.modulus
            )));
        }
        debug!(
            "polynomial hash configured: multiplier={}, modulus={}",
            self.multiplier, self.modulus
        );
        Ok(PolynomialHash {
            multiplier: self.multiplier,
            modulus: self.modulus,
        })
    }
}

/// Polynomial hash parameters. Stateless; hashing a string is a pure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialHash {
    multiplier: u64,
    modulus: u64,
}

impl Default for PolynomialHash {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolynomialHash {
    /// The default 263 / 1_000_000_007 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Hashes `s` into `[0, modulus)`, scanning from the last byte to the first.
    pub fn hash(&self, s: impl AsRef<[u8]>) -> u64 {
        s.as_ref().iter().rev().fold(0, |acc, &b| {
            add_mod(mul_mod(acc, self.multiplier, self.modulus), b as u64, self.modulus)
        })
    }

    /// Reduces the hash of `s` to a bucket index in `[0, bucket_count)`.
    ///
    /// `bucket_count` must be non-zero.
    pub fn bucket(&self, s: impl AsRef<[u8]>, bucket_count: usize) -> usize {
        debug_assert!(bucket_count > 0);
        (self.hash(s) % bucket_count as u64) as usize
    }

    /// `multiplier^exp mod modulus` by square-and-multiply.
    pub fn pow(&self, mut exp: usize) -> u64 {
        let mut base = self.multiplier;
        let mut acc = 1 % self.modulus;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = mul_mod(acc, base, self.modulus);
            }
            base = mul_mod(base, base, self.modulus);
            exp >>= 1;
        }
        acc
    }
}

/// Hashes `s` with the default parameters.
pub fn polynomial_hash(s: impl AsRef<[u8]>) -> u64 {
    PolynomialHash::default().hash(s)
}

/// A rolling polynomial checksum over a fixed-size window.
///
/// The window is read head-first (`Σ w[j] * x^(m-1-j)`), so sliding right is
/// `((h - out * x^(m-1)) * x + in) mod p` with no modular inverse.
#[derive(Debug, Clone)]
pub struct PolynomialWindow {
    hash: PolynomialHash,
    /// `x^(m-1)` for the current window length `m`.
    high_power: u64,
    value: u64,
}

impl PolynomialWindow {
    pub fn new(hash: PolynomialHash) -> Self {
        Self {
            hash,
            high_power: 1,
            value: 0,
        }
    }
}

impl Default for PolynomialWindow {
    fn default() -> Self {
        Self::new(PolynomialHash::default())
    }
}

impl RollingChecksum for PolynomialWindow {
    fn init(&mut self, window: &[u8]) {
        let (x, p) = (self.hash.multiplier, self.hash.modulus);
        self.high_power = self.hash.pow(window.len().saturating_sub(1));
        self.value = window
            .iter()
            .fold(0, |acc, &b| add_mod(mul_mod(acc, x, p), b as u64, p));
    }

    fn roll(&mut self, outgoing: u8, incoming: u8) {
        let (x, p) = (self.hash.multiplier, self.hash.modulus);
        let lead = mul_mod(outgoing as u64, self.high_power, p);
        let shifted = mul_mod(sub_mod(self.value, lead, p), x, p);
        self.value = add_mod(shifted, incoming as u64, p);
    }

    fn value(&self) -> u64 {
        self.value
    }
}

// internal ops

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    let s = a + b;
    if s >= m {
        s % m
    } else {
        s
    }
}

#[inline]
fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        (a + m) - b
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        let h = PolynomialHash::default();
        assert_eq!(h.hash(""), 0);
        assert_eq!(h.hash("a"), 97);
        // 'b' * 263 + 'a'
        assert_eq!(h.hash("ab"), 98 * 263 + 97);
        assert_eq!(polynomial_hash("ab"), h.hash(b"ab"));
    }

    #[test]
    fn test_bucket_placement() {
        let h = PolynomialHash::default();
        assert_eq!(h.bucket("world", 5), 4);
        assert_eq!(h.bucket("HellO", 5), 4);
        assert_eq!(h.bucket("luck", 5), 2);
        assert_eq!(h.bucket("GooD", 5), 2);
    }

    #[test]
    fn test_case_sensitive() {
        let h = PolynomialHash::default();
        assert_ne!(h.hash("World"), h.hash("world"));
    }

    #[test]
    fn test_builder_rejects_bad_parameters() {
        assert!(matches!(
            PolyHashBuilder::new().with_modulus(1_000_000_000).build(),
            Err(Error::InvalidParameter(_))
        ));
        // 2^61 - 1 is prime but too wide
        assert!(PolyHashBuilder::new()
            .with_modulus(0x1FFF_FFFF_FFFF_FFFF)
            .build()
            .is_err());
        assert!(PolyHashBuilder::new().with_multiplier(1).build().is_err());
        assert!(PolyHashBuilder::new()
            .with_modulus(101)
            .with_multiplier(101)
            .build()
            .is_err());
    }

    #[test]
    fn test_builder_custom() {
        let h = PolyHashBuilder::new()
            .with_multiplier(31)
            .with_modulus(101)
            .build()
            .unwrap();
        assert_eq!(h.multiplier(), 31);
        assert_eq!(h.modulus(), 101);
        assert_eq!(h.hash("ab"), (98 * 31 + 97) % 101);
        assert_eq!(h.pow(0), 1);
        assert_eq!(h.pow(2), (31 * 31) % 101);
    }

    #[test]
    fn test_window_roll_matches_init() {
        let mut rolling = PolynomialWindow::default();
        rolling.init(b"abc");
        rolling.roll(b'a', b'd');

        let mut fresh = PolynomialWindow::default();
        fresh.init(b"bcd");
        assert_eq!(rolling.value(), fresh.value());
    }

    proptest! {
        #[test]
        fn prop_hash_in_range(s in ".{0,40}") {
            let h = PolyHashBuilder::new().with_modulus(1_009).build().unwrap();
            prop_assert!(h.hash(&s) < 1_009);
        }

        #[test]
        fn prop_window_roll_consistency(
            data in prop::collection::vec(any::<u8>(), 1..80),
            window in 1usize..12,
        ) {
            prop_assume!(data.len() >= window);
            let mut rolling = PolynomialWindow::default();
            rolling.init(&data[..window]);
            for i in 1..=data.len() - window {
                rolling.roll(data[i - 1], data[i + window - 1]);
                let mut direct = PolynomialWindow::default();
                direct.init(&data[i..i + window]);
                prop_assert_eq!(rolling.value(), direct.value());
            }
        }
    }
}
