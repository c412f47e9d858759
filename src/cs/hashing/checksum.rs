//! # Rolling Checksums
//!
//! A rolling checksum summarises a fixed-size window of bytes and can be slid one
//! position to the right in O(1): drop the leading byte, append the next one.
//! Substring search uses it as a **pre-filter**. Equal checksums only nominate a
//! candidate, which still has to be compared byte for byte.

/// A checksum over a sliding window of bytes.
pub trait RollingChecksum: Clone {
    /// Resets the state to the checksum of `window`.
    fn init(&mut self, window: &[u8]);

    /// Slides the window one byte to the right.
    ///
    /// `outgoing` must be the first byte of the current window.
    fn roll(&mut self, outgoing: u8, incoming: u8);

    /// The checksum of the current window.
    fn value(&self) -> u64;
}

/// Sum of byte values.
///
/// Position-insensitive, so anagrams collide (`"ab"` and `"ba"`, also `"ad"` and
/// `"bc"`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdditiveChecksum {
    sum: u64,
}

impl AdditiveChecksum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct summation over `bytes`.
    pub fn of(bytes: &[u8]) -> u64 {
        bytes.iter().map(|&b| b as u64).sum()
    }
}

impl RollingChecksum for AdditiveChecksum {
    fn init(&mut self, window: &[u8]) {
        self.sum = Self::of(window);
    }

    fn roll(&mut self, outgoing: u8, incoming: u8) {
        self.sum = self.sum - outgoing as u64 + incoming as u64;
    }

    fn value(&self) -> u64 {
        self.sum
    }
}
