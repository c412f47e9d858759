//! # Rabin–Karp Substring Search
//!
//! Finds **every** occurrence of a pattern in a text, overlapping ones included.
//!
//! The search precomputes a rolling checksum for each window of the text the
//! length of the pattern. The first window is summed directly and each later one
//! is derived from its predecessor in O(1). Windows whose checksum equals the
//! pattern's are compared byte for byte, and only exact matches are reported.
//! Checksum equality alone never counts as a match.
//!
//! The default checksum is the additive [`AdditiveChecksum`], which is cheap but
//! collides on any permutation of the same bytes. [`TextSearch::with_checksum`]
//! accepts any [`RollingChecksum`], e.g. a
//! [`PolynomialWindow`](crate::cs::hashing::polynomial::PolynomialWindow).
//!
//! Offsets are byte offsets; comparison is case-sensitive.
//!
//! ## Example
//! ```rust
//! use strhash::cs::string::rabin_karp::TextSearch;
//!
//! assert_eq!(TextSearch::new("aba", "abacaba").find_all(), vec![0, 4]);
//! assert_eq!(TextSearch::new("aaaaa", "baaaaaaa").find_all(), vec![1, 2, 3]);
//! ```

use log::{debug, trace};

use crate::cs::hashing::checksum::{AdditiveChecksum, RollingChecksum};

/// Search state for one pattern over one text.
#[derive(Debug, Clone)]
pub struct TextSearch<'a, C = AdditiveChecksum> {
    pattern: &'a [u8],
    text: &'a [u8],
    window: usize,
    /// Number of valid start offsets, zero when the pattern is longer than the text.
    scan_bound: usize,
    checksum: C,
}

impl<'a> TextSearch<'a, AdditiveChecksum> {
    /// Creates a search using the additive checksum.
    pub fn new<P, T>(pattern: &'a P, text: &'a T) -> Self
    where
        P: AsRef<[u8]> + ?Sized,
        T: AsRef<[u8]> + ?Sized,
    {
        Self::with_checksum(pattern, text, AdditiveChecksum::new())
    }
}

impl<'a, C: RollingChecksum> TextSearch<'a, C> {
    /// Creates a search with a caller-supplied checksum. `checksum` is used as a
    /// template and cloned for the pattern and the text.
    pub fn with_checksum<P, T>(pattern: &'a P, text: &'a T, checksum: C) -> Self
    where
        P: AsRef<[u8]> + ?Sized,
        T: AsRef<[u8]> + ?Sized,
    {
        let pattern = pattern.as_ref();
        let text = text.as_ref();
        let window = pattern.len();
        let scan_bound = if window <= text.len() {
            text.len() - window + 1
        } else {
            0
        };
        debug!(
            "text search: pattern {} bytes, text {} bytes, {} offsets",
            window,
            text.len(),
            scan_bound
        );
        Self {
            pattern,
            text,
            window,
            scan_bound,
            checksum,
        }
    }

    pub fn scan_bound(&self) -> usize {
        self.scan_bound
    }

    /// Checksums of `text[i..i + m)` for every offset `i` in `[0, scan_bound)`.
    pub fn checksums(&self) -> Vec<u64> {
        if self.scan_bound == 0 {
            return Vec::new();
        }
        let mut rolling = self.checksum.clone();
        rolling.init(&self.text[..self.window]);

        let mut sums = Vec::with_capacity(self.scan_bound);
        sums.push(rolling.value());
        if self.window == 0 {
            // Every empty window has the same checksum.
            sums.resize(self.scan_bound, rolling.value());
            return sums;
        }
        for i in 1..self.scan_bound {
            rolling.roll(self.text[i - 1], self.text[i + self.window - 1]);
            sums.push(rolling.value());
        }
        sums
    }

    /// Returns every offset where the pattern occurs, ascending.
    pub fn find_all(&self) -> Vec<usize> {
        let mut probe = self.checksum.clone();
        probe.init(self.pattern);
        let target = probe.value();

        let mut rejected = 0usize;
        let matches: Vec<usize> = self
            .checksums()
            .into_iter()
            .enumerate()
            .filter(|&(_, sum)| sum == target)
            .filter_map(|(i, _)| {
                if &self.text[i..i + self.window] == self.pattern {
                    Some(i)
                } else {
                    trace!("checksum collision at offset {}", i);
                    rejected += 1;
                    None
                }
            })
            .collect();
        debug!(
            "text search: {} matches, {} checksum collisions rejected",
            matches.len(),
            rejected
        );
        matches
    }
}

/// Convenience wrapper: all offsets of `pattern` in `text` using the additive checksum.
pub fn rabin_karp(pattern: &str, text: &str) -> Vec<usize> {
    TextSearch::new(pattern, text).find_all()
}
