//! # Chained String Set
//!
//! This module implements a hash **set of strings** using **separate chaining**.
//! It supports:
//! - **Fixed** bucket count chosen at construction. The table never resizes, so a
//!   poor bucket count degrades lookups to a linear scan of one long chain.
//! - **Polynomial** bucket placement via [`PolynomialHash`].
//! - **Most-recent-first** chains: new strings are prepended to their bucket.
//! - **add**, **delete**, **find** and **dump_bucket** operations.
//!
//! Comparisons are byte-exact, so `"World"` and `"world"` are different keys.
//!
//! ## Example
//! ```rust
//! use strhash::cs::hashing::chained::ChainedStringSet;
//!
//! let mut set = ChainedStringSet::new(5).unwrap();
//! set.add("world");
//! set.add("HellO");
//! assert_eq!(set.dump_bucket(4).unwrap(), vec!["HellO", "world"]);
//! assert!(!set.find("World"));
//! ```

use std::collections::VecDeque;

use log::{debug, trace};

use crate::cs::hashing::polynomial::PolynomialHash;
use crate::error::{Error, Result};

/// Default bucket count if none specified.
const DEFAULT_BUCKET_COUNT: usize = 16;

/// A chain of strings, most recently inserted at the front.
type Bucket = VecDeque<String>;

/// A separate-chaining set of strings with a fixed number of buckets.
#[derive(Debug, Clone)]
pub struct ChainedStringSet {
    buckets: Vec<Bucket>,
    /// The number of stored strings.
    len: usize,
    hasher: PolynomialHash,
}

/// A builder for the `ChainedStringSet`.
#[derive(Debug, Clone)]
pub struct ChainedStringSetBuilder {
    bucket_count: usize,
    hasher: PolynomialHash,
}

impl Default for ChainedStringSetBuilder {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            hasher: PolynomialHash::default(),
        }
    }
}

impl ChainedStringSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets. Fixed for the lifetime of the set.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Sets the hash used for bucket placement.
    pub fn with_hasher(mut self, hasher: PolynomialHash) -> Self {
        self.hasher = hasher;
        self
    }

    /// Build the final `ChainedStringSet`. Zero buckets is rejected.
    pub fn build(self) -> Result<ChainedStringSet> {
        if self.bucket_count == 0 {
            return Err(Error::InvalidParameter(
                "bucket count must be positive".into(),
            ));
        }
        let mut buckets = Vec::with_capacity(self.bucket_count);
        buckets.resize_with(self.bucket_count, Default::default);
        debug!("chained string set with {} buckets", self.bucket_count);

        Ok(ChainedStringSet {
            buckets,
            len: 0,
            hasher: self.hasher,
        })
    }
}

impl ChainedStringSet {
    /// Creates an empty set with `bucket_count` buckets and the default hash.
    pub fn new(bucket_count: usize) -> Result<Self> {
        ChainedStringSetBuilder::new()
            .with_bucket_count(bucket_count)
            .build()
    }

    pub fn builder() -> ChainedStringSetBuilder {
        ChainedStringSetBuilder::new()
    }

    /// Returns the number of strings in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The bucket `s` belongs to, whether or not it is stored.
    pub fn bucket_of(&self, s: &str) -> usize {
        self.hasher.bucket(s, self.buckets.len())
    }

    /// Inserts `s` at the head of its bucket.
    /// Returns `false` and leaves the set untouched if `s` is already present.
    pub fn add(&mut self, s: &str) -> bool {
        let idx = self.bucket_of(s);
        let bucket = &mut self.buckets[idx];
        if bucket.iter().any(|entry| entry == s) {
            return false;
        }
        bucket.push_front(s.to_owned());
        self.len += 1;
        trace!("add {:?} -> bucket {}", s, idx);
        true
    }

    /// Removes `s` from its bucket, keeping the order of the remaining entries.
    /// Returns `false` if `s` was not present.
    pub fn delete(&mut self, s: &str) -> bool {
        let idx = self.bucket_of(s);
        let bucket = &mut self.buckets[idx];
        match bucket.iter().position(|entry| entry == s) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                trace!("delete {:?} from bucket {}", s, idx);
                true
            }
            None => false,
        }
    }

    /// Returns whether `s` is in the set.
    pub fn find(&self, s: &str) -> bool {
        self.buckets[self.bucket_of(s)]
            .iter()
            .any(|entry| entry == s)
    }

    /// Returns the contents of bucket `index`, most recent first.
    ///
    /// # Errors
    /// [`Error::BucketOutOfRange`] if `index >= bucket_count`.
    pub fn dump_bucket(&self, index: usize) -> Result<Vec<&str>> {
        self.buckets
            .get(index)
            .map(|bucket| bucket.iter().map(String::as_str).collect())
            .ok_or(Error::BucketOutOfRange {
                index,
                bucket_count: self.buckets.len(),
            })
    }

    /// Iterates over every string, bucket by bucket, each chain most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
    }

    /// Stored strings per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(VecDeque::len).max().unwrap_or(0)
    }
}
