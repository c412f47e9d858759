//! Crate-wide error type.

use thiserror::Error;

/// Errors produced by the hashing toolkit and its query feeds.
#[derive(Debug, Error)]
pub enum Error {
    /// A bucket index outside `[0, bucket_count)` was requested.
    #[error("bucket index {index} out of range for {bucket_count} buckets")]
    BucketOutOfRange { index: usize, bucket_count: usize },

    /// A hash or table parameter was rejected at build time.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A feed line could not be parsed into a query.
    #[error("malformed query: {0}")]
    MalformedQuery(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
