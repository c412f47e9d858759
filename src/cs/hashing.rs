pub mod chained;
pub mod checksum;
pub mod polynomial;

pub use chained::{ChainedStringSet, ChainedStringSetBuilder};
pub use checksum::{AdditiveChecksum, RollingChecksum};
pub use polynomial::{polynomial_hash, PolyHashBuilder, PolynomialHash, PolynomialWindow};
