pub mod cs;
pub mod error;
pub mod query;

pub use cs::{hashing, string};
pub use error::{Error, Result};
