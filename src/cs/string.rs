pub mod rabin_karp;

pub use rabin_karp::{rabin_karp, TextSearch};
