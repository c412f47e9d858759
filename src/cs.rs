pub mod hashing;
pub mod string;

// Re-export the hashing primitives and search entry points
pub use hashing::*;
pub use string::*;
