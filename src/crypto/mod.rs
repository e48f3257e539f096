//! Cryptography module - SHA-256 hashing and proof-of-work strategies

mod hash;
mod pow;

pub use hash::*;
pub use pow::*;
