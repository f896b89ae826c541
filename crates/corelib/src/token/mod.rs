//! Ring positions and the hashing that produces them.
//!
//! Every position on the ring, whether it belongs to a virtual node or to a
//! lookup key, is a signed 64-bit token obtained by folding a 128-bit
//! Murmur3 digest.

pub mod fold;
pub mod murmur3;

pub use fold::{fold, KeyFolder};

/// A position on the ring.
///
/// Ordering is plain signed comparison; the ring wraps from `i64::MAX`
/// back to `i64::MIN`.
pub type Token = i64;
