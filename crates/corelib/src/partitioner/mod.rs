//! Key mappers for bucket algorithms.
//!
//! Mappers are responsible for converting string keys into the 64-bit keys
//! that bucket algorithms resolve.

pub mod murmur3;
pub mod traits;

pub use murmur3::BucketKeyMapper;
pub use traits::KeyMapper;
