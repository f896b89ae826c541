//! Core library for consistent hashing of keys onto buckets.
//!
//! This crate provides:
//! - Murmur3 x64 128-bit hashing and folding into 64-bit ring tokens
//! - Virtual node placement and the immutable hash ring
//! - A concurrency-safe cache sharing one ring per configuration
//! - Bucket algorithm and key mapper traits with their default implementations
//!
//! ```rust
//! use corelib::{BucketKeyMapper, ConsistentHashingAlgorithm, StringBucketAlgorithm, StringBucketer};
//!
//! let algorithm = ConsistentHashingAlgorithm::new(16, 1024)?;
//! let buckets = StringBucketAlgorithm::new(BucketKeyMapper::new(), algorithm);
//! assert!(buckets.get_bucket("user:1234") < 16);
//! # Ok::<(), corelib::Error>(())
//! ```

pub mod bucket;
pub mod error;
pub mod partitioner;
pub mod ring;
pub mod token;
pub mod vnode;

pub use bucket::{BucketAlgorithm, ConsistentHashingAlgorithm, StringBucketAlgorithm, StringBucketer};
pub use error::{Error, Result};
pub use partitioner::{BucketKeyMapper, KeyMapper};
pub use ring::{HashRing, RingCache, RingConfig};
pub use token::{KeyFolder, Token};
pub use vnode::VirtualNode;
