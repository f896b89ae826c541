//! Bucket algorithms: resolving keys to one of a fixed number of buckets.

pub mod consistent;
pub mod string;

pub use consistent::ConsistentHashingAlgorithm;
pub use string::StringBucketAlgorithm;

use crate::error::Result;

/// Resolves 64-bit keys to a bucket index in `0..bucket_count()`.
pub trait BucketAlgorithm: Send + Sync {
    /// Number of buckets keys are spread over.
    fn bucket_count(&self) -> u32;

    /// Returns the bucket owning `key`. Deterministic.
    fn get_bucket(&self, key: i64) -> u32;
}

/// Resolves string keys to a bucket index.
pub trait StringBucketer: Send + Sync {
    /// Returns the bucket owning `key`.
    fn get_bucket(&self, key: &str) -> u32;

    /// Like [`get_bucket`](StringBucketer::get_bucket), for keys that may be absent.
    fn try_get_bucket(&self, key: Option<&str>) -> Result<u32>;
}

impl<T: BucketAlgorithm + ?Sized> BucketAlgorithm for &T {
    fn bucket_count(&self) -> u32 {
        (**self).bucket_count()
    }

    fn get_bucket(&self, key: i64) -> u32 {
        (**self).get_bucket(key)
    }
}
