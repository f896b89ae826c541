//! Consistent hashing bucket algorithm.

use std::sync::Arc;

use crate::bucket::BucketAlgorithm;
use crate::error::Result;
use crate::ring::{HashRing, RingCache, RingConfig};

/// Consistent hashing over `bucket_count` buckets with `replica_count`
/// virtual nodes each.
///
/// The underlying [`HashRing`] comes from a [`RingCache`]: every algorithm
/// built with the same counts against the same cache shares one ring.
///
/// # Example
///
/// ```rust
/// use corelib::{BucketAlgorithm, ConsistentHashingAlgorithm};
///
/// let algorithm = ConsistentHashingAlgorithm::new(8, 1024)?;
/// assert!(algorithm.get_bucket(42) < 8);
/// # Ok::<(), corelib::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConsistentHashingAlgorithm {
    bucket_count: u32,
    replica_count: u32,
    ring: Arc<HashRing>,
}

impl ConsistentHashingAlgorithm {
    /// Builds an algorithm backed by the process-wide [`RingCache::global`].
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) naming `bucketCount`
    /// or `replicaCount` when either count is not positive.
    pub fn new(bucket_count: i32, replica_count: i32) -> Result<Self> {
        Self::with_cache(RingCache::global(), bucket_count, replica_count)
    }

    /// Builds an algorithm backed by `cache`.
    pub fn with_cache(cache: &RingCache, bucket_count: i32, replica_count: i32) -> Result<Self> {
        let config = RingConfig::new(bucket_count, replica_count)?;
        Ok(Self {
            bucket_count: config.bucket_count(),
            replica_count: config.replica_count(),
            ring: cache.get_or_create(config),
        })
    }

    pub fn replica_count(&self) -> u32 {
        self.replica_count
    }

    /// The ring this algorithm resolves against.
    pub fn ring(&self) -> &Arc<HashRing> {
        &self.ring
    }
}

impl BucketAlgorithm for ConsistentHashingAlgorithm {
    fn bucket_count(&self) -> u32 {
        self.bucket_count
    }

    fn get_bucket(&self, key: i64) -> u32 {
        self.ring.get_bucket(key)
    }
}
