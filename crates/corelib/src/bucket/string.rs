//! String keys over any bucket algorithm.

use crate::bucket::{BucketAlgorithm, StringBucketer};
use crate::error::Result;
use crate::partitioner::KeyMapper;

/// Maps a string to a 64-bit key with `M`, then resolves it with `A`.
#[derive(Debug, Clone)]
pub struct StringBucketAlgorithm<M, A> {
    mapper: M,
    algorithm: A,
}

impl<M: KeyMapper, A: BucketAlgorithm> StringBucketAlgorithm<M, A> {
    pub fn new(mapper: M, algorithm: A) -> Self {
        Self { mapper, algorithm }
    }

    /// Number of buckets of the wrapped algorithm.
    pub fn bucket_count(&self) -> u32 {
        self.algorithm.bucket_count()
    }
}

impl<M: KeyMapper, A: BucketAlgorithm> StringBucketer for StringBucketAlgorithm<M, A> {
    fn get_bucket(&self, key: &str) -> u32 {
        self.algorithm.get_bucket(self.mapper.get_key(key))
    }

    fn try_get_bucket(&self, key: Option<&str>) -> Result<u32> {
        let key = self.mapper.try_get_key(key)?;
        Ok(self.algorithm.get_bucket(key))
    }
}
