//! Validated ring configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identity of a ring: how many buckets and how many replicas per bucket.
///
/// Both counts are guaranteed positive; the only way to obtain a
/// `RingConfig` is through [`RingConfig::new`] (or deserialization, which
/// runs the same validation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRingConfig")]
pub struct RingConfig {
    bucket_count: u32,
    replica_count: u32,
}

impl RingConfig {
    /// Validates the counts and builds a configuration.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] naming `bucketCount` or `replicaCount` when the
    /// respective value is zero or negative. `bucketCount` is checked first.
    pub fn new(bucket_count: i32, replica_count: i32) -> Result<Self> {
        if bucket_count <= 0 {
            return Err(Error::OutOfRange {
                param: "bucketCount",
                actual: i64::from(bucket_count),
                message: "The bucket count must be greater than 0.",
            });
        }

        if replica_count <= 0 {
            return Err(Error::OutOfRange {
                param: "replicaCount",
                actual: i64::from(replica_count),
                message: "The replica count must be greater than 0.",
            });
        }

        Ok(Self {
            bucket_count: bucket_count as u32,
            replica_count: replica_count as u32,
        })
    }

    /// Number of buckets keys are spread over.
    #[inline]
    pub fn bucket_count(&self) -> u32 {
        self.bucket_count
    }

    /// Number of virtual nodes per bucket.
    #[inline]
    pub fn replica_count(&self) -> u32 {
        self.replica_count
    }

    /// Total number of virtual nodes before collision collapse.
    #[inline]
    pub fn vnode_count(&self) -> usize {
        self.bucket_count as usize * self.replica_count as usize
    }
}

#[derive(Deserialize)]
struct UncheckedRingConfig {
    bucket_count: i32,
    replica_count: i32,
}

impl TryFrom<UncheckedRingConfig> for RingConfig {
    type Error = Error;

    fn try_from(raw: UncheckedRingConfig) -> Result<Self> {
        RingConfig::new(raw.bucket_count, raw.replica_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = RingConfig::new(8, 1024).unwrap();
        assert_eq!(config.bucket_count(), 8);
        assert_eq!(config.replica_count(), 1024);
        assert_eq!(config.vnode_count(), 8192);
    }

    #[test]
    fn test_zero_bucket_count_rejected() {
        let err = RingConfig::new(0, 1024).unwrap_err();
        assert_eq!(err.param(), "bucketCount");
        assert_eq!(err.actual_value(), Some(0));
    }

    #[test]
    fn test_negative_replica_count_rejected() {
        let err = RingConfig::new(8, -1).unwrap_err();
        assert_eq!(err.param(), "replicaCount");
        assert_eq!(err.actual_value(), Some(-1));
    }

    #[test]
    fn test_bucket_count_checked_first() {
        let err = RingConfig::new(0, 0).unwrap_err();
        assert_eq!(err.param(), "bucketCount");
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let config = RingConfig::new(4, 16).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"bucket_count":4,"replica_count":16}"#);
        assert_eq!(serde_json::from_str::<RingConfig>(&json).unwrap(), config);

        let bad = serde_json::from_str::<RingConfig>(r#"{"bucket_count":4,"replica_count":0}"#);
        assert!(bad.is_err());
    }
}
