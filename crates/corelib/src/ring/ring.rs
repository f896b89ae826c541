//! Immutable hash ring mapping tokens to buckets.

use std::collections::BTreeMap;

use tracing::debug;

use crate::ring::config::RingConfig;
use crate::token::{KeyFolder, Token};
use crate::vnode::VirtualNode;

/// Consistent hash ring over a fixed set of buckets.
///
/// Holds two parallel arrays: strictly ascending boundary positions and the
/// bucket owning each one. A key is owned by the first boundary at or after
/// its position, wrapping past the largest boundary to the smallest.
///
/// The ring is never mutated after [`HashRing::new`] returns, so it can be
/// shared freely across threads (usually behind an `Arc` handed out by
/// [`RingCache`](crate::ring::RingCache)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRing {
    config: RingConfig,
    positions: Vec<Token>,
    buckets: Vec<u32>,
}

impl HashRing {
    /// Builds the ring for `config`.
    ///
    /// Virtual nodes are placed bucket-major (every replica of bucket 0, then
    /// bucket 1, ...). When two virtual nodes hash to the same position, the
    /// one placed later owns it.
    pub fn new(config: RingConfig) -> Self {
        let placements = (0..config.bucket_count()).flat_map(|bucket| {
            (0..config.replica_count())
                .map(move |replica| (VirtualNode::new(bucket, replica).position(), bucket))
        });
        Self::from_placements(config, placements)
    }

    /// Collapses `(position, bucket)` placements into boundary arrays.
    /// Later placements overwrite earlier ones at the same position.
    fn from_placements(
        config: RingConfig,
        placements: impl IntoIterator<Item = (Token, u32)>,
    ) -> Self {
        let mut bounds: BTreeMap<Token, u32> = BTreeMap::new();
        for (position, bucket) in placements {
            bounds.insert(position, bucket);
        }

        let collisions = config.vnode_count().saturating_sub(bounds.len());
        let (positions, buckets): (Vec<Token>, Vec<u32>) = bounds.into_iter().unzip();

        debug!(
            bucket_count = config.bucket_count(),
            replica_count = config.replica_count(),
            boundaries = positions.len(),
            collisions,
            "built hash ring"
        );

        Self {
            config,
            positions,
            buckets,
        }
    }

    /// Returns the bucket that owns `key`.
    pub fn get_bucket(&self, key: i64) -> u32 {
        self.bucket_for_position(self.position_of(key))
    }

    /// Returns the bucket owning the first boundary at or after `position`.
    pub fn bucket_for_position(&self, position: Token) -> u32 {
        let index = match self.positions.binary_search(&position) {
            Ok(exact) => exact,
            // Past the largest boundary wraps to the smallest.
            Err(insertion) => insertion % self.positions.len(),
        };
        self.buckets[index]
    }

    /// Position of `key` on the ring.
    #[inline]
    pub fn position_of(&self, key: i64) -> Token {
        KeyFolder.fold_i64(key)
    }

    /// The configuration this ring was built from.
    #[inline]
    pub fn config(&self) -> RingConfig {
        self.config
    }

    #[inline]
    pub fn bucket_count(&self) -> u32 {
        self.config.bucket_count()
    }

    #[inline]
    pub fn replica_count(&self) -> u32 {
        self.config.replica_count()
    }

    /// Number of distinct boundary positions.
    ///
    /// Equal to `bucket_count * replica_count` unless virtual nodes collided.
    #[inline]
    pub fn boundary_count(&self) -> usize {
        self.positions.len()
    }

    /// Boundaries in ascending position order, paired with their bucket.
    pub fn boundaries(&self) -> impl Iterator<Item = (Token, u32)> + '_ {
        self.positions.iter().copied().zip(self.buckets.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(bucket_count: i32, replica_count: i32) -> HashRing {
        HashRing::new(RingConfig::new(bucket_count, replica_count).unwrap())
    }

    #[test]
    fn test_single_vnode_ring() {
        let ring = ring(1, 1);
        let boundaries: Vec<_> = ring.boundaries().collect();
        assert_eq!(boundaries, vec![(1_960_439_903_460_311_581, 0)]);

        for key in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
            assert_eq!(ring.get_bucket(key), 0);
        }
    }

    #[test]
    fn test_boundaries_strictly_ascending() {
        let ring = ring(4, 4);
        assert_eq!(ring.boundary_count(), 16);

        let positions: Vec<Token> = ring.boundaries().map(|(p, _)| p).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(positions[0], -8_893_087_622_843_412_529);
        assert_eq!(positions[15], 7_470_067_580_170_767_002);
    }

    #[test]
    fn test_boundaries_match_vnode_positions() {
        let ring = ring(3, 5);
        for (position, bucket) in ring.boundaries() {
            let owned =
                (0..5).any(|replica| VirtualNode::new(bucket, replica).position() == position);
            assert!(owned, "position {position} not produced by bucket {bucket}");
        }
    }

    #[test]
    fn test_exact_boundary_hit() {
        // Two buckets, one replica each: bucket 0 at 1960439903460311581,
        // bucket 1 at 4453727346766340176.
        let ring = ring(2, 1);
        assert_eq!(ring.bucket_for_position(1_960_439_903_460_311_581), 0);
        assert_eq!(ring.bucket_for_position(4_453_727_346_766_340_176), 1);
    }

    #[test]
    fn test_successor_lookup() {
        let ring = ring(2, 1);
        assert_eq!(ring.bucket_for_position(i64::MIN), 0);
        assert_eq!(ring.bucket_for_position(1_960_439_903_460_311_582), 1);
        assert_eq!(ring.bucket_for_position(4_453_727_346_766_340_175), 1);
    }

    #[test]
    fn test_wraparound_past_largest_boundary() {
        let ring = ring(2, 1);
        assert_eq!(ring.bucket_for_position(4_453_727_346_766_340_177), 0);
        assert_eq!(ring.bucket_for_position(i64::MAX), 0);

        // Key 4 hashes to 7969322792686194925, beyond both boundaries.
        assert_eq!(ring.position_of(4), 7_969_322_792_686_194_925);
        assert_eq!(ring.get_bucket(4), 0);
    }

    #[test]
    fn test_recorded_assignments() {
        let ring = ring(8, 1024);
        assert_eq!(ring.boundary_count(), 8192);
        assert_eq!(ring.get_bucket(42), 0);
        assert_eq!(ring.get_bucket(1), 1);
        assert_eq!(ring.get_bucket(-1), 2);
        assert_eq!(ring.get_bucket(7), 7);
        assert_eq!(ring.get_bucket(1000), 3);
    }

    #[test]
    fn test_colliding_placements_last_writer_wins() {
        let config = RingConfig::new(3, 2).unwrap();
        let ring = HashRing::from_placements(
            config,
            [(10, 0), (-5, 0), (10, 1), (30, 1), (-5, 2), (20, 2)],
        );

        let boundaries: Vec<_> = ring.boundaries().collect();
        assert_eq!(boundaries, vec![(-5, 2), (10, 1), (20, 2), (30, 1)]);
        assert_eq!(ring.boundary_count(), 4);
        assert_eq!(ring.bucket_for_position(0), 1);
        assert_eq!(ring.bucket_for_position(31), 2);
    }

    #[test]
    fn test_accessors() {
        let ring = ring(8, 16);
        assert_eq!(ring.bucket_count(), 8);
        assert_eq!(ring.replica_count(), 16);
        assert_eq!(ring.config(), RingConfig::new(8, 16).unwrap());
    }
}
