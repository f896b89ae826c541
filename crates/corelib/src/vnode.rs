//! Virtual node abstractions.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Each bucket is placed on the ring `replica_count` times. A single position
//! per bucket would leave arcs of very uneven length; many independent
//! positions per bucket average those arcs out.
//!
//! # Performance Characteristics
//!
//! - **Memory**: O(b * r) positions for `b` buckets and `r` replicas
//! - **Lookup**: O(log(b * r))
//! - **Construction**: O(b * r * log(b * r))
//!
//! More replicas = better distribution but more memory and a slower build.

use crate::token::{fold, Token};

/// A virtual node: one replica of one bucket.
///
/// The pair is packed into an 8-byte key, `bucket` little-endian in the low
/// four bytes and `replica` little-endian in the high four bytes. The key's
/// folded hash is the virtual node's position on the ring.
///
/// # Example
///
/// ```rust
/// use corelib::VirtualNode;
///
/// let vnode = VirtualNode::new(1, 0);
/// assert_eq!(vnode.key(), 1);
/// assert_eq!(VirtualNode::new(0, 1).key(), 1_i64 << 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualNode {
    /// The bucket that owns this virtual node.
    pub bucket: u32,
    /// Index of this replica within its bucket.
    pub replica: u32,
}

impl VirtualNode {
    /// Create a new virtual node.
    #[inline]
    pub fn new(bucket: u32, replica: u32) -> Self {
        Self { bucket, replica }
    }

    /// The packed 64-bit key for this virtual node.
    #[inline]
    pub fn key(&self) -> i64 {
        let mut buf = [0u8; 8];
        buf[..4].copy_from_slice(&self.bucket.to_le_bytes());
        buf[4..].copy_from_slice(&self.replica.to_le_bytes());
        i64::from_le_bytes(buf)
    }

    /// Position of this virtual node on the ring.
    #[inline]
    pub fn position(&self) -> Token {
        fold(&self.key().to_le_bytes())
    }
}

impl std::fmt::Display for VirtualNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VNode(bucket={}, replica={})", self.bucket, self.replica)
    }
}
