//! Shared cache of constructed rings.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::ring::config::RingConfig;
use crate::ring::ring::HashRing;

static GLOBAL: Lazy<RingCache> = Lazy::new(RingCache::new);

/// Concurrency-safe cache of [`HashRing`]s keyed by [`RingConfig`].
///
/// Entries are created lazily on first request and never evicted. Callers
/// asking for the same configuration share one `Arc<HashRing>`.
#[derive(Debug, Default)]
pub struct RingCache {
    rings: DashMap<RingConfig, Arc<HashRing>>,
}

impl RingCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            rings: DashMap::new(),
        }
    }

    /// The process-wide cache, created empty on first use.
    pub fn global() -> &'static RingCache {
        &GLOBAL
    }

    /// Returns the ring for `config`, building and inserting it on a miss.
    ///
    /// The ring is built without holding any map lock. If another caller
    /// inserted the same configuration meanwhile, its ring is returned and
    /// the one built here is dropped.
    pub fn get_or_create(&self, config: RingConfig) -> Arc<HashRing> {
        if let Some(ring) = self.rings.get(&config) {
            trace!(?config, "ring cache hit");
            return Arc::clone(ring.value());
        }

        let built = Arc::new(HashRing::new(config));
        let ring = Arc::clone(self.rings.entry(config).or_insert(built).value());
        debug!(?config, cached = self.rings.len(), "ring cache miss");
        ring
    }

    /// Returns the cached ring for `config` without building one.
    pub fn get(&self, config: &RingConfig) -> Option<Arc<HashRing>> {
        self.rings.get(config).map(|ring| Arc::clone(ring.value()))
    }

    /// Number of cached configurations.
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}
