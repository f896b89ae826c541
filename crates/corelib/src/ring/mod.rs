//! Consistent hash ring implementation.
//!
//! The ring manages virtual node positions and resolves keys to the bucket
//! owning the nearest boundary clockwise. Rings are immutable; the cache
//! shares one instance per configuration.

pub mod cache;
pub mod config;
pub mod ring;

pub use cache::RingCache;
pub use config::RingConfig;
pub use ring::HashRing;
