//! Core key-mapper trait definitions.

use crate::error::{Error, Result};

/// Maps string keys into the 64-bit key domain consumed by bucket algorithms.
///
/// Mappers are stateless and thread-safe, allowing concurrent key mapping
/// without synchronization overhead.
pub trait KeyMapper: Send + Sync {
    /// Converts a string key into a 64-bit key.
    ///
    /// Must be deterministic: the same string always yields the same value.
    fn get_key(&self, key: &str) -> i64;

    /// Like [`get_key`](KeyMapper::get_key), for keys that may be absent.
    ///
    /// # Errors
    ///
    /// [`Error::NullArgument`] naming `key` when `key` is `None`.
    fn try_get_key(&self, key: Option<&str>) -> Result<i64> {
        key.map(|key| self.get_key(key))
            .ok_or(Error::NullArgument { param: "key" })
    }

    /// Returns the name of this mapper.
    fn name(&self) -> &'static str;
}
