//! Folding of wide digests into a single ring token.

use crate::token::murmur3::murmur3_x64_128;
use crate::token::Token;

/// Seed used for every fold. Changing it moves every key and virtual node.
const SEED: u64 = 0;

/// Reduces `bytes` to a signed 64-bit token.
///
/// The 128-bit Murmur3 digest is read as two little-endian `i64` words which
/// are summed with wrapping arithmetic. Pure and deterministic.
#[inline]
pub fn fold(bytes: &[u8]) -> Token {
    let (h1, h2) = murmur3_x64_128(bytes, SEED);
    (h1 as i64).wrapping_add(h2 as i64)
}

/// Stateless folder; a handle for code that wants a value instead of a free function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyFolder;

impl KeyFolder {
    /// Folds arbitrary bytes. See [`fold`].
    #[inline]
    pub fn fold(&self, bytes: &[u8]) -> Token {
        fold(bytes)
    }

    /// Folds the little-endian bytes of a 64-bit integer key.
    #[inline]
    pub fn fold_i64(&self, key: i64) -> Token {
        fold(&key.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_recorded_values() {
        assert_eq!(fold(b""), 0);
        assert_eq!(fold(b"foo"), 6_998_890_943_242_814_184);
        assert_eq!(fold(b"hello"), 2_807_774_592_216_315_931);
        assert_eq!(KeyFolder.fold_i64(42), -2_637_460_573_209_186_952);
    }

    #[test]
    fn test_fold_is_deterministic() {
        let folder = KeyFolder;
        assert_eq!(folder.fold(b"some-key"), folder.fold(b"some-key"));
        assert_ne!(folder.fold(b"some-key"), folder.fold(b"some-key2"));
    }
}
