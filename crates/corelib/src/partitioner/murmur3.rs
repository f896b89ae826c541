//! Murmur3 key mapper.

use crate::partitioner::traits::KeyMapper;
use crate::token::KeyFolder;

/// Maps a string to the folded Murmur3 x64 128-bit hash of its UTF-8 bytes.
///
/// No claim is made about resistance to adversarial collisions.
#[derive(Clone, Copy, Debug, Default)]
pub struct BucketKeyMapper {
    folder: KeyFolder,
}

impl BucketKeyMapper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyMapper for BucketKeyMapper {
    fn get_key(&self, key: &str) -> i64 {
        self.folder.fold(key.as_bytes())
    }

    fn name(&self) -> &'static str {
        "BucketKeyMapper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_get_key_with_same_input_returns_same_key() {
        let mapper = BucketKeyMapper::new();
        assert_eq!(mapper.get_key("foo"), mapper.get_key("foo"));
        assert_eq!(mapper.name(), "BucketKeyMapper");
    }

    #[test]
    fn test_get_key_recorded_values() {
        let mapper = BucketKeyMapper::new();
        assert_eq!(mapper.get_key("foo"), 6_998_890_943_242_814_184);
        assert_eq!(mapper.get_key(""), 0);
    }

    #[test]
    fn test_get_key_uses_utf8_bytes() {
        let mapper = BucketKeyMapper::new();
        assert_eq!(
            mapper.get_key("grüße"),
            KeyFolder.fold("grüße".as_bytes())
        );
    }

    #[test]
    fn test_try_get_key_with_none_fails() {
        let mapper = BucketKeyMapper::new();
        let err = mapper.try_get_key(None).unwrap_err();
        assert_eq!(err, Error::NullArgument { param: "key" });
        assert_eq!(err.param(), "key");
    }

    #[test]
    fn test_try_get_key_with_some_matches_get_key() {
        let mapper = BucketKeyMapper::new();
        assert_eq!(mapper.try_get_key(Some("foo")).unwrap(), mapper.get_key("foo"));
    }
}
