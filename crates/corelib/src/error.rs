//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// All of them are raised at the boundary (construction or call entry);
/// hashing and ring lookup cannot fail once inputs are validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric argument was outside its allowed range.
    #[error("{message} (parameter `{param}`, actual value {actual})")]
    OutOfRange {
        /// Name of the offending parameter.
        param: &'static str,
        /// The value that was passed.
        actual: i64,
        /// Human-readable constraint.
        message: &'static str,
    },
    /// A required argument was absent.
    #[error("value cannot be absent (parameter `{param}`)")]
    NullArgument {
        /// Name of the offending parameter.
        param: &'static str,
    },
}

impl Error {
    /// Name of the parameter that caused the error.
    pub fn param(&self) -> &'static str {
        match self {
            Error::OutOfRange { param, .. } | Error::NullArgument { param } => *param,
        }
    }

    /// The rejected value, for out-of-range errors.
    pub fn actual_value(&self) -> Option<i64> {
        match self {
            Error::OutOfRange { actual, .. } => Some(*actual),
            Error::NullArgument { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = Error::OutOfRange {
            param: "bucketCount",
            actual: -3,
            message: "The bucket count must be greater than 0.",
        };
        assert_eq!(
            err.to_string(),
            "The bucket count must be greater than 0. (parameter `bucketCount`, actual value -3)"
        );
        assert_eq!(err.param(), "bucketCount");
        assert_eq!(err.actual_value(), Some(-3));
    }

    #[test]
    fn test_null_argument_has_no_value() {
        let err = Error::NullArgument { param: "key" };
        assert_eq!(err.param(), "key");
        assert_eq!(err.actual_value(), None);
        assert!(err.to_string().contains("`key`"));
    }
}
